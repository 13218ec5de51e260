//! CORS middleware configuration.
//!
//! Development allows any origin for local frontends and tooling;
//! production restricts to the configured origin list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use lst_shared::config::{Environment, ServerConfig};

/// Build the CORS layer for the current environment
pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    if environment.is_production() {
        create_production_cors(&server.allowed_origins)
    } else {
        create_development_cors()
    }
}

fn create_development_cors() -> Cors {
    tracing::info!("Configuring CORS for development (any origin)");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600)
}

fn create_production_cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        tracing::warn!("ALLOWED_ORIGINS is empty; browsers will be refused in production");
    } else {
        tracing::info!(origins = ?allowed_origins, "Configuring CORS for production");
    }

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}
