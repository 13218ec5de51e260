//! Listado API server binary.
//!
//! Wires concrete infrastructure into the generic service stack. The
//! verification ledger backend is selected by `LEDGER_BACKEND`
//! (`memory`, the default, or `mysql`); the background sweeper runs only
//! for the memory backend, where nothing else bounds growth.

use actix_web::{web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lst_api::middleware::cors::create_cors;
use lst_api::{configure_routes, AppState};
use lst_core::services::ledger::{Ledger, LedgerSweeper, LedgerStore, SweeperConfig};
use lst_core::services::{AccountService, ProfileService};
use lst_infra::{
    DatabasePool, HttpIdentityClient, HttpStorageClient, MemoryLedgerStore, MySqlLedgerStore,
    MySqlSocialLinkRepository, MySqlUserRepository, SmtpEmailSender,
};
use lst_shared::config::AppConfig;
use lst_shared::types::response::{ApiResponse, Empty};

fn startup_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(environment = %config.environment, "Starting Listado API server");

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(startup_error)?;
    pool.health_check().await.map_err(startup_error)?;

    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let social = Arc::new(MySqlSocialLinkRepository::new(pool.get_pool().clone()));
    let identity = Arc::new(HttpIdentityClient::from_env().map_err(startup_error)?);
    let storage = Arc::new(HttpStorageClient::from_env().map_err(startup_error)?);
    let sender = Arc::new(SmtpEmailSender::new(&config.email).map_err(startup_error)?);

    let backend = std::env::var("LEDGER_BACKEND").unwrap_or_else(|_| "memory".to_string());
    match backend.as_str() {
        "mysql" => {
            info!("Verification ledger backend: mysql");
            let store = Arc::new(MySqlLedgerStore::new(pool.get_pool().clone()));
            serve(config, store, sender, users, identity, social, storage, false).await
        }
        "memory" => {
            info!("Verification ledger backend: memory");
            let store = Arc::new(MemoryLedgerStore::new());
            serve(config, store, sender, users, identity, social, storage, true).await
        }
        other => Err(startup_error(format!(
            "Unknown LEDGER_BACKEND '{}', expected 'memory' or 'mysql'",
            other
        ))),
    }
}

#[allow(clippy::too_many_arguments)]
async fn serve<S: LedgerStore + 'static>(
    config: AppConfig,
    store: Arc<S>,
    sender: Arc<SmtpEmailSender>,
    users: Arc<MySqlUserRepository>,
    identity: Arc<HttpIdentityClient>,
    social: Arc<MySqlSocialLinkRepository>,
    storage: Arc<HttpStorageClient>,
    run_sweeper: bool,
) -> std::io::Result<()> {
    let ledger = Arc::new(Ledger::new(store, config.verification.clone()));

    if run_sweeper {
        let sweeper = Arc::new(LedgerSweeper::new(
            Arc::clone(&ledger),
            SweeperConfig {
                interval_seconds: config.verification.sweep_interval_seconds,
                enabled: config.verification.sweep_enabled,
            },
        ));
        sweeper.start_background_task();
    }

    let account_service = Arc::new(AccountService::new(
        ledger,
        sender,
        Arc::clone(&users),
        identity,
        Arc::clone(&social),
    ));
    let profile_service = Arc::new(ProfileService::new(users, social, storage));
    let state = web::Data::new(AppState::new(account_service, profile_service));

    let bind_address = config.server.bind_address();
    let environment = config.environment;
    let server_config = config.server.clone();
    info!(bind = %bind_address, "HTTP server listening");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(create_cors(environment, &server_config))
            .app_data(state.clone())
            .configure(
                configure_routes::<
                    S,
                    SmtpEmailSender,
                    MySqlUserRepository,
                    HttpIdentityClient,
                    MySqlSocialLinkRepository,
                    HttpStorageClient,
                >,
            )
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await
}

async fn not_found() -> HttpResponse {
    let body: ApiResponse<Empty> = ApiResponse::error("The requested resource was not found");
    HttpResponse::NotFound().json(body)
}
