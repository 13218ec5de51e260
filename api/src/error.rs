//! Domain error to HTTP response mapping
//!
//! Client-recoverable failures (validation, code lifecycle) map to 400;
//! dependency and configuration failures map to 500. The body is always
//! the flat `{success: false, error}` envelope.

use actix_web::HttpResponse;

use lst_core::errors::DomainError;
use lst_shared::types::response::{ApiResponse, Empty};

/// Convert a domain error into its envelope response
pub fn error_response(err: &DomainError) -> HttpResponse {
    let body: ApiResponse<Empty> = ApiResponse::error(err.to_string());

    if err.is_client_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        tracing::error!(error = %err, "Request failed on a server-side dependency");
        HttpResponse::InternalServerError().json(body)
    }
}

/// Convert validator output into a single caller-facing message
pub fn validation_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let detail = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ");

    let body: ApiResponse<Empty> = ApiResponse::error(detail);
    HttpResponse::BadRequest().json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lst_core::errors::CodeError;

    #[actix_rt::test]
    async fn code_errors_map_to_bad_request() {
        let response = error_response(&DomainError::from(CodeError::Expired));
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn dependency_errors_map_to_internal_error() {
        let response = error_response(&DomainError::dependency("email", "relay down"));
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
