//! # API Layer
//!
//! actix-web surface of the Listado backend: request DTOs, handlers per
//! use case, error-to-envelope mapping, CORS, and app wiring. Handlers
//! are orchestration only; every decision lives in lst_core.

pub mod app;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::configure_routes;
pub use state::AppState;
