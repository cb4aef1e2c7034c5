//! HTTP adapter - the thin axum surface over the handlers.

mod dto;
mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::app;
