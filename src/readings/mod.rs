use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod events;
pub mod handlers;
pub mod log;
pub mod sse;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_reading", post(handlers::add_reading))
        .route("/get_readings", get(handlers::get_readings))
        .route("/events", get(sse::events))
}
