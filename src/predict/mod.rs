use axum::{routing::get, Router};

use crate::state::AppState;

pub mod handlers;
pub mod model;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/predict",
        get(handlers::predict_form).post(handlers::predict_submit),
    )
}
