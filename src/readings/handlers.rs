use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::{
    error::AppError,
    readings::{dto::ReadingPayload, log::Reading},
    state::AppState,
};

/// Appends a reading and notifies live subscribers before responding.
#[instrument(skip(state, payload))]
pub async fn add_reading(
    State(state): State<AppState>,
    payload: Result<Json<ReadingPayload>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected reading payload");
        AppError::Validation("No data provided".into())
    })?;

    // An all-absent payload counts as no data, same as a missing body.
    if payload.is_empty() {
        warn!("rejected empty reading payload");
        return Err(AppError::Validation("No data provided".into()));
    }

    let reading = state.readings.append(payload);
    state.events.publish(reading.clone());
    info!(id = reading.id, "reading ingested");

    Ok(Json(json!({ "status": "success" })))
}

pub async fn get_readings(State(state): State<AppState>) -> Json<Vec<Reading>> {
    Json(state.readings.list())
}
