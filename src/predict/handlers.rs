use axum::{
    extract::State,
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    auth::session::AuthSession,
    error::AppError,
    pages,
    predict::model::PredictionInput,
    state::AppState,
};

/// Form body for `POST /predict`. Values arrive as text and are parsed by
/// hand so a missing or non-numeric field is a 400 rather than a panic or
/// a framework rejection.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    #[serde(rename = "pH")]
    pub ph: Option<String>,
    pub rainfall: Option<String>,
    pub temperature: Option<String>,
    #[serde(rename = "Area_in_hectares")]
    pub area_in_hectares: Option<String>,
}

fn numeric(field: &str, raw: Option<&str>) -> Result<f64, AppError> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .ok_or_else(|| AppError::Input(format!("field `{field}` is missing or not numeric")))
}

pub async fn predict_form(AuthSession(session): AuthSession) -> Html<String> {
    Html(pages::predict_form_page(&session.name))
}

#[instrument(skip(state, session, form))]
pub async fn predict_submit(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, AppError> {
    let input = PredictionInput {
        ph: numeric("pH", form.ph.as_deref())?,
        rainfall: numeric("rainfall", form.rainfall.as_deref())?,
        temperature: numeric("temperature", form.temperature.as_deref())?,
        area_hectares: numeric("Area_in_hectares", form.area_in_hectares.as_deref())?,
    };

    let predicted_yield = state.model.predict(&input);
    info!(predicted_yield, "yield predicted");

    let message = format!(
        "The predicted crop yield is approximately {predicted_yield:.2} tons per hectare."
    );
    Ok(Html(pages::prediction_page(&session.name, &message, &input)))
}
