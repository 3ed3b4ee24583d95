use std::path::Path;
use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db;
use crate::predict::model::YieldModel;
use crate::readings::events::EventBus;
use crate::readings::log::ReadingLog;

/// Shared state injected into every handler. The reading log and event bus
/// are explicit service objects rather than globals, so tests can run
/// against isolated instances.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    /// Session signing key, regenerated at every process start. Restarting
    /// the server invalidates all outstanding sessions.
    pub session_key: Key,
    pub readings: ReadingLog,
    pub events: EventBus,
    pub model: Arc<YieldModel>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());

        let db = db::connect(&config.database_url).await?;
        db::ensure_schema(&db).await?;
        db::seed_credentials(&db).await?;

        let model = Arc::new(YieldModel::load(Path::new(&config.model_path))?);

        Ok(Self::from_parts(db, config, model))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>, model: Arc<YieldModel>) -> Self {
        Self {
            db,
            config,
            session_key: Key::generate(),
            readings: ReadingLog::new(),
            events: EventBus::new(256),
            model,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}
