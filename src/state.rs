// src/state.rs
use chrono::Utc;
use chrono_tz::Tz;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::store::{DataStore, MetricsSource};

/// Shared, read-only request context.
pub struct AppState {
    pub source: Arc<dyn MetricsSource>,
    pub timezone: Tz,
    pub default_client: String,
}

impl AppState {
    pub fn new(source: Arc<dyn MetricsSource>, timezone: Tz, default_client: impl Into<String>) -> Self {
        AppState {
            source,
            timezone,
            default_client: default_client.into(),
        }
    }

    /// Generates and freezes the store. Must finish before the server binds.
    pub fn initialize(config: &AppConfig) -> Self {
        let store = DataStore::generate(config.seed, Utc::now(), config.timezone);
        AppState::new(Arc::new(store), config.timezone, config.default_client.clone())
    }

    /// Current calendar date in the reporting time zone.
    pub fn audit_date(&self) -> String {
        Utc::now()
            .with_timezone(&self.timezone)
            .format("%Y-%m-%d")
            .to_string()
    }
}
