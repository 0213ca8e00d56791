// src/handlers/dashboard.rs
use log::{debug, error, info};
use std::collections::HashMap;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::services::clients::{all_profiles, profile_for};
use crate::services::data_sources::data_source_statuses;
use crate::services::overview::build_overview;
use crate::state::AppState;

pub const OVERVIEW_FAILURE: &str = "Failed to fetch dashboard data";
pub const DATA_SOURCES_FAILURE: &str = "Failed to fetch data source status";

pub async fn get_overview(
    query: HashMap<String, String>,
    state: Arc<AppState>,
) -> Result<Json, Rejection> {
    info!("Handling request to get dashboard overview");

    let client_id = query
        .get("client")
        .map(String::as_str)
        .unwrap_or(&state.default_client);
    let profile = profile_for(client_id);
    let audit_date = state.audit_date();
    debug!("Building overview for client {} on {}", profile.id, audit_date);

    match build_overview(state.source.as_ref(), profile, &audit_date).await {
        Ok(overview) => {
            debug!(
                "Overview score {} from {} sessions",
                overview.header_config.overall_score, overview.key_metrics.total_sessions
            );
            Ok(warp::reply::json(&overview))
        }
        Err(e) => {
            error!("Error fetching dashboard overview: {:#}", e);
            Err(warp::reject::custom(ApiError::internal(OVERVIEW_FAILURE)))
        }
    }
}

pub async fn get_clients() -> Result<Json, Rejection> {
    info!("Handling request to list client profiles");
    Ok(warp::reply::json(&all_profiles()))
}

pub async fn get_data_sources(state: Arc<AppState>) -> Result<Json, Rejection> {
    info!("Handling request to get data source status");

    let statuses = data_source_statuses(state.source.as_ref()).await.map_err(|e| {
        error!("Failed to read data source status: {:#}", e);
        warp::reject::custom(ApiError::internal(DATA_SOURCES_FAILURE))
    })?;

    Ok(warp::reply::json(&statuses))
}
