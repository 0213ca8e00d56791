// src/handlers/ga4.rs
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use super::params::{count_param, DEFAULT_DAYS, DEFAULT_LIMIT};
use crate::state::AppState;

pub async fn get_sessions(
    query: HashMap<String, String>,
    state: Arc<AppState>,
) -> Result<Json, Rejection> {
    let days = count_param(&query, "days", DEFAULT_DAYS);
    info!("Handling request to get GA4 sessions for {} days", days);

    let sessions = state.source.sessions(days).await.map_err(|e| {
        error!("Failed to fetch GA4 sessions: {:#}", e);
        warp::reject::custom(ApiError::internal("Failed to fetch GA4 sessions"))
    })?;

    Ok(warp::reply::json(&sessions))
}

pub async fn get_pages(
    query: HashMap<String, String>,
    state: Arc<AppState>,
) -> Result<Json, Rejection> {
    let limit = count_param(&query, "limit", DEFAULT_LIMIT);
    info!("Handling request to get top {} GA4 pages", limit);

    let pages = state.source.pages(limit).await.map_err(|e| {
        error!("Failed to fetch GA4 pages: {:#}", e);
        warp::reject::custom(ApiError::internal("Failed to fetch GA4 pages"))
    })?;

    Ok(warp::reply::json(&pages))
}
