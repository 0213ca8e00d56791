// src/handlers/hubspot.rs
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use super::params::{count_param, DEFAULT_DAYS, DEFAULT_LIMIT};
use crate::state::AppState;

pub async fn get_leads(
    query: HashMap<String, String>,
    state: Arc<AppState>,
) -> Result<Json, Rejection> {
    let limit = count_param(&query, "limit", DEFAULT_LIMIT);
    info!("Handling request to get {} HubSpot leads", limit);

    let leads = state.source.leads(limit).await.map_err(|e| {
        error!("Failed to fetch HubSpot leads: {:#}", e);
        warp::reject::custom(ApiError::internal("Failed to fetch HubSpot leads"))
    })?;

    Ok(warp::reply::json(&leads))
}

pub async fn get_metrics(
    query: HashMap<String, String>,
    state: Arc<AppState>,
) -> Result<Json, Rejection> {
    let days = count_param(&query, "days", DEFAULT_DAYS);
    info!("Handling request to get HubSpot metrics for {} days", days);

    let metrics = state.source.crm_metrics(days).await.map_err(|e| {
        error!("Failed to fetch HubSpot metrics: {:#}", e);
        warp::reject::custom(ApiError::internal("Failed to fetch HubSpot metrics"))
    })?;

    Ok(warp::reply::json(&metrics))
}
