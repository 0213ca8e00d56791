// src/handlers/search_console.rs
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use super::params::{count_param, DEFAULT_LIMIT};
use crate::state::AppState;

pub async fn get_queries(
    query: HashMap<String, String>,
    state: Arc<AppState>,
) -> Result<Json, Rejection> {
    let limit = count_param(&query, "limit", DEFAULT_LIMIT);
    info!("Handling request to get top {} Search Console queries", limit);

    match state.source.queries(limit).await {
        Ok(queries) => Ok(warp::reply::json(&queries)),
        Err(e) => {
            error!("Failed to fetch Search Console data: {:#}", e);
            Err(warp::reject::custom(ApiError::internal("Failed to fetch Search Console data")))
        }
    }
}
