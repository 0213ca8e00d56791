// src/routes.rs
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use log::info;
use warp::http::StatusCode;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::dashboard::{get_clients, get_data_sources, get_overview};
use crate::handlers::error::ApiError;
use crate::handlers::ga4::{get_pages, get_sessions};
use crate::handlers::hubspot::{get_leads, get_metrics};
use crate::handlers::search_console::get_queries;
use crate::state::AppState;

// Every failure leaves as `{"message": ...}`.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found";
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.as_str();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed";
    } else {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error";
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "message": message,
        })),
        code,
    ))
}

pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let state_filter = warp::any().map(move || state.clone());
    let query = warp::query::<HashMap<String, String>>();

    let overview_route = warp::path!("api" / "dashboard" / "overview")
        .and(warp::get())
        .and(query)
        .and(state_filter.clone())
        .and_then(get_overview);

    let sessions_route = warp::path!("api" / "ga4" / "sessions")
        .and(warp::get())
        .and(query)
        .and(state_filter.clone())
        .and_then(get_sessions);

    let pages_route = warp::path!("api" / "ga4" / "pages")
        .and(warp::get())
        .and(query)
        .and(state_filter.clone())
        .and_then(get_pages);

    let queries_route = warp::path!("api" / "search-console" / "queries")
        .and(warp::get())
        .and(query)
        .and(state_filter.clone())
        .and_then(get_queries);

    let leads_route = warp::path!("api" / "hubspot" / "leads")
        .and(warp::get())
        .and(query)
        .and(state_filter.clone())
        .and_then(get_leads);

    let metrics_route = warp::path!("api" / "hubspot" / "metrics")
        .and(warp::get())
        .and(query)
        .and(state_filter.clone())
        .and_then(get_metrics);

    let clients_route = warp::path!("api" / "clients")
        .and(warp::get())
        .and_then(get_clients);

    let data_sources_route = warp::path!("api" / "data-sources")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(get_data_sources);

    info!("All routes configured successfully.");

    overview_route
        .or(sessions_route)
        .or(pages_route)
        .or(queries_route)
        .or(leads_route)
        .or(metrics_route)
        .or(clients_route)
        .or(data_sources_route)
        .recover(handle_rejection)
}
