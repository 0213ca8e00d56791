use dotenv::dotenv;
use log::{error, info};
use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use warp::Filter;

use marketing_dashboard::config::AppConfig;
use marketing_dashboard::routes;
use marketing_dashboard::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            process::exit(1);
        }
    };

    // The store is generated in full before anything is served.
    let state = Arc::new(AppState::initialize(&config));
    info!("Data store ready");

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    info!("Will bind to: {}", addr);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET"]);

    let api = routes::routes(state).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;
}
