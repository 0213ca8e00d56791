use marketing_dashboard::config::AppConfig;
use marketing_dashboard::services::{clients::profile_for, overview::build_overview, store::DataStore};
use log::info;
use chrono::Utc;
use dotenv::dotenv;
use std::env;

// Usage: dump_overview [client-id]
// Honors DASHBOARD_SEED and DASHBOARD_TIMEZONE like the server does.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    let client = env::args().nth(1).unwrap_or_else(|| config.default_client.clone());

    let now = Utc::now();
    let store = DataStore::generate(config.seed, now, config.timezone);
    let audit_date = now.with_timezone(&config.timezone).format("%Y-%m-%d").to_string();

    info!("Building overview for {} (seed {:?})", client, config.seed);
    let overview = build_overview(&store, profile_for(&client), &audit_date).await?;

    info!("Overall score: {}", overview.header_config.overall_score);
    println!("{}", serde_json::to_string_pretty(&overview)?);

    Ok(())
}
