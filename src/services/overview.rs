// src/services/overview.rs
use anyhow::Result;
use log::{debug, warn};

use crate::models::{
    ClientProfile, CrmDailyMetric, FunnelData, HeaderConfig, KeyMetrics, OverviewPayload,
    QueryMetric, SessionMetric, TrafficTrend,
};
use crate::services::generator::{DEFAULT_CONVERSION_RATE, WINDOW_DAYS};
use crate::services::store::MetricsSource;

pub const TOP_LIST_SIZE: usize = 5;
pub const ORGANIC_SHARE: f64 = 0.65;
pub const MAX_SCORE: f64 = 100.0;

pub const FUNNEL: FunnelData = FunnelData {
    visitors: 100,
    mqls: 35,
    sqls: 18,
    opportunities: 12,
    customers: 8,
};

/// Weighted composite score, floored and clamped to [0, 100].
pub fn calculate_overall_score(
    total_sessions: u64,
    organic_clicks: u64,
    new_leads: u64,
    conversion_rate: &str,
) -> u32 {
    let rate = conversion_rate.trim().parse::<f64>().unwrap_or_else(|_| {
        warn!("Unparseable conversion rate {:?}, scoring it as 0", conversion_rate);
        0.0
    });
    let rate = if rate.is_finite() { rate } else { 0.0 };

    let raw = (total_sessions as f64 / 1000.0) * 20.0
        + (organic_clicks as f64 / 100.0) * 15.0
        + (new_leads as f64 / 10.0) * 25.0
        + rate * 10.0
        + 30.0;

    raw.floor().clamp(0.0, MAX_SCORE) as u32
}

pub fn calculate_key_metrics(
    sessions: &[SessionMetric],
    queries: &[QueryMetric],
    crm_metrics: &[CrmDailyMetric],
) -> KeyMetrics {
    let total_sessions = sessions.iter().map(|s| s.sessions as u64).sum();
    let organic_clicks = queries.iter().map(|q| q.clicks as u64).sum();
    let new_leads = crm_metrics.iter().map(|m| m.new_leads as u64).sum();

    let conversion_rate = match sessions.last() {
        Some(latest) => latest.conversion_rate.clone(),
        None => {
            warn!("Session window is empty, falling back to default conversion rate");
            DEFAULT_CONVERSION_RATE.to_string()
        }
    };

    KeyMetrics {
        total_sessions,
        organic_clicks,
        new_leads,
        conversion_rate,
    }
}

pub fn traffic_trends(sessions: &[SessionMetric]) -> Vec<TrafficTrend> {
    sessions
        .iter()
        .map(|s| TrafficTrend {
            date: s.date.clone(),
            sessions: s.sessions,
            organic_traffic: (s.sessions as f64 * ORGANIC_SHARE).floor() as u32,
        })
        .collect()
}

/// Reads every collection the dashboard needs and assembles the overview.
///
/// The five reads run concurrently; the first failure aborts the whole
/// overview without a partial payload.
pub async fn build_overview<S: MetricsSource + ?Sized>(
    source: &S,
    profile: &ClientProfile,
    audit_date: &str,
) -> Result<OverviewPayload> {
    let (sessions, pages, queries, leads, crm_metrics) = tokio::try_join!(
        source.sessions(WINDOW_DAYS),
        source.pages(TOP_LIST_SIZE),
        source.queries(TOP_LIST_SIZE),
        source.leads(TOP_LIST_SIZE),
        source.crm_metrics(WINDOW_DAYS),
    )?;
    debug!(
        "Overview reads: {} sessions, {} pages, {} queries, {} leads, {} CRM days",
        sessions.len(),
        pages.len(),
        queries.len(),
        leads.len(),
        crm_metrics.len()
    );

    let key_metrics = calculate_key_metrics(&sessions, &queries, &crm_metrics);
    let overall_score = calculate_overall_score(
        key_metrics.total_sessions,
        key_metrics.organic_clicks,
        key_metrics.new_leads,
        &key_metrics.conversion_rate,
    );

    Ok(OverviewPayload {
        header_config: HeaderConfig {
            client_logo_url: profile.client_logo_url.clone(),
            company_name: profile.company_name.clone(),
            business_type: profile.business_type.clone(),
            location: profile.location.clone(),
            audit_date: audit_date.to_string(),
            overall_score,
        },
        key_metrics,
        traffic_trends: traffic_trends(&sessions),
        top_pages: pages,
        top_keywords: queries,
        recent_leads: leads,
        funnel_data: FUNNEL,
    })
}
