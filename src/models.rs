// src/models.rs
use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetric {
    pub id: Uuid,
    pub date: String,
    pub sessions: u32,
    pub users: u32,
    pub pageviews: u32,
    pub bounce_rate: String,
    pub avg_session_duration: u32,
    pub conversion_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetric {
    pub id: Uuid,
    pub page_path: String,
    pub page_title: String,
    pub pageviews: u32,
    pub unique_pageviews: u32,
    pub avg_time_on_page: u32,
    pub change_percent: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMetric {
    pub id: Uuid,
    pub query: String,
    pub clicks: u32,
    pub impressions: u32,
    pub ctr: String,
    pub position: String,
    pub change_percent: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub lead_status: String,
    pub lead_score: u8,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmDailyMetric {
    pub id: Uuid,
    pub date: String,
    pub new_leads: u32,
    pub qualified_leads: u32,
    pub opportunities: u32,
    pub closed_deals: u32,
    pub deal_value: String,
}

/// Everything the generator produces for one process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDataset {
    pub sessions: Vec<SessionMetric>,
    pub pages: Vec<PageMetric>,
    pub queries: Vec<QueryMetric>,
    pub leads: Vec<LeadRecord>,
    pub crm_metrics: Vec<CrmDailyMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    pub client_logo_url: String,
    pub company_name: String,
    pub business_type: String,
    pub location: String,
    pub audit_date: String,
    pub overall_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub total_sessions: u64,
    pub organic_clicks: u64,
    pub new_leads: u64,
    pub conversion_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficTrend {
    pub date: String,
    pub sessions: u32,
    pub organic_traffic: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelData {
    pub visitors: u32,
    pub mqls: u32,
    pub sqls: u32,
    pub opportunities: u32,
    pub customers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewPayload {
    pub header_config: HeaderConfig,
    pub key_metrics: KeyMetrics,
    pub traffic_trends: Vec<TrafficTrend>,
    pub top_pages: Vec<PageMetric>,
    pub top_keywords: Vec<QueryMetric>,
    pub recent_leads: Vec<LeadRecord>,
    pub funnel_data: FunnelData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub id: String,
    pub client_logo_url: String,
    pub company_name: String,
    pub business_type: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceStatus {
    pub id: String,
    pub name: String,
    pub status: String,
    pub records: usize,
}
