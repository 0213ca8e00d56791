// src/services/store.rs
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::info;

use crate::models::{CrmDailyMetric, LeadRecord, PageMetric, QueryMetric, SampleDataset, SessionMetric};
use crate::services::generator::SampleGenerator;

/// Read side of the dashboard data.
///
/// Reads are fallible so a source that is unavailable can surface an error
/// to the aggregator. The in-memory [`DataStore`] never fails.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn sessions(&self, days: usize) -> Result<Vec<SessionMetric>>;
    async fn pages(&self, limit: usize) -> Result<Vec<PageMetric>>;
    async fn queries(&self, limit: usize) -> Result<Vec<QueryMetric>>;
    async fn leads(&self, limit: usize) -> Result<Vec<LeadRecord>>;
    async fn crm_metrics(&self, days: usize) -> Result<Vec<CrmDailyMetric>>;
}

/// Last `days` entries of an oldest-to-newest series.
fn window<T: Clone>(series: &[T], days: usize) -> Vec<T> {
    let start = series.len().saturating_sub(days);
    series[start..].to_vec()
}

/// First `limit` entries in catalog order.
fn prefix<T: Clone>(catalog: &[T], limit: usize) -> Vec<T> {
    catalog.iter().take(limit).cloned().collect()
}

/// Immutable snapshot of the generated collections.
#[derive(Debug, Clone)]
pub struct DataStore {
    data: SampleDataset,
}

impl DataStore {
    pub fn new(data: SampleDataset) -> Self {
        DataStore { data }
    }

    /// Generates the sample dataset and freezes it.
    pub fn generate(seed: Option<u64>, now: DateTime<Utc>, tz: Tz) -> Self {
        info!("Populating in-memory data store");
        Self::new(SampleGenerator::new(seed, now, tz).generate())
    }

    pub fn session_window(&self, days: usize) -> Vec<SessionMetric> {
        window(&self.data.sessions, days)
    }

    pub fn top_pages(&self, limit: usize) -> Vec<PageMetric> {
        prefix(&self.data.pages, limit)
    }

    pub fn top_queries(&self, limit: usize) -> Vec<QueryMetric> {
        prefix(&self.data.queries, limit)
    }

    pub fn recent_leads(&self, limit: usize) -> Vec<LeadRecord> {
        prefix(&self.data.leads, limit)
    }

    pub fn crm_window(&self, days: usize) -> Vec<CrmDailyMetric> {
        window(&self.data.crm_metrics, days)
    }

    pub fn dataset(&self) -> &SampleDataset {
        &self.data
    }
}

#[async_trait]
impl MetricsSource for DataStore {
    async fn sessions(&self, days: usize) -> Result<Vec<SessionMetric>> {
        Ok(self.session_window(days))
    }

    async fn pages(&self, limit: usize) -> Result<Vec<PageMetric>> {
        Ok(self.top_pages(limit))
    }

    async fn queries(&self, limit: usize) -> Result<Vec<QueryMetric>> {
        Ok(self.top_queries(limit))
    }

    async fn leads(&self, limit: usize) -> Result<Vec<LeadRecord>> {
        Ok(self.recent_leads(limit))
    }

    async fn crm_metrics(&self, days: usize) -> Result<Vec<CrmDailyMetric>> {
        Ok(self.crm_window(days))
    }
}
