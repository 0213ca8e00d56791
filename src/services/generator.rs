// src/services/generator.rs
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

use crate::models::{CrmDailyMetric, LeadRecord, PageMetric, QueryMetric, SampleDataset, SessionMetric};

/// Length of the rolling daily series.
pub const WINDOW_DAYS: usize = 30;

pub const DEFAULT_BOUNCE_RATE: &str = "45.20";
pub const DEFAULT_CONVERSION_RATE: &str = "3.24";
pub const LEAD_SOURCE: &str = "Organic Search";
pub const DEAL_UNIT_VALUE: f64 = 5000.0;

pub struct PageEntry {
    pub path: &'static str,
    pub title: &'static str,
}

pub const PAGE_CATALOG: &[PageEntry] = &[
    PageEntry { path: "/product-features", title: "Product Features - Our Platform" },
    PageEntry { path: "/blog/seo-guide", title: "Complete SEO Guide" },
    PageEntry { path: "/pricing", title: "Pricing Plans" },
    PageEntry { path: "/contact", title: "Contact Us" },
    PageEntry { path: "/about", title: "About Our Company" },
    PageEntry { path: "/dashboard", title: "Analytics Dashboard" },
    PageEntry { path: "/blog/marketing-tips", title: "Marketing Tips" },
    PageEntry { path: "/integrations", title: "Integrations" },
];

// Rows 0-3 rise, everything after falls into the flat band.
pub const PAGE_CHANGE_BANDS: [&str; 8] = ["15.3", "15.3", "15.3", "15.3", "8.7", "8.7", "8.7", "8.7"];

pub const QUERY_CATALOG: &[(&str, f64)] = &[
    ("marketing analytics dashboard", 3.2),
    ("google analytics alternative", 5.8),
    ("hubspot integration", 2.1),
    ("seo performance tracking", 4.5),
    ("lead generation tools", 6.2),
    ("crm analytics", 3.8),
    ("marketing automation", 4.9),
    ("conversion tracking", 2.7),
];

pub const QUERY_CHANGE_BANDS: [&str; 8] = ["18.5", "18.5", "18.5", "-7.2", "12.3", "12.3", "12.3", "12.3"];

pub struct LeadEntry {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub company: &'static str,
    pub status: &'static str,
    pub score: u8,
}

pub const LEAD_CATALOG: &[LeadEntry] = &[
    LeadEntry { first_name: "Sarah", last_name: "Miller", email: "sarah.miller@enterprise.com", company: "Enterprise Corp", status: "Qualified", score: 85 },
    LeadEntry { first_name: "John", last_name: "Davis", email: "john.davis@smb.com", company: "SMB Solutions", status: "New", score: 45 },
    LeadEntry { first_name: "Lisa", last_name: "Wang", email: "lisa.wang@midmarket.com", company: "Mid-Market Inc", status: "Contacted", score: 65 },
    LeadEntry { first_name: "Mike", last_name: "Johnson", email: "mike.j@enterprise.com", company: "Big Enterprise", status: "Qualified", score: 92 },
    LeadEntry { first_name: "Emma", last_name: "Brown", email: "emma.brown@startup.com", company: "Startup Labs", status: "New", score: 38 },
];

/// Formats a value as a fixed-precision decimal string.
pub fn format_fixed(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

/// Click-through rate as a percentage with two decimals.
pub fn click_through_rate(clicks: u32, impressions: u32) -> String {
    if impressions == 0 {
        return format_fixed(0.0, 2);
    }
    format_fixed(clicks as f64 / impressions as f64 * 100.0, 2)
}

/// Produces the synthetic rows backing the dashboard.
///
/// The same seed, instant and time zone always produce the same dataset,
/// identifiers included.
pub struct SampleGenerator {
    rng: StdRng,
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl SampleGenerator {
    pub fn new(seed: Option<u64>, now: DateTime<Utc>, tz: Tz) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Seeding sample generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let today = now.with_timezone(&tz).date_naive();
        debug!("Sample generator anchored at {} ({})", today, tz);

        SampleGenerator { rng, now, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn next_id(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    fn noise(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn day_label(&self, offset: usize) -> String {
        (self.today - Duration::days(offset as i64)).format("%Y-%m-%d").to_string()
    }

    pub fn generate_sessions(&mut self) -> Vec<SessionMetric> {
        let mut sessions = Vec::with_capacity(WINDOW_DAYS);

        for offset in (0..WINDOW_DAYS).rev() {
            let base = 3200.0 + self.noise() * 1600.0;
            let weekly = (offset as f64 / 7.0).sin() * 400.0;
            let count = (base + weekly).floor() as u32;
            let avg_session_duration = (120.0 + self.noise() * 60.0).floor() as u32;

            sessions.push(SessionMetric {
                id: self.next_id(),
                date: self.day_label(offset),
                sessions: count,
                users: (count as f64 * 0.75).floor() as u32,
                pageviews: (count as f64 * 2.1).floor() as u32,
                bounce_rate: DEFAULT_BOUNCE_RATE.to_string(),
                avg_session_duration,
                conversion_rate: DEFAULT_CONVERSION_RATE.to_string(),
            });
        }

        sessions
    }

    pub fn generate_pages(&mut self) -> Vec<PageMetric> {
        let date = self.day_label(0);

        PAGE_CATALOG
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let idx = index as f64;
                PageMetric {
                    id: self.next_id(),
                    page_path: page.path.to_string(),
                    page_title: page.title.to_string(),
                    pageviews: (12000.0 - idx * 1500.0 + self.noise() * 2000.0).floor() as u32,
                    unique_pageviews: (8000.0 - idx * 1000.0 + self.noise() * 1500.0).floor() as u32,
                    avg_time_on_page: (120.0 + self.noise() * 180.0).floor() as u32,
                    change_percent: PAGE_CHANGE_BANDS[index].to_string(),
                    date: date.clone(),
                }
            })
            .collect()
    }

    pub fn generate_queries(&mut self) -> Vec<QueryMetric> {
        let date = self.day_label(0);

        QUERY_CATALOG
            .iter()
            .enumerate()
            .map(|(index, (query, position))| {
                let idx = index as f64;
                let clicks = (3000.0 - idx * 300.0 + self.noise() * 500.0).floor() as u32;
                let impressions = (15000.0 - idx * 1500.0 + self.noise() * 2000.0).floor() as u32;

                QueryMetric {
                    id: self.next_id(),
                    query: query.to_string(),
                    clicks,
                    impressions,
                    ctr: click_through_rate(clicks, impressions),
                    position: format_fixed(*position, 1),
                    change_percent: QUERY_CHANGE_BANDS[index].to_string(),
                    date: date.clone(),
                }
            })
            .collect()
    }

    pub fn generate_leads(&mut self) -> Vec<LeadRecord> {
        LEAD_CATALOG
            .iter()
            .enumerate()
            .map(|(index, lead)| LeadRecord {
                id: self.next_id(),
                first_name: lead.first_name.to_string(),
                last_name: lead.last_name.to_string(),
                email: lead.email.to_string(),
                company: lead.company.to_string(),
                lead_status: lead.status.to_string(),
                lead_score: lead.score,
                source: LEAD_SOURCE.to_string(),
                created_at: self.now - Duration::hours(2 + 2 * index as i64),
            })
            .collect()
    }

    pub fn generate_crm_metrics(&mut self) -> Vec<CrmDailyMetric> {
        let mut metrics = Vec::with_capacity(WINDOW_DAYS);

        for offset in (0..WINDOW_DAYS).rev() {
            let new_leads = (50.0 + self.noise() * 30.0).floor() as u32;
            let leads = new_leads as f64;
            let closed_deals = (leads * 0.1).floor() as u32;
            let deal_value = closed_deals as f64 * DEAL_UNIT_VALUE + self.noise() * 2000.0;

            metrics.push(CrmDailyMetric {
                id: self.next_id(),
                date: self.day_label(offset),
                new_leads,
                qualified_leads: (leads * 0.6).floor() as u32,
                opportunities: (leads * 0.3).floor() as u32,
                closed_deals,
                deal_value: format_fixed(deal_value, 2),
            });
        }

        metrics
    }

    /// Generates all five collections in a fixed order.
    pub fn generate(mut self) -> SampleDataset {
        let dataset = SampleDataset {
            sessions: self.generate_sessions(),
            pages: self.generate_pages(),
            queries: self.generate_queries(),
            leads: self.generate_leads(),
            crm_metrics: self.generate_crm_metrics(),
        };
        info!(
            "Generated sample dataset: {} sessions, {} pages, {} queries, {} leads, {} CRM days",
            dataset.sessions.len(),
            dataset.pages.len(),
            dataset.queries.len(),
            dataset.leads.len(),
            dataset.crm_metrics.len()
        );
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn generator(seed: u64) -> SampleGenerator {
        let now = Utc.with_ymd_and_hms(2025, 8, 15, 12, 0, 0).unwrap();
        SampleGenerator::new(Some(seed), now, Tz::UTC)
    }

    #[test]
    fn sessions_cover_thirty_days_ending_today() {
        let sessions = generator(7).generate_sessions();
        assert_eq!(sessions.len(), WINDOW_DAYS);
        assert_eq!(sessions.first().unwrap().date, "2025-07-17");
        assert_eq!(sessions.last().unwrap().date, "2025-08-15");
        assert!(sessions.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn session_derived_fields_follow_session_count() {
        for s in generator(11).generate_sessions() {
            assert_eq!(s.users, (s.sessions as f64 * 0.75).floor() as u32);
            assert_eq!(s.pageviews, (s.sessions as f64 * 2.1).floor() as u32);
            assert!(s.sessions >= 2800 && s.sessions < 5200, "sessions out of band: {}", s.sessions);
            assert!((120..180).contains(&s.avg_session_duration));
            assert_eq!(s.bounce_rate, "45.20");
            assert_eq!(s.conversion_rate, "3.24");
        }
    }

    #[test]
    fn query_ctr_matches_generated_clicks_and_impressions() {
        for q in generator(3).generate_queries() {
            let expected = q.clicks as f64 / q.impressions as f64 * 100.0;
            let stored: f64 = q.ctr.parse().unwrap();
            assert!((stored - expected).abs() <= 0.005 + f64::EPSILON, "{} vs {}", stored, expected);
            assert_eq!(q.ctr.split('.').nth(1).map(str::len), Some(2));
        }
    }

    #[test]
    fn change_percent_bands_are_table_driven() {
        let mut gen = generator(5);
        let pages: Vec<String> = gen.generate_pages().into_iter().map(|p| p.change_percent).collect();
        assert_eq!(pages, PAGE_CHANGE_BANDS.to_vec());

        let queries: Vec<String> = gen.generate_queries().into_iter().map(|q| q.change_percent).collect();
        assert_eq!(queries, QUERY_CHANGE_BANDS.to_vec());
        assert_eq!(QUERY_CATALOG.len(), 8);
    }

    #[test]
    fn query_positions_render_one_decimal() {
        let positions: Vec<String> = generator(1).generate_queries().into_iter().map(|q| q.position).collect();
        assert_eq!(positions[0], "3.2");
        assert_eq!(positions[2], "2.1");
    }

    #[test]
    fn leads_are_staggered_backwards_in_time() {
        let mut gen = generator(9);
        let now = gen.now;
        let leads = gen.generate_leads();
        assert_eq!(leads.len(), 5);
        for (i, lead) in leads.iter().enumerate() {
            assert_eq!(now - lead.created_at, Duration::hours(2 + 2 * i as i64));
            assert_eq!(lead.source, LEAD_SOURCE);
        }
        assert_eq!(leads[0].first_name, "Sarah");
        assert_eq!(leads[3].lead_score, 92);
    }

    #[test]
    fn crm_ratios_and_deal_value() {
        let metrics = generator(13).generate_crm_metrics();
        assert_eq!(metrics.len(), WINDOW_DAYS);
        for m in metrics {
            assert!((50..80).contains(&m.new_leads));
            let n = m.new_leads as f64;
            assert_eq!(m.qualified_leads, (n * 0.6).floor() as u32);
            assert_eq!(m.opportunities, (n * 0.3).floor() as u32);
            assert_eq!(m.closed_deals, (n * 0.1).floor() as u32);

            let value: f64 = m.deal_value.parse().unwrap();
            let floor = m.closed_deals as f64 * DEAL_UNIT_VALUE;
            assert!(value >= floor && value <= floor + 2000.0);
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        assert_eq!(generator(42).generate(), generator(42).generate());
        assert_ne!(generator(42).generate().sessions, generator(43).generate().sessions);
    }

    #[test]
    fn identifiers_are_unique() {
        let data = generator(21).generate();
        let mut ids: Vec<Uuid> = data.sessions.iter().map(|s| s.id)
            .chain(data.pages.iter().map(|p| p.id))
            .chain(data.queries.iter().map(|q| q.id))
            .chain(data.leads.iter().map(|l| l.id))
            .chain(data.crm_metrics.iter().map(|m| m.id))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn today_follows_reporting_time_zone() {
        let now = Utc.with_ymd_and_hms(2025, 8, 15, 2, 0, 0).unwrap();
        let gen = SampleGenerator::new(Some(1), now, chrono_tz::America::Chicago);
        assert_eq!(gen.today().to_string(), "2025-08-14");
    }

    #[test]
    fn zero_impressions_do_not_divide() {
        assert_eq!(click_through_rate(10, 0), "0.00");
        assert_eq!(click_through_rate(300, 1500), "20.00");
    }
}
