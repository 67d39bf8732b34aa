//! Inquiry analytics and dashboard aggregation
//!
//! Every function here is a pure transform over a collection snapshot the
//! caller already fetched. Times are Unix milliseconds, bucketed in UTC.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{GalleryItem, Inquiry, VisitorDay};

/// Window for the "recent inquiries" counter
pub const RECENT_WINDOW_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Industry bucket derived from job title and company
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Other,
}

impl Industry {
    /// Keyword lists, checked in this order; the first hit wins
    const KEYWORDS: [(Industry, &'static [&'static str]); 3] = [
        (Industry::Technology, &["tech", "software", "it", "digital"]),
        (Industry::Finance, &["finance", "bank", "investment"]),
        (Industry::Healthcare, &["health", "medical", "hospital"]),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }
}

/// Classify by substring match over `"{job_title} {company}"`, lowercased.
///
/// Total: anything without a keyword hit lands in [`Industry::Other`].
/// Matching is plain substring, so `"it"` also hits words like "Capital".
pub fn classify_industry(job_title: &str, company: &str) -> Industry {
    let haystack = format!("{job_title} {company}").to_lowercase();
    Industry::KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| haystack.contains(w)))
        .map(|(industry, _)| *industry)
        .unwrap_or(Industry::Other)
}

/// One point of a chronological chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: i64,
}

/// Aggregates behind the analytics screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryAnalytics {
    pub total_inquiries: usize,
    /// Inquiries strictly newer than 30 days before `now`
    pub recent_inquiries: usize,
    pub countries: BTreeMap<String, usize>,
    pub industries: BTreeMap<String, usize>,
    /// Short month label ("Jan") to count, all years folded together
    pub monthly_inquiries: BTreeMap<String, usize>,
    /// Chronological per-month counts labelled "Jan 25"
    pub monthly_series: Vec<SeriesPoint>,
    pub total_replies: usize,
    /// Replies per hundred inquiries; `None` when there are no inquiries
    pub response_rate: Option<f64>,
}

impl InquiryAnalytics {
    pub fn compute(inquiries: &[Inquiry], reply_count: usize, now: i64) -> Self {
        let cutoff = now - RECENT_WINDOW_MS;

        let mut countries: BTreeMap<String, usize> = BTreeMap::new();
        let mut industries: BTreeMap<String, usize> = BTreeMap::new();
        let mut monthly_inquiries: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_month: BTreeMap<(i32, u32), usize> = BTreeMap::new();
        let mut recent_inquiries = 0;

        for inquiry in inquiries {
            *countries.entry(inquiry.country.clone()).or_default() += 1;

            let industry = classify_industry(&inquiry.job_title, &inquiry.company);
            *industries.entry(industry.label().to_string()).or_default() += 1;

            let at = to_datetime(inquiry.timestamp);
            *monthly_inquiries
                .entry(at.format("%b").to_string())
                .or_default() += 1;
            *by_month.entry((at.year(), at.month())).or_default() += 1;

            if inquiry.timestamp > cutoff {
                recent_inquiries += 1;
            }
        }

        let monthly_series = by_month
            .into_iter()
            .map(|((year, month), count)| SeriesPoint {
                label: month_year_label(year, month),
                value: count as i64,
            })
            .collect();

        Self {
            total_inquiries: inquiries.len(),
            recent_inquiries,
            countries,
            industries,
            monthly_inquiries,
            monthly_series,
            total_replies: reply_count,
            response_rate: response_rate(reply_count, inquiries.len()),
        }
    }

    /// Response rate as shown on the stat card
    pub fn response_rate_display(&self) -> String {
        match self.response_rate {
            Some(rate) => format!("{rate:.1}%"),
            None => "N/A".to_string(),
        }
    }
}

/// Replies as a percentage of inquiries, undefined for an empty inbox
pub fn response_rate(replies: usize, inquiries: usize) -> Option<f64> {
    if inquiries == 0 {
        return None;
    }
    Some(replies as f64 / inquiries as f64 * 100.0)
}

fn to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

fn month_year_label(year: i32, month: u32) -> String {
    chrono::NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %y").to_string())
        .unwrap_or_default()
}

// ── Dashboard ──

/// Visitor chart for the most recent days.
///
/// Input is newest-first (as queried); the series comes back oldest-first
/// together with the summed total.
pub fn visitor_series(days: &[VisitorDay]) -> (Vec<SeriesPoint>, i64) {
    let total = days.iter().map(|d| d.count).sum();
    let series = days
        .iter()
        .rev()
        .map(|d| SeriesPoint {
            label: d.day.clone(),
            value: d.count,
        })
        .collect();
    (series, total)
}

/// Per-day counts of the latest inquiries, oldest day first
pub fn inquiry_day_series(latest: &[Inquiry]) -> Vec<SeriesPoint> {
    let mut per_day: BTreeMap<String, i64> = BTreeMap::new();
    for inquiry in latest {
        *per_day
            .entry(crate::util::day_key(inquiry.timestamp))
            .or_default() += 1;
    }
    per_day
        .into_iter()
        .map(|(label, value)| SeriesPoint { label, value })
        .collect()
}

/// Solutions per industry; items without one count as "Unspecified"
pub fn solution_distribution(items: &[GalleryItem]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for item in items {
        let key = item
            .industry
            .clone()
            .unwrap_or_else(|| "Unspecified".to_string());
        *counts.entry(key).or_default() += 1;
    }
    counts
}
