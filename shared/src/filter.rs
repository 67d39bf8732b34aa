//! Search and predicate filtering over in-memory snapshots
//!
//! Filters are pure: applying one twice gives the same list as applying it
//! once, and the result is always a subset of the input.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{CustomerSummary, GalleryItem, Inquiry, InquiryStatus};

/// Status selector on the inquiry screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Resolved,
}

impl StatusFilter {
    fn admits(&self, status: Option<InquiryStatus>) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == Some(InquiryStatus::Pending),
            Self::Resolved => status == Some(InquiryStatus::Resolved),
        }
    }
}

/// Query parameters of the inquiry list
///
/// `from`/`to` are inclusive calendar days (UTC); `to` covers its whole day.
/// A blank bound (`from=`) means no bound. The search term is trimmed, so a
/// whitespace-only search matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InquiryFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub to: Option<NaiveDate>,
}

/// `YYYY-MM-DD`, with an empty value treated as unset
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(day) => NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl InquiryFilter {
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        self.matches_search(inquiry)
            && self.status.admits(inquiry.status)
            && self.matches_range(inquiry.timestamp)
    }

    pub fn apply(&self, inquiries: &[Inquiry]) -> Vec<Inquiry> {
        inquiries
            .iter()
            .filter(|i| self.matches(i))
            .cloned()
            .collect()
    }

    fn matches_search(&self, inquiry: &Inquiry) -> bool {
        let Some(term) = normalized_term(self.search.as_deref()) else {
            return true;
        };
        contains_ci(&inquiry.name, &term)
            || contains_ci(&inquiry.email, &term)
            || contains_ci(&inquiry.job_details, &term)
    }

    fn matches_range(&self, timestamp: i64) -> bool {
        if let Some(from) = self.from
            && timestamp < day_start_millis(from)
        {
            return false;
        }
        if let Some(to) = self.to
            && let Some(next) = to.succ_opt()
            && timestamp >= day_start_millis(next)
        {
            return false;
        }
        true
    }
}

/// Gallery screen search over title, description and category
pub fn search_gallery(items: &[GalleryItem], search: Option<&str>) -> Vec<GalleryItem> {
    let Some(term) = normalized_term(search) else {
        return items.to_vec();
    };
    items
        .iter()
        .filter(|item| {
            contains_ci(&item.title, &term)
                || contains_ci(&item.description, &term)
                || item
                    .category
                    .as_deref()
                    .is_some_and(|c| contains_ci(c, &term))
        })
        .cloned()
        .collect()
}

/// Customer picker search over name and company
pub fn search_customers(customers: &[CustomerSummary], search: Option<&str>) -> Vec<CustomerSummary> {
    let Some(term) = normalized_term(search) else {
        return customers.to_vec();
    };
    customers
        .iter()
        .filter(|c| contains_ci(&c.name, &term) || contains_ci(&c.company, &term))
        .cloned()
        .collect()
}

/// Lowercased search term, or `None` when there is nothing to search for
fn normalized_term(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains_ci(haystack: &str, lowered_term: &str) -> bool {
    haystack.to_lowercase().contains(lowered_term)
}

fn day_start_millis(day: NaiveDate) -> i64 {
    day.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-03-15T12:00:00Z
    const NOON: i64 = 1_742_040_000_000;
    const DAY: i64 = 24 * 60 * 60 * 1000;

    fn inquiry(id: i64, name: &str, details: &str, status: Option<InquiryStatus>, ts: i64) -> Inquiry {
        Inquiry {
            id,
            name: name.into(),
            email: format!("{}@mail.test", name.to_lowercase()),
            phone: "1".into(),
            company: "Co".into(),
            country: "NG".into(),
            job_title: "Lead".into(),
            job_details: details.into(),
            timestamp: ts,
            status,
            response: None,
            responded_at: None,
            updated_at: None,
        }
    }

    fn inbox() -> Vec<Inquiry> {
        vec![
            inquiry(1, "Amara", "Cloud migration", Some(InquiryStatus::Pending), NOON),
            inquiry(2, "Bayo", "Security audit", Some(InquiryStatus::Resolved), NOON - DAY),
            inquiry(3, "Chidi", "CLOUD costs", None, NOON - 3 * DAY),
            inquiry(4, "Dayo", "Hiring", Some(InquiryStatus::Pending), NOON - 10 * DAY),
        ]
    }

    fn ids(list: &[Inquiry]) -> Vec<i64> {
        list.iter().map(|i| i.id).collect()
    }

    #[test]
    fn search_hits_name_email_and_message() {
        let f = InquiryFilter {
            search: Some("cloud".into()),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&inbox())), vec![1, 3]);

        let f = InquiryFilter {
            search: Some("bayo@".into()),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&inbox())), vec![2]);

        let f = InquiryFilter {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(f.apply(&inbox()).len(), 4);
    }

    #[test]
    fn status_filter_excludes_unset_status() {
        let f = InquiryFilter {
            status: StatusFilter::Pending,
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&inbox())), vec![1, 4]);

        let f = InquiryFilter {
            status: StatusFilter::Resolved,
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&inbox())), vec![2]);
    }

    #[test]
    fn date_range_is_inclusive_of_whole_end_day() {
        let f = InquiryFilter {
            from: NaiveDate::from_ymd_opt(2025, 3, 12),
            to: NaiveDate::from_ymd_opt(2025, 3, 14),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&inbox())), vec![2, 3]);

        let f = InquiryFilter {
            to: NaiveDate::from_ymd_opt(2025, 3, 15),
            ..Default::default()
        };
        assert_eq!(f.apply(&inbox()).len(), 4);
    }

    #[test]
    fn filtering_is_idempotent_subset() {
        let filters = [
            InquiryFilter::default(),
            InquiryFilter {
                search: Some("a".into()),
                status: StatusFilter::Pending,
                from: NaiveDate::from_ymd_opt(2025, 3, 1),
                to: None,
            },
            InquiryFilter {
                search: Some("zzz".into()),
                ..Default::default()
            },
        ];
        let source = inbox();
        for f in filters {
            let once = f.apply(&source);
            let twice = f.apply(&once);
            assert_eq!(ids(&once), ids(&twice));
            assert!(once.len() <= source.len());
            assert!(once.iter().all(|i| f.matches(i)));
        }
    }

    #[test]
    fn filter_deserializes_from_query_shape() {
        let f: InquiryFilter =
            serde_json::from_str(r#"{"status":"resolved","from":"2025-01-01"}"#).unwrap();
        assert_eq!(f.status, StatusFilter::Resolved);
        assert_eq!(f.from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(f.search.is_none());
    }

    #[test]
    fn blank_date_bounds_in_query_mean_no_bound() {
        use axum::extract::Query;

        let uri: http::Uri = "/api/admin/inquiries?search=&status=all&from=&to="
            .parse()
            .unwrap();
        let Query(f) = Query::<InquiryFilter>::try_from_uri(&uri).unwrap();
        assert!(f.from.is_none());
        assert!(f.to.is_none());
        assert_eq!(f.status, StatusFilter::All);
        assert_eq!(f.apply(&inbox()).len(), 4);

        let uri: http::Uri = "/api/admin/inquiries?from=2025-03-14&to=%20"
            .parse()
            .unwrap();
        let Query(f) = Query::<InquiryFilter>::try_from_uri(&uri).unwrap();
        assert_eq!(f.from, NaiveDate::from_ymd_opt(2025, 3, 14));
        assert!(f.to.is_none());
        assert_eq!(ids(&f.apply(&inbox())), vec![1, 2]);

        let uri: http::Uri = "/api/admin/inquiries?from=14/03/2025".parse().unwrap();
        assert!(Query::<InquiryFilter>::try_from_uri(&uri).is_err());
    }

    #[test]
    fn gallery_search_covers_category() {
        let item = |id: i64, title: &str, category: Option<&str>| GalleryItem {
            id,
            title: title.into(),
            description: "desc".into(),
            category: category.map(str::to_string),
            industry: None,
            features: vec![],
            image_url: String::new(),
            image_key: String::new(),
            created_at: 0,
        };
        let items = vec![
            item(1, "Booth", Some("Events")),
            item(2, "Office", None),
            item(3, "Team", Some("People")),
        ];
        let hits = search_gallery(&items, Some("EVENT"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert_eq!(search_gallery(&items, Some("desc")).len(), 3);
        assert_eq!(search_gallery(&items, None).len(), 3);
    }

    #[test]
    fn customer_search_covers_name_and_company() {
        let customers = vec![
            CustomerSummary {
                id: 1,
                name: "Zainab".into(),
                email: "z@x".into(),
                company: "Kora Labs".into(),
                country: "NG".into(),
            },
            CustomerSummary {
                id: 2,
                name: "Kwame".into(),
                email: "k@x".into(),
                company: "Accra Foods".into(),
                country: "GH".into(),
            },
        ];
        assert_eq!(search_customers(&customers, Some("labs"))[0].id, 1);
        assert_eq!(search_customers(&customers, Some("kwa"))[0].id, 2);
        assert!(search_customers(&customers, Some("z@x")).is_empty());
    }
}
