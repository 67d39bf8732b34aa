//! Solution rating summaries

use serde::{Deserialize, Serialize};

/// Average (one decimal) and number of ratings for a solution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: usize,
}

impl RatingSummary {
    /// `None` when the solution has not been rated yet
    pub fn from_ratings(ratings: &[i32]) -> Option<Self> {
        if ratings.is_empty() {
            return None;
        }
        let sum: i64 = ratings.iter().map(|r| *r as i64).sum();
        let mean = sum as f64 / ratings.len() as f64;
        Some(Self {
            average: (mean * 10.0).round() / 10.0,
            count: ratings.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rounds_to_one_decimal() {
        let s = RatingSummary::from_ratings(&[5, 5, 4]).unwrap();
        assert_eq!(s.average, 4.7);
        assert_eq!(s.count, 3);
    }

    #[test]
    fn whole_and_half_averages() {
        assert_eq!(RatingSummary::from_ratings(&[3]).unwrap().average, 3.0);
        assert_eq!(RatingSummary::from_ratings(&[4, 5]).unwrap().average, 4.5);
        assert_eq!(RatingSummary::from_ratings(&[1, 2, 2]).unwrap().average, 1.7);
    }

    #[test]
    fn unrated_has_no_summary() {
        assert!(RatingSummary::from_ratings(&[]).is_none());
    }
}
