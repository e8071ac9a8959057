//! # Display Helpers
//!
//! Presentation math that every product card needs: rating summaries,
//! name truncation, thumbnail fallback, deal countdowns. Kept here so the
//! shop grid, deal sliders, and wishlist rows all render identical values
//! instead of each recomputing them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Review, Variant};

// =============================================================================
// Constants
// =============================================================================

/// Names longer than this are truncated on product cards.
pub const MAX_CARD_NAME_LEN: usize = 50;

/// Characters kept before the ellipsis when truncating.
const TRUNCATED_NAME_LEN: usize = 47;

/// Thumbnail shown when a variant has no images.
pub const PLACEHOLDER_IMAGE: &str = "assets/images/thumbs/placeholder.jpg";

// =============================================================================
// Rating Summary
// =============================================================================

/// Aggregated review rating for card display ("4.3 ★ (12)").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingSummary {
    /// Mean rating; 0.0 when there are no reviews.
    pub average: f64,

    /// Number of reviews.
    pub count: usize,
}

impl RatingSummary {
    /// Summarizes a review list. Empty lists yield `{0.0, 0}`.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return RatingSummary {
                average: 0.0,
                count: 0,
            };
        }
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        RatingSummary {
            average: f64::from(sum) / reviews.len() as f64,
            count: reviews.len(),
        }
    }
}

// =============================================================================
// Card Helpers
// =============================================================================

/// Truncates a variant name for card display: names over
/// [`MAX_CARD_NAME_LEN`] characters keep the first 47 plus `"..."`.
///
/// Counts characters, not bytes, so multibyte names never split mid-char.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_CARD_NAME_LEN {
        return name.to_string();
    }
    let kept: String = name.chars().take(TRUNCATED_NAME_LEN).collect();
    format!("{kept}...")
}

/// Returns the primary image reference, or the placeholder when the
/// variant has no images.
pub fn primary_image_or_placeholder(variant: &Variant) -> &str {
    variant.primary_image().unwrap_or(PLACEHOLDER_IMAGE)
}

// =============================================================================
// Deal Countdown
// =============================================================================

/// Time remaining until a deal deadline, split for countdown tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Checks whether the deadline has passed.
    pub fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Splits the time from `now` to `deadline` into countdown components.
/// Deadlines in the past yield all zeros.
pub fn countdown_between(now: DateTime<Utc>, deadline: DateTime<Utc>) -> Countdown {
    let remaining = (deadline - now).num_seconds().max(0);
    Countdown {
        days: remaining / 86_400,
        hours: (remaining % 86_400) / 3_600,
        minutes: (remaining % 3_600) / 60,
        seconds: remaining % 60,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rating_summary() {
        let reviews = vec![Review { rating: 5 }, Review { rating: 4 }, Review { rating: 3 }];
        let summary = RatingSummary::from_reviews(&reviews);
        assert_eq!(summary.count, 3);
        assert!((summary.average - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rating_summary_empty() {
        let summary = RatingSummary::from_reviews(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, 0.0);
    }

    #[test]
    fn test_truncate_name() {
        let short = "Ceramic Mug";
        assert_eq!(truncate_name(short), short);

        let long = "A".repeat(60);
        let truncated = truncate_name(&long);
        assert_eq!(truncated.chars().count(), 50); // 47 + "..."
        assert!(truncated.ends_with("..."));

        // Exactly at the limit is left alone
        let exact = "B".repeat(50);
        assert_eq!(truncate_name(&exact), exact);
    }

    #[test]
    fn test_truncate_name_multibyte() {
        let long = "é".repeat(60);
        let truncated = truncate_name(&long);
        assert_eq!(truncated.chars().count(), 50);
    }

    #[test]
    fn test_placeholder_fallback() {
        let mut v = Variant {
            id: "v-1".to_string(),
            name: "Mug".to_string(),
            regular_price_cents: 999,
            category_id: None,
            subcategory_id: None,
            brand_id: None,
            stock_quantity: 1,
            promotion: None,
            reviews: vec![],
            images: vec![],
        };
        assert_eq!(primary_image_or_placeholder(&v), PLACEHOLDER_IMAGE);

        v.images.push("img/mug.jpg".to_string());
        assert_eq!(primary_image_or_placeholder(&v), "img/mug.jpg");
    }

    #[test]
    fn test_countdown() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let deadline = Utc.with_ymd_and_hms(2025, 6, 17, 14, 30, 45).unwrap();
        let c = countdown_between(now, deadline);
        assert_eq!((c.days, c.hours, c.minutes, c.seconds), (2, 2, 30, 45));
        assert!(!c.is_elapsed());
    }

    #[test]
    fn test_countdown_past_deadline_is_zero() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let deadline = Utc.with_ymd_and_hms(2025, 6, 14, 0, 0, 0).unwrap();
        let c = countdown_between(now, deadline);
        assert!(c.is_elapsed());
    }
}
