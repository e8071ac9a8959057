//! # Domain Types
//!
//! Core domain types for the Bazaar catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Variant      │   │     Coupon      │   │    Review       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (server)    │   │  status         │   │  rating (1..=5) │       │
//! │  │  name           │   │  rule           │   └─────────────────┘       │
//! │  │  price_cents    │   │  starts_at      │                             │
//! │  │  category ids   │   │  ends_at        │   ┌─────────────────┐       │
//! │  │  stock          │   └─────────────────┘   │  DiscountRule   │       │
//! │  │  promotion?     │                         │  ─────────────  │       │
//! │  │  reviews        │                         │  Percentage bps │       │
//! │  │  images         │                         │  Fixed amount   │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Strictness at the Boundary
//! The backend's JSON is loose (optional nesting, string numbers). These
//! types are the strict form: `bazaar-feed` validates once at parse time,
//! and everything downstream trusts the type. Optional fields here mean
//! the absence is a legitimate domain state (uncategorized, no brand),
//! not a defensive null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Coupon
// =============================================================================

/// Whether a coupon is switched on by the merchant.
///
/// An `Active` coupon still only discounts inside its validity window;
/// an `Inactive` one never discounts regardless of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CouponStatus {
    Active,
    Inactive,
}

/// How a coupon reduces the regular price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountRule {
    /// Percentage off the regular price, in basis points (1500 = 15%).
    Percentage { bps: u32 },
    /// Fixed amount off the regular price.
    Fixed { amount: Money },
}

/// A time-bounded discount rule attached to a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    pub status: CouponStatus,
    pub rule: DiscountRule,

    /// First instant the coupon applies (inclusive).
    #[ts(as = "String")]
    pub starts_at: DateTime<Utc>,

    /// Last instant the coupon applies (inclusive).
    #[ts(as = "String")]
    pub ends_at: DateTime<Utc>,
}

impl Coupon {
    /// Checks whether the coupon discounts at the given instant.
    ///
    /// Both window boundaries count as active: `now == starts_at` and
    /// `now == ends_at` discount.
    #[inline]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.status == CouponStatus::Active && self.starts_at <= now && now <= self.ends_at
    }
}

// =============================================================================
// Review
// =============================================================================

/// A single product review. Only the rating participates in catalog math;
/// review text lives with the review service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Review {
    /// Star rating, 1..=5. Enforced at the feed boundary.
    pub rating: u8,
}

// =============================================================================
// Variant
// =============================================================================

/// A purchasable unit of a product (a specific size/color), the atomic
/// catalog item filtered and priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    /// Server-issued identifier, stable across requests.
    pub id: String,

    /// Display name shown on product cards.
    pub name: String,

    /// Undiscounted unit price in cents. Never negative.
    pub regular_price_cents: i64,

    /// Category of the parent product. `None` means uncategorized.
    pub category_id: Option<String>,

    /// Subcategory of the parent product, if the category has them.
    pub subcategory_id: Option<String>,

    /// Brand of the parent product. `None` means no brand.
    pub brand_id: Option<String>,

    /// Units on hand. Zero means unavailable for cart addition.
    pub stock_quantity: i64,

    /// Currently attached promotion, if any.
    pub promotion: Option<Coupon>,

    /// Reviews for this variant; may be empty.
    pub reviews: Vec<Review>,

    /// Image references; first is primary. May be empty (the display
    /// layer substitutes a placeholder).
    pub images: Vec<String>,
}

impl Variant {
    /// Returns the regular price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.regular_price_cents)
    }

    /// Checks if the variant can be added to a cart.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Returns the primary image reference, if any.
    #[inline]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coupon(status: CouponStatus) -> Coupon {
        Coupon {
            status,
            rule: DiscountRule::Percentage { bps: 1000 },
            starts_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap(),
        }
    }

    #[test]
    fn test_coupon_window_inclusive() {
        let c = coupon(CouponStatus::Active);
        assert!(c.is_active_at(c.starts_at));
        assert!(c.is_active_at(c.ends_at));
        assert!(c.is_active_at(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()));
        assert!(!c.is_active_at(c.starts_at - chrono::Duration::seconds(1)));
        assert!(!c.is_active_at(c.ends_at + chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_inactive_coupon_never_active() {
        let c = coupon(CouponStatus::Inactive);
        assert!(!c.is_active_at(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()));
    }

    #[test]
    fn test_variant_helpers() {
        let v = Variant {
            id: "v-1".to_string(),
            name: "Wireless Earbuds".to_string(),
            regular_price_cents: 4999,
            category_id: Some("cat-audio".to_string()),
            subcategory_id: None,
            brand_id: None,
            stock_quantity: 0,
            promotion: None,
            reviews: vec![],
            images: vec!["img/earbuds-front.jpg".to_string()],
        };
        assert_eq!(v.price().cents(), 4999);
        assert!(!v.in_stock());
        assert_eq!(v.primary_image(), Some("img/earbuds-front.jpg"));
    }
}
