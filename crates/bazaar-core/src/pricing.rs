//! # Price Resolution
//!
//! Computes the effective sale price of a variant from its optional
//! promotional coupon.
//!
//! ## Where Quotes Are Used
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Price Resolution Flow                                │
//! │                                                                         │
//! │  Variant ──► resolve_price(variant, now) ──► PriceQuote                │
//! │                                                 │                       │
//! │         ┌───────────────────────────────────────┤                       │
//! │         ▼                                       ▼                       │
//! │  Product card display                    Effective-basis filtering      │
//! │  (struck-through regular,                (opt-in FilterPolicy,          │
//! │   effective price, badge)                 see filter module)            │
//! │                                                                         │
//! │  BOTH callers pass the SAME (variant, now) inputs, so the price a      │
//! │  shopper sees is the price the filter used.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution is a pure function of `(variant, now)`. The caller owns the
//! clock; tests pass fixed instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DiscountRule, Variant};

// =============================================================================
// Price Quote
// =============================================================================

/// The resolved price of a variant at a given instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceQuote {
    /// The undiscounted list price.
    pub regular: Money,

    /// The price actually charged: regular price with any currently-active
    /// discount applied, clamped to non-negative.
    pub effective: Money,

    /// Whether the effective price is strictly below the regular price.
    /// A discount that clamps back to exactly the regular price (e.g. a
    /// zero-value coupon) reports `false`.
    pub has_discount: bool,

    /// Badge text ("15%", "$5.00"). Present only when `has_discount`.
    /// Display-only; no numeric semantics attached.
    pub discount_label: Option<String>,
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves the effective price of a variant at `now`.
///
/// ## Algorithm
/// 1. No coupon, inactive coupon, or `now` outside the inclusive
///    `[starts_at, ends_at]` window ⇒ effective == regular, no discount.
/// 2. Percentage rule: `regular × (1 − bps/10000)`.
///    Fixed rule: `regular − amount`.
/// 3. Clamp to non-negative.
/// 4. `has_discount` is computed from the clamped value.
///
/// ## Example
/// ```rust
/// use bazaar_core::pricing::resolve_price;
/// # use bazaar_core::types::Variant;
/// # let variant = Variant {
/// #     id: "v-1".into(), name: "Tea".into(), regular_price_cents: 1000,
/// #     category_id: None, subcategory_id: None, brand_id: None,
/// #     stock_quantity: 5, promotion: None, reviews: vec![], images: vec![],
/// # };
/// let quote = resolve_price(&variant, chrono::Utc::now());
/// assert_eq!(quote.effective, quote.regular);
/// assert!(!quote.has_discount);
/// ```
pub fn resolve_price(variant: &Variant, now: DateTime<Utc>) -> PriceQuote {
    let regular = variant.price();

    let active_rule = variant
        .promotion
        .as_ref()
        .filter(|coupon| coupon.is_active_at(now))
        .map(|coupon| coupon.rule);

    let rule = match active_rule {
        Some(rule) => rule,
        None => {
            return PriceQuote {
                regular,
                effective: regular,
                has_discount: false,
                discount_label: None,
            };
        }
    };

    let effective = match rule {
        DiscountRule::Percentage { bps } => regular.apply_percentage_discount(bps),
        DiscountRule::Fixed { amount } => regular - amount,
    }
    .clamp_non_negative();

    let has_discount = effective < regular;
    let discount_label = has_discount.then(|| discount_label(rule));

    PriceQuote {
        regular,
        effective,
        has_discount,
        discount_label,
    }
}

/// Formats the badge text for a discount rule.
///
/// Percentage values drop trailing zeros ("15%", "12.5%"); fixed values
/// use the Money display format ("$5.00").
fn discount_label(rule: DiscountRule) -> String {
    match rule {
        DiscountRule::Percentage { bps } => {
            let whole = bps / 100;
            let frac = bps % 100;
            if frac == 0 {
                format!("{whole}%")
            } else if frac % 10 == 0 {
                format!("{whole}.{}%", frac / 10)
            } else {
                format!("{whole}.{frac:02}%")
            }
        }
        DiscountRule::Fixed { amount } => amount.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
