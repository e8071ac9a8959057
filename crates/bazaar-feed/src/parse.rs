//! # Payload Conversion
//!
//! One-shot conversion from the raw payload mirrors to strict
//! [`Variant`] records.
//!
//! ## Data-Quality Posture (validate once, trust thereafter)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Wire problem                      Outcome                 Logged as   │
//! │  ───────────────────────────────   ─────────────────────   ─────────   │
//! │  variant without id                record dropped          warn        │
//! │  missing/unparseable price         price treated as 0      warn        │
//! │  negative price                    price treated as 0      warn        │
//! │  missing name                      "Unknown Product"       warn        │
//! │  unparseable coupon window         coupon dropped          warn        │
//! │  unknown discount type             coupon dropped          warn        │
//! │  negative discount value           coupon dropped          warn        │
//! │  rating outside 1..=5              review dropped          warn        │
//! │  negative stock                    stock treated as 0      warn        │
//! │                                                                         │
//! │  Nothing in this module panics on any payload.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A dropped coupon is indistinguishable from an inactive one downstream,
//! which is exactly the required behavior: malformed promotions never
//! discount.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use bazaar_core::money::Money;
use bazaar_core::types::{Coupon, CouponStatus, DiscountRule, Review, Variant};

use crate::dto::{RawCatalog, RawCoupon, RawVariant};
use crate::error::FeedResult;

// =============================================================================
// Entry Points
// =============================================================================

/// Parses a variant-list payload into domain records.
///
/// Fails only on malformed JSON; individual bad records degrade per the
/// table above instead of failing the whole catalog.
pub fn parse_catalog(json: &str) -> FeedResult<Vec<Variant>> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    Ok(convert_catalog(raw))
}

/// Converts an already-deserialized payload.
pub fn convert_catalog(raw: RawCatalog) -> Vec<Variant> {
    raw.variant.into_iter().filter_map(convert_variant).collect()
}

// =============================================================================
// Per-Record Conversion
// =============================================================================

fn convert_variant(raw: RawVariant) -> Option<Variant> {
    let id = match raw.id {
        Some(id) => id.into_string(),
        None => {
            warn!("variant without id in catalog payload, dropping record");
            return None;
        }
    };

    let name = match raw.variant_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            warn!(variant_id = %id, "variant has no name, using fallback");
            "Unknown Product".to_string()
        }
    };

    let regular_price_cents = match raw.regular_price.as_ref().and_then(|p| p.as_f64()) {
        Some(price) if price >= 0.0 => to_cents(price),
        Some(price) => {
            warn!(variant_id = %id, price, "negative regular_price, treating as 0");
            0
        }
        None => {
            warn!(variant_id = %id, "missing or malformed regular_price, treating as 0");
            0
        }
    };

    let (category_id, subcategory_id, brand_id) = match raw.product {
        Some(product) => (
            product.category_id.map(|i| i.into_string()),
            product.subcategory_id.map(|i| i.into_string()),
            product.brand_id.map(|i| i.into_string()),
        ),
        None => (None, None, None),
    };

    let promotion = raw
        .product_variant_promotion
        .and_then(|p| p.coupon)
        .and_then(|coupon| convert_coupon(&id, coupon));

    let reviews = raw
        .review_rating
        .into_iter()
        .filter_map(|r| convert_review(&id, r.rating.as_ref().and_then(|n| n.as_f64())))
        .collect();

    let images = raw
        .variant_image
        .into_iter()
        .filter_map(|i| i.image)
        .collect();

    let stock_quantity = match raw
        .product_stock
        .and_then(|s| s.stock_quantity)
        .and_then(|n| n.as_f64())
    {
        Some(qty) if qty < 0.0 => {
            warn!(variant_id = %id, qty, "negative stock quantity, treating as 0");
            0
        }
        Some(qty) => qty.round() as i64,
        None => 0,
    };

    Some(Variant {
        id,
        name,
        regular_price_cents,
        category_id,
        subcategory_id,
        brand_id,
        stock_quantity,
        promotion,
        reviews,
        images,
    })
}

fn convert_coupon(variant_id: &str, raw: RawCoupon) -> Option<Coupon> {
    let status = match raw.status.as_deref() {
        Some("Active") => CouponStatus::Active,
        _ => CouponStatus::Inactive,
    };

    let value = match raw.discount_value.as_ref().and_then(|v| v.as_f64()) {
        Some(v) if v >= 0.0 => v,
        Some(v) => {
            warn!(variant_id = %variant_id, value = v, "negative discount_value, dropping coupon");
            return None;
        }
        None => {
            warn!(variant_id = %variant_id, "missing or malformed discount_value, dropping coupon");
            return None;
        }
    };

    let rule = match raw.discount_type.as_deref() {
        Some("percentage") => DiscountRule::Percentage {
            bps: (value * 100.0).round() as u32,
        },
        Some("fixed") => DiscountRule::Fixed {
            amount: Money::from_cents(to_cents(value)),
        },
        other => {
            warn!(
                variant_id = %variant_id,
                discount_type = other.unwrap_or("<missing>"),
                "unknown discount_type, dropping coupon"
            );
            return None;
        }
    };

    let starts_at = parse_window_date(raw.start_date.as_deref());
    let ends_at = parse_window_date(raw.end_date.as_deref());
    let (starts_at, ends_at) = match (starts_at, ends_at) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            warn!(variant_id = %variant_id, "unparseable coupon validity window, dropping coupon");
            return None;
        }
    };

    Some(Coupon {
        status,
        rule,
        starts_at,
        ends_at,
    })
}

fn convert_review(variant_id: &str, rating: Option<f64>) -> Option<Review> {
    match rating {
        Some(r) if (1.0..=5.0).contains(&r) && r.fract() == 0.0 => Some(Review { rating: r as u8 }),
        Some(r) => {
            warn!(variant_id = %variant_id, rating = r, "rating outside 1..=5, dropping review");
            None
        }
        None => {
            warn!(variant_id = %variant_id, "missing rating, dropping review");
            None
        }
    }
}

/// Converts a decimal price in major units to cents.
fn to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Parses the date formats the backend is known to emit: RFC 3339,
/// `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD` (midnight UTC).
fn parse_window_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FULL_PAYLOAD: &str = r#"{
        "variant": [{
            "id": 12,
            "variant_name": "Wireless Earbuds",
            "regular_price": 49.99,
            "product": { "category_id": 3, "subcategory_id": 7, "brand_id": "acme" },
            "product_variant_promotion": {
                "coupon": {
                    "status": "Active",
                    "discount_type": "percentage",
                    "discount_value": "15",
                    "start_date": "2025-06-01",
                    "end_date": "2025-06-30"
                }
            },
            "review_rating": [{ "rating": 4 }, { "rating": 5 }],
            "variant_image": [{ "image": "products/earbuds.jpg" }],
            "product_stock": { "StockQuantity": 35 }
        }]
    }"#;

    #[test]
    fn test_full_payload() {
        let variants = parse_catalog(FULL_PAYLOAD).unwrap();
        assert_eq!(variants.len(), 1);

        let v = &variants[0];
        assert_eq!(v.id, "12");
        assert_eq!(v.name, "Wireless Earbuds");
        assert_eq!(v.regular_price_cents, 4999);
        assert_eq!(v.category_id.as_deref(), Some("3"));
        assert_eq!(v.subcategory_id.as_deref(), Some("7"));
        assert_eq!(v.brand_id.as_deref(), Some("acme"));
        assert_eq!(v.stock_quantity, 35);
        assert_eq!(v.reviews.len(), 2);
        assert_eq!(v.images, vec!["products/earbuds.jpg".to_string()]);

        let coupon = v.promotion.expect("coupon should survive");
        assert_eq!(coupon.status, CouponStatus::Active);
        assert_eq!(coupon.rule, DiscountRule::Percentage { bps: 1500 });
        assert_eq!(
            coupon.starts_at,
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_price_becomes_zero() {
        let variants = parse_catalog(r#"{"variant":[{"id":1,"variant_name":"X"}]}"#).unwrap();
        assert_eq!(variants[0].regular_price_cents, 0);
    }

    #[test]
    fn test_malformed_price_becomes_zero() {
        let variants =
            parse_catalog(r#"{"variant":[{"id":1,"variant_name":"X","regular_price":"oops"}]}"#)
                .unwrap();
        assert_eq!(variants[0].regular_price_cents, 0);
    }

    #[test]
    fn test_variant_without_id_dropped() {
        let variants = parse_catalog(r#"{"variant":[{"variant_name":"X"}]}"#).unwrap();
        assert!(variants.is_empty());
    }

    #[test]
    fn test_unparseable_coupon_window_drops_coupon() {
        let json = r#"{"variant":[{
            "id": 1,
            "variant_name": "X",
            "regular_price": 10,
            "product_variant_promotion": {
                "coupon": {
                    "status": "Active",
                    "discount_type": "fixed",
                    "discount_value": 5,
                    "start_date": "not-a-date",
                    "end_date": "2025-06-30"
                }
            }
        }]}"#;
        let variants = parse_catalog(json).unwrap();
        assert!(variants[0].promotion.is_none());
    }

    #[test]
    fn test_unknown_discount_type_drops_coupon() {
        let json = r#"{"variant":[{
            "id": 1,
            "variant_name": "X",
            "product_variant_promotion": {
                "coupon": {
                    "status": "Active",
                    "discount_type": "bogo",
                    "discount_value": 5,
                    "start_date": "2025-06-01",
                    "end_date": "2025-06-30"
                }
            }
        }]}"#;
        let variants = parse_catalog(json).unwrap();
        assert!(variants[0].promotion.is_none());
    }

    #[test]
    fn test_non_active_status_kept_as_inactive() {
        let json = r#"{"variant":[{
            "id": 1,
            "variant_name": "X",
            "product_variant_promotion": {
                "coupon": {
                    "status": "Paused",
                    "discount_type": "fixed",
                    "discount_value": 5,
                    "start_date": "2025-06-01",
                    "end_date": "2025-06-30"
                }
            }
        }]}"#;
        let variants = parse_catalog(json).unwrap();
        let coupon = variants[0].promotion.expect("coupon kept");
        assert_eq!(coupon.status, CouponStatus::Inactive);
    }

    #[test]
    fn test_out_of_range_rating_dropped() {
        let json = r#"{"variant":[{
            "id": 1,
            "variant_name": "X",
            "review_rating": [{ "rating": 4 }, { "rating": 9 }, { "rating": 2.5 }, {}]
        }]}"#;
        let variants = parse_catalog(json).unwrap();
        assert_eq!(variants[0].reviews.len(), 1);
        assert_eq!(variants[0].reviews[0].rating, 4);
    }

    #[test]
    fn test_negative_stock_clamped() {
        let json = r#"{"variant":[{
            "id": 1, "variant_name": "X",
            "product_stock": { "StockQuantity": -3 }
        }]}"#;
        let variants = parse_catalog(json).unwrap();
        assert_eq!(variants[0].stock_quantity, 0);
    }

    #[test]
    fn test_empty_envelope() {
        assert!(parse_catalog("{}").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_catalog("not json").is_err());
    }

    #[test]
    fn test_window_date_formats() {
        assert!(parse_window_date(Some("2025-06-01")).is_some());
        assert!(parse_window_date(Some("2025-06-01 12:30:00")).is_some());
        assert!(parse_window_date(Some("2025-06-01T12:30:00Z")).is_some());
        assert!(parse_window_date(Some("June 1st")).is_none());
        assert!(parse_window_date(None).is_none());
    }
}
