//! # Raw Payload Mirrors
//!
//! Serde mirrors of the backend's actual JSON shapes. Everything here is
//! optional and loosely typed on purpose: the wire format nests
//! defensively, mixes string and numeric ids, and carries its own casing
//! (`StockQuantity`, `BrandName`). The strictness lives one step later,
//! in [`crate::parse`].
//!
//! ```text
//! {
//!   "variant": [{
//!     "id": 12,
//!     "variant_name": "Wireless Earbuds",
//!     "regular_price": 49.99,
//!     "product": { "category_id": 3, "subcategory_id": 7, "brand_id": 2 },
//!     "product_variant_promotion": {
//!       "coupon": {
//!         "status": "Active",
//!         "discount_type": "percentage",
//!         "discount_value": "15",
//!         "start_date": "2025-06-01",
//!         "end_date": "2025-06-30"
//!       }
//!     },
//!     "review_rating": [{ "rating": 4 }],
//!     "variant_image": [{ "image": "products/earbuds.jpg" }],
//!     "product_stock": { "StockQuantity": 35 }
//!   }]
//! }
//! ```

use serde::Deserialize;

// =============================================================================
// Loose Scalars
// =============================================================================

/// An identifier that arrives as either a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Str(String),
}

impl RawId {
    /// Normalizes to the string form used by the domain types.
    pub fn into_string(self) -> String {
        match self {
            RawId::Num(n) => n.to_string(),
            RawId::Str(s) => s,
        }
    }
}

/// A numeric value that arrives as either a JSON number or a numeric
/// string (`"discount_value": "15"` is common).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Num(f64),
    Str(String),
}

impl RawNumber {
    /// Parses to a finite f64; `None` for unparseable strings and
    /// non-finite values.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Num(n) => *n,
            RawNumber::Str(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

// =============================================================================
// Catalog Payload
// =============================================================================

/// The variant-list response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub variant: Vec<RawVariant>,
}

/// One variant record as served.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVariant {
    pub id: Option<RawId>,
    pub variant_name: Option<String>,
    pub regular_price: Option<RawNumber>,
    pub product: Option<RawProduct>,
    pub product_variant_promotion: Option<RawPromotion>,
    #[serde(default)]
    pub review_rating: Vec<RawReview>,
    #[serde(default)]
    pub variant_image: Vec<RawImage>,
    pub product_stock: Option<RawStock>,
}

/// The parent-product nesting that carries the foreign ids.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub category_id: Option<RawId>,
    pub subcategory_id: Option<RawId>,
    pub brand_id: Option<RawId>,
}

/// Promotion wrapper; the coupon is the interesting part.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPromotion {
    pub coupon: Option<RawCoupon>,
}

/// A promotional coupon as served.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCoupon {
    pub status: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: Option<RawNumber>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One review row; only the rating matters to the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    pub rating: Option<RawNumber>,
}

/// One image row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub image: Option<String>,
}

/// Stock nesting. The backend spells this field in PascalCase.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStock {
    #[serde(rename = "StockQuantity")]
    pub stock_quantity: Option<RawNumber>,
}

// =============================================================================
// Unit Tests
// =============================================================================
