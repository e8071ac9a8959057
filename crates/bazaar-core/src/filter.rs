//! # Filter Engine
//!
//! Applies the shopper's filter criteria to the full variant list,
//! producing an order-preserving subsequence.
//!
//! ## Predicate Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     applyFilters (AND-composed)                         │
//! │                                                                         │
//! │  variants ──► category? ──► brand? ──► price range ──► search? ──► out │
//! │                                                                         │
//! │  • category/brand/search clauses are skipped when their criteria       │
//! │    set is empty                                                         │
//! │  • price range is ALWAYS applied                                        │
//! │  • input order is preserved; output is a subsequence                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Basis
//! Range filtering compares the REGULAR price, not the coupon-adjusted
//! effective price: a heavily discounted item whose list price sits outside
//! the range is excluded even though the charged price would fall inside.
//! Known limitation, kept deliberately; it is isolated behind
//! [`FilterPolicy`] so it can be flipped without touching the rest of the
//! pipeline. See `PriceBasis::Effective`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::resolve_price;
use crate::types::Variant;

// =============================================================================
// Constants
// =============================================================================

/// Padding added around the observed min/max when deriving default slider
/// bounds: `[floor(min) - $100, ceil(max) + $100]`.
pub const PRICE_BOUND_PAD: Money = Money::from_major(100);

/// Upper bound used when the variant list is empty: `[$0, $1000]`.
pub const EMPTY_CATALOG_MAX: Money = Money::from_major(1000);

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price bounds for range filtering.
///
/// The lower bound may be negative: default bounds subtract the pad from
/// the observed minimum without clamping, as a slider-boundary convenience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Checks whether a price falls inside the range (both bounds inclusive).
    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Derives the default slider bounds from a variant list.
///
/// Non-empty list: `[floor(min) − $100, ceil(max) + $100]` in whole major
/// units. Empty list: `[$0, $1000]`.
pub fn default_bounds(variants: &[Variant]) -> PriceRange {
    let mut prices = variants.iter().map(Variant::price);

    let first = match prices.next() {
        Some(p) => p,
        None => {
            return PriceRange {
                min: Money::zero(),
                max: EMPTY_CATALOG_MAX,
            };
        }
    };

    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));

    PriceRange {
        min: (min - PRICE_BOUND_PAD).floor_to_major(),
        max: (max + PRICE_BOUND_PAD).ceil_to_major(),
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// The shopper's current filter constraints.
///
/// Ephemeral: created with default bounds once the variant list loads,
/// mutated by interaction, reset on demand. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilterCriteria {
    /// Selected category ids. Empty = no category restriction.
    /// Matches either the category or the subcategory of a variant.
    pub category_ids: Vec<String>,

    /// Selected brand ids. Empty = no brand restriction.
    pub brand_ids: Vec<String>,

    /// Inclusive price bounds. Always applied.
    pub price_range: PriceRange,

    /// Free-text search, matched case-insensitively against variant names.
    /// Empty = no search restriction.
    pub search_query: String,
}

impl FilterCriteria {
    /// Creates unrestricted criteria with the given price bounds.
    pub fn with_bounds(bounds: PriceRange) -> Self {
        FilterCriteria {
            category_ids: Vec::new(),
            brand_ids: Vec::new(),
            price_range: bounds,
            search_query: String::new(),
        }
    }

    /// Toggles a category id: absent ⇒ added, present ⇒ removed.
    pub fn toggle_category(&mut self, id: &str) {
        toggle(&mut self.category_ids, id);
    }

    /// Toggles a brand id: absent ⇒ added, present ⇒ removed.
    pub fn toggle_brand(&mut self, id: &str) {
        toggle(&mut self.brand_ids, id);
    }
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|existing| existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}

// =============================================================================
// Filter Policy
// =============================================================================

/// Which price the range clause compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PriceBasis {
    /// Compare the undiscounted list price (the shipped behavior).
    #[default]
    Regular,
    /// Compare the coupon-adjusted effective price.
    Effective,
}

/// Tunable filtering policy. One flag today; a struct so future knobs
/// don't ripple through call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilterPolicy {
    pub price_basis: PriceBasis,
}

// =============================================================================
// Filtering
// =============================================================================

/// Applies filter criteria under the default policy (regular-price basis).
///
/// Returns an order-preserving subsequence of `variants`. Idempotent:
/// filtering an already-filtered list with the same criteria is a no-op.
pub fn apply_filters(variants: &[Variant], criteria: &FilterCriteria) -> Vec<Variant> {
    let needle = search_needle(criteria);
    variants
        .iter()
        .filter(|v| passes(v, criteria, v.price(), needle.as_deref()))
        .cloned()
        .collect()
}

/// Applies filter criteria under an explicit policy.
///
/// `now` participates only when the policy selects the effective-price
/// basis; callers must pass the same instant they use for display pricing
/// so the filter and the card agree.
pub fn apply_filters_with(
    variants: &[Variant],
    criteria: &FilterCriteria,
    policy: &FilterPolicy,
    now: DateTime<Utc>,
) -> Vec<Variant> {
    let needle = search_needle(criteria);
    variants
        .iter()
        .filter(|v| {
            let basis_price = match policy.price_basis {
                PriceBasis::Regular => v.price(),
                PriceBasis::Effective => resolve_price(v, now).effective,
            };
            passes(v, criteria, basis_price, needle.as_deref())
        })
        .cloned()
        .collect()
}

/// Lowercased search needle, or None when the search clause is inactive.
fn search_needle(criteria: &FilterCriteria) -> Option<String> {
    if criteria.search_query.is_empty() {
        None
    } else {
        Some(criteria.search_query.to_lowercase())
    }
}

/// Single-variant predicate. `basis_price` is the price the range clause
/// compares; the caller picks it per the active policy.
fn passes(
    variant: &Variant,
    criteria: &FilterCriteria,
    basis_price: Money,
    needle: Option<&str>,
) -> bool {
    if !criteria.category_ids.is_empty() {
        let in_category = id_selected(&criteria.category_ids, variant.category_id.as_deref())
            || id_selected(&criteria.category_ids, variant.subcategory_id.as_deref());
        if !in_category {
            return false;
        }
    }

    if !criteria.brand_ids.is_empty()
        && !id_selected(&criteria.brand_ids, variant.brand_id.as_deref())
    {
        return false;
    }

    if !criteria.price_range.contains(basis_price) {
        return false;
    }

    if let Some(needle) = needle {
        if !variant.name.to_lowercase().contains(needle) {
            return false;
        }
    }

    true
}

fn id_selected(selected: &[String], id: Option<&str>) -> bool {
    match id {
        Some(id) => selected.iter().any(|s| s == id),
        None => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
