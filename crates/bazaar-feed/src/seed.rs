//! # Criteria Pre-Seeding
//!
//! Builds an initial [`FilterCriteria`] from a navigation request
//! ("show me category Audio") so the shop page opens pre-filtered
//! instead of defaulting to everything.
//!
//! Names arrive as display names (that is what links carry); they are
//! resolved to ids through the [`NameIndex`]. Unresolvable names are
//! logged and skipped — a stale deep link degrades to the unfiltered
//! page rather than erroring.

use serde::Deserialize;
use tracing::warn;

use bazaar_core::filter::{FilterCriteria, PriceRange};
use bazaar_core::validation::validate_search_query;

use crate::error::FeedResult;
use crate::lookup::NameIndex;

// =============================================================================
// Seed
// =============================================================================

/// The portion of a navigation request that can pre-filter the shop page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaSeed {
    /// Category display name.
    pub category: Option<String>,

    /// Brand display name.
    pub brand: Option<String>,

    /// Free-text search carried over from the header search box.
    #[serde(rename = "searchQuery")]
    pub search_query: Option<String>,
}

impl CriteriaSeed {
    /// Checks whether the seed would change anything.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.brand.is_none() && self.search_query.is_none()
    }
}

/// Builds initial criteria from a seed, resolving names through the
/// lookups and validating the carried-over search text.
pub fn seed_criteria(
    seed: &CriteriaSeed,
    bounds: PriceRange,
    categories: &NameIndex,
    brands: &NameIndex,
) -> FeedResult<FilterCriteria> {
    let mut criteria = FilterCriteria::with_bounds(bounds);

    if let Some(name) = seed.category.as_deref() {
        match categories.id_for_name(name) {
            Some(id) => criteria.category_ids.push(id.to_string()),
            None => warn!(category = %name, "seed category not found, ignoring"),
        }
    }

    if let Some(name) = seed.brand.as_deref() {
        match brands.id_for_name(name) {
            Some(id) => criteria.brand_ids.push(id.to_string()),
            None => warn!(brand = %name, "seed brand not found, ignoring"),
        }
    }

    if let Some(query) = seed.search_query.as_deref() {
        criteria.search_query = validate_search_query(query)?;
    }

    Ok(criteria)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::money::Money;

    fn bounds() -> PriceRange {
        PriceRange {
            min: Money::zero(),
            max: Money::from_major(1000),
        }
    }

    fn categories() -> NameIndex {
        NameIndex::from_categories_json(r#"{"categories":[{"id": 3, "categoryName": "Audio"}]}"#)
            .unwrap()
    }

    fn brands() -> NameIndex {
        NameIndex::from_brands_json(r#"{"Brands":[{"id": 7, "BrandName": "Acme"}]}"#).unwrap()
    }

    #[test]
    fn test_seed_resolves_names_case_insensitively() {
        let seed = CriteriaSeed {
            category: Some("audio".to_string()),
            brand: Some("ACME".to_string()),
            search_query: Some("  earbuds ".to_string()),
        };
        let criteria = seed_criteria(&seed, bounds(), &categories(), &brands()).unwrap();

        assert_eq!(criteria.category_ids, vec!["3".to_string()]);
        assert_eq!(criteria.brand_ids, vec!["7".to_string()]);
        assert_eq!(criteria.search_query, "earbuds");
        assert_eq!(criteria.price_range, bounds());
    }

    #[test]
    fn test_unknown_names_ignored() {
        let seed = CriteriaSeed {
            category: Some("Garden".to_string()),
            brand: None,
            search_query: None,
        };
        let criteria = seed_criteria(&seed, bounds(), &categories(), &brands()).unwrap();
        assert!(criteria.category_ids.is_empty());
    }

    #[test]
    fn test_empty_seed() {
        let seed = CriteriaSeed::default();
        assert!(seed.is_empty());
        let criteria = seed_criteria(&seed, bounds(), &categories(), &brands()).unwrap();
        assert_eq!(criteria, FilterCriteria::with_bounds(bounds()));
    }

    #[test]
    fn test_overlong_search_rejected() {
        let seed = CriteriaSeed {
            category: None,
            brand: None,
            search_query: Some("x".repeat(200)),
        };
        assert!(seed_criteria(&seed, bounds(), &categories(), &brands()).is_err());
    }
}
