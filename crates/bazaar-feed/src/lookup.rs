//! # Name Lookups
//!
//! Id → display-name resolution for categories and brands, built from
//! their respective list payloads. Used by the presentation layer to
//! label removed-filter chips, and by [`crate::seed`] to resolve a
//! navigation request's names back to ids. Filtering itself never
//! consults names.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::dto::RawId;
use crate::error::FeedResult;

// =============================================================================
// Raw Payloads
// =============================================================================

/// The category-list response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategories {
    #[serde(default)]
    pub categories: Vec<RawNamedRecord>,
}

/// The brand-list response envelope. The backend capitalizes this key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBrands {
    #[serde(default, rename = "Brands")]
    pub brands: Vec<RawNamedRecord>,
}

/// A named record; categories use `categoryName`, brands `BrandName`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNamedRecord {
    pub id: Option<RawId>,
    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,
    #[serde(rename = "BrandName")]
    pub brand_name: Option<String>,
}

impl RawNamedRecord {
    fn display_name(&self) -> Option<&str> {
        self.category_name
            .as_deref()
            .or(self.brand_name.as_deref())
    }
}

// =============================================================================
// Name Index
// =============================================================================

/// Bidirectional id ↔ display-name index.
///
/// Name lookups are case-insensitive; a navigation request saying
/// "category=audio" matches the category named "Audio".
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    name_by_id: HashMap<String, String>,
    id_by_lower_name: HashMap<String, String>,
}

impl NameIndex {
    /// Builds an index from a category-list payload.
    pub fn from_categories_json(json: &str) -> FeedResult<Self> {
        let raw: RawCategories = serde_json::from_str(json)?;
        Ok(Self::from_records(raw.categories))
    }

    /// Builds an index from a brand-list payload.
    pub fn from_brands_json(json: &str) -> FeedResult<Self> {
        let raw: RawBrands = serde_json::from_str(json)?;
        Ok(Self::from_records(raw.brands))
    }

    fn from_records(records: Vec<RawNamedRecord>) -> Self {
        let mut index = NameIndex::default();
        for record in records {
            let (id, name) = match (record.id.clone(), record.display_name()) {
                (Some(id), Some(name)) => (id.into_string(), name.to_string()),
                _ => {
                    warn!("named record without id or name in lookup payload, skipping");
                    continue;
                }
            };
            index.id_by_lower_name.insert(name.to_lowercase(), id.clone());
            index.name_by_id.insert(id, name);
        }
        index
    }

    /// Resolves an id to its display name.
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.name_by_id.get(id).map(String::as_str)
    }

    /// Resolves a display name to its id, case-insensitively.
    pub fn id_for_name(&self, name: &str) -> Option<&str> {
        self.id_by_lower_name
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.name_by_id.len()
    }

    /// Checks if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.name_by_id.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
