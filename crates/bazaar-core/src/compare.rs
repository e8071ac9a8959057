//! # Compare List
//!
//! A small side-by-side comparison tray. Hard-capped at
//! [`MAX_COMPARE_ITEMS`] entries so the comparison table stays renderable
//! on narrow layouts.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::MAX_COMPARE_ITEMS;

/// The compare tray. Entries are variant ids, unique, in add order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompareList {
    pub variant_ids: Vec<String>,
}

impl CompareList {
    /// Creates an empty compare list.
    pub fn new() -> Self {
        CompareList {
            variant_ids: Vec::new(),
        }
    }

    /// Adds a variant to the tray.
    ///
    /// Adding a variant that is already present is a no-op. Adding beyond
    /// the cap is rejected.
    pub fn add(&mut self, variant_id: &str) -> CoreResult<()> {
        if self.contains(variant_id) {
            return Ok(());
        }
        if self.variant_ids.len() >= MAX_COMPARE_ITEMS {
            return Err(CoreError::CompareListFull {
                max: MAX_COMPARE_ITEMS,
            });
        }
        self.variant_ids.push(variant_id.to_string());
        Ok(())
    }

    /// Removes a variant from the tray. Removing an absent id is a no-op.
    pub fn remove(&mut self, variant_id: &str) {
        self.variant_ids.retain(|id| id != variant_id);
    }

    /// Empties the tray.
    pub fn clear(&mut self) {
        self.variant_ids.clear();
    }

    /// Checks whether a variant is in the tray.
    pub fn contains(&self, variant_id: &str) -> bool {
        self.variant_ids.iter().any(|id| id == variant_id)
    }

    /// Number of variants in the tray.
    pub fn len(&self) -> usize {
        self.variant_ids.len()
    }

    /// Checks if the tray is empty.
    pub fn is_empty(&self) -> bool {
        self.variant_ids.is_empty()
    }
}
