//! # Wishlist
//!
//! The shopper's saved-for-later list and its reconciliation with the cart.
//!
//! ## Move-to-Cart Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Add to cart" from a wishlist row                                      │
//! │                                                                         │
//! │  on wishlist? ──no──► NotInWishlist                                    │
//! │       │                                                                 │
//! │  in stock? ────no──► OutOfStock        (row stays on the wishlist)     │
//! │       │                                                                 │
//! │  already in cart? ─yes─► AlreadyInCart (row stays on the wishlist)     │
//! │       │                                                                 │
//! │  cart.add (qty 1, effective price frozen)                              │
//! │       │                                                                 │
//! │  remove from wishlist                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wishlist entry is removed only after the cart add succeeds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::Variant;

// =============================================================================
// Wishlist
// =============================================================================

/// A saved variant reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WishlistEntry {
    pub variant_id: String,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

/// The wishlist. Entries are unique by variant id, in add order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Wishlist {
    pub entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        Wishlist {
            entries: Vec::new(),
        }
    }

    /// Adds a variant. Returns `true` if it was newly added, `false` if
    /// it was already present (adding twice is a no-op, not an error).
    pub fn add(&mut self, variant_id: &str, now: DateTime<Utc>) -> bool {
        if self.contains(variant_id) {
            return false;
        }
        self.entries.push(WishlistEntry {
            variant_id: variant_id.to_string(),
            added_at: now,
        });
        true
    }

    /// Removes a variant from the wishlist.
    pub fn remove(&mut self, variant_id: &str) -> CoreResult<()> {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.variant_id != variant_id);

        if self.entries.len() == initial_len {
            Err(CoreError::NotInWishlist {
                id: variant_id.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Checks whether a variant is on the wishlist.
    pub fn contains(&self, variant_id: &str) -> bool {
        self.entries.iter().any(|e| e.variant_id == variant_id)
    }

    /// Number of saved variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves a wishlist entry into the cart.
    ///
    /// Checks stock and cart membership before touching either container;
    /// on any failure the wishlist is left unchanged. On success one unit
    /// is added at the effective price quoted at `now` and the entry is
    /// removed from the wishlist.
    pub fn move_to_cart(
        &mut self,
        cart: &mut Cart,
        variant: &Variant,
        now: DateTime<Utc>,
    ) -> CoreResult<()> {
        if !self.contains(&variant.id) {
            return Err(CoreError::NotInWishlist {
                id: variant.id.clone(),
            });
        }

        if !variant.in_stock() {
            return Err(CoreError::OutOfStock {
                id: variant.id.clone(),
            });
        }

        if cart.contains(&variant.id) {
            return Err(CoreError::AlreadyInCart {
                id: variant.id.clone(),
            });
        }

        cart.add_variant(variant, 1, now)?;
        self.remove(&variant.id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
