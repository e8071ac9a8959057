//! # Cart
//!
//! The shopping cart and its line items.
//!
//! ## Price Freezing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Pattern                                     │
//! │                                                                         │
//! │  Variant (catalog) ──► resolve_price(variant, now) ──► CartItem        │
//! │                                                                         │
//! │  The EFFECTIVE price at add time is frozen into the line item. If      │
//! │  the coupon expires or the list price changes while the shopper is     │
//! │  still browsing, the cart keeps charging what was quoted.              │
//! │                                                                         │
//! │  regular_price_cents is frozen too, so the cart row can render the     │
//! │  struck-through list price without a catalog lookup.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `variant_id` (adding the same variant again
//!   increases quantity)
//! - Quantity is always > 0 (an update to 0 removes the item)
//! - At most `MAX_CART_ITEMS` distinct items, `MAX_ITEM_QUANTITY` per item
//! - Out-of-stock variants are rejected at add time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing::resolve_price;
use crate::types::Variant;
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the cart, frozen at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Catalog variant this line refers to.
    pub variant_id: String,

    /// Name at time of adding (frozen).
    pub name: String,

    /// Effective (coupon-resolved) unit price at time of adding (frozen).
    pub unit_price_cents: i64,

    /// List price at time of adding (frozen), for struck-through display.
    pub regular_price_cents: i64,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this item was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line item from a catalog variant, freezing the price
    /// quoted at `now`.
    pub fn from_variant(variant: &Variant, quantity: i64, now: DateTime<Utc>) -> Self {
        let quote = resolve_price(variant, now);
        CartItem {
            variant_id: variant.id.clone(),
            name: variant.name.clone(),
            unit_price_cents: quote.effective.cents(),
            regular_price_cents: quote.regular.cents(),
            quantity,
            added_at: now,
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in add order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a variant to the cart or increases quantity if already present.
    ///
    /// Rejects out-of-stock variants, non-positive or over-cap quantities,
    /// and carts at the distinct-item cap.
    pub fn add_variant(
        &mut self,
        variant: &Variant,
        quantity: i64,
        now: DateTime<Utc>,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if !variant.in_stock() {
            return Err(CoreError::OutOfStock {
                id: variant.id.clone(),
            });
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.variant_id == variant.id)
        {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_variant(variant, quantity, now));
        Ok(())
    }

    /// Updates the quantity of an item. A quantity of 0 removes it.
    pub fn update_quantity(&mut self, variant_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(variant_id);
        }
        validate_quantity(quantity)?;

        match self.items.iter_mut().find(|i| i.variant_id == variant_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::NotInCart {
                id: variant_id.to_string(),
            }),
        }
    }

    /// Removes an item by variant id.
    pub fn remove_item(&mut self, variant_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.variant_id != variant_id);

        if self.items.len() == initial_len {
            Err(CoreError::NotInCart {
                id: variant_id.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Clears all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks whether a variant is already in the cart.
    pub fn contains(&self, variant_id: &str) -> bool {
        self.items.iter().any(|i| i.variant_id == variant_id)
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal in cents (sum of line totals).
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
