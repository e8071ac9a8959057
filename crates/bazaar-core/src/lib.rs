//! # bazaar-core: Pure Business Logic for the Bazaar Storefront
//!
//! This crate is the **heart** of the Bazaar catalog. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (SPA shell)                  │   │
//! │  │    Shop grid ──► Filter sidebar ──► Pager ──► Product cards    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / change events              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bazaar-engine                                │   │
//! │  │    CatalogStore, debounced recompute, subscriptions            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │  filter   │  │ paginate  │  │   cart    │  │   │
//! │  │   │PriceQuote │  │ Criteria  │  │ PageView  │  │ wishlist  │  │   │
//! │  │   │ resolve   │  │ apply     │  │  slice    │  │ compare   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO AMBIENT CLOCK • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bazaar-feed (Boundary Layer)                 │   │
//! │  │        REST JSON parsing, validation, name lookups              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Variant, Coupon, Review)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Effective price resolution from promotional coupons
//! - [`filter`] - Criteria predicates over the variant list
//! - [`paginate`] - Page slicing and page-count math
//! - [`cart`] / [`wishlist`] / [`compare`] - Shopper containers
//! - [`display`] - Shared card presentation math
//! - [`error`] / [`validation`] - Typed errors and input rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No Ambient Clock**: Time-dependent logic takes `now` as an argument
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::filter::{apply_filters, default_bounds, FilterCriteria};
//! use bazaar_core::paginate::{paginate, DEFAULT_PAGE_SIZE};
//!
//! let variants = vec![];
//! let criteria = FilterCriteria::with_bounds(default_bounds(&variants));
//!
//! let filtered = apply_filters(&variants, &criteria);
//! let page = paginate(&filtered, 1, DEFAULT_PAGE_SIZE);
//! assert_eq!(page.page_count, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod compare;
pub mod display;
pub mod error;
pub mod filter;
pub mod money;
pub mod paginate;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Money` instead of
// `use bazaar_core::money::Money`

pub use cart::{Cart, CartItem};
pub use compare::CompareList;
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{FilterCriteria, FilterPolicy, PriceBasis, PriceRange};
pub use money::Money;
pub use paginate::PageView;
pub use pricing::PriceQuote;
pub use types::{Coupon, CouponStatus, DiscountRule, Review, Variant};
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps checkout payloads bounded.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum variants in the compare tray.
///
/// ## Business Reason
/// The side-by-side comparison table stops being readable past four
/// columns, so the tray refuses a fifth entry.
pub const MAX_COMPARE_ITEMS: usize = 4;

/// Maximum configurable page size.
pub const MAX_PAGE_SIZE: usize = 100;
