//! # bazaar-engine: Catalog Coordinator for the Bazaar Storefront
//!
//! The stateful layer between the pure logic of `bazaar-core` and the
//! presentation layer. Owns the criteria state container, the debounce
//! timer, page state, and the change-notification contract.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Engine                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  CatalogStore (store.rs)                         │  │
//! │  │                                                                  │  │
//! │  │  variants snapshot ── criteria (copy-on-write) ── filtered set  │  │
//! │  │  current page ── default bounds ── subscriber list              │  │
//! │  └───────────┬──────────────────────────────────┬───────────────────┘  │
//! │              │                                  │                      │
//! │              ▼                                  ▼                      │
//! │  ┌────────────────────┐            ┌─────────────────────────┐        │
//! │  │ Debouncer          │            │ CatalogEvent            │        │
//! │  │ (debounce.rs)      │            │ (events.rs)             │        │
//! │  │                    │            │                         │        │
//! │  │ 300ms trailing     │            │ FilteredSetChanged      │        │
//! │  │ edge; newest       │            │ PageChanged             │        │
//! │  │ schedule wins      │            │ sync callbacks          │        │
//! │  └────────────────────┘            └─────────────────────────┘        │
//! │                                                                         │
//! │  ┌────────────────────┐            ┌─────────────────────────┐        │
//! │  │ EngineConfig       │            │ EngineError             │        │
//! │  │ (config.rs)        │            │ (error.rs)              │        │
//! │  │                    │            │                         │        │
//! │  │ page size, window, │            │ validation, config,     │        │
//! │  │ price basis        │            │ subscriptions           │        │
//! │  └────────────────────┘            └─────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Temporal Behavior
//! The debounce timer is the only timer in the system. Everything else is
//! synchronous relative to the host's event dispatch: mutators update
//! state and return; subscriber callbacks run on the mutating thread.
//!
//! ## Clock Ownership
//! `bazaar-core` never reads the system clock. This crate owns it and
//! injects the same instant into filtering and display pricing;
//! `CatalogStore::with_clock` pins it for tests.

pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod store;

pub use config::{EngineConfig, DEFAULT_DEBOUNCE_WINDOW_MS};
pub use debounce::Debouncer;
pub use error::{EngineError, EngineResult};
pub use events::{CatalogEvent, SubscriptionId};
pub use store::{CatalogStore, PageSnapshot};
