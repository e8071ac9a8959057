//! # bazaar-feed: Data-Source Boundary for the Bazaar Storefront
//!
//! Turns the backend's loose REST JSON into the strict domain types of
//! `bazaar-core`, validating once so everything downstream can trust the
//! types.
//!
//! ## Boundary Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Feed Boundary Flow                                  │
//! │                                                                         │
//! │  Host fetch layer resolves JSON (variants / categories / brands)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dto::Raw* mirrors          ── everything optional, wire casing        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse::parse_catalog       ── normalize, warn on data quality         │
//! │  lookup::NameIndex          ── id ↔ display-name resolution            │
//! │  seed::seed_criteria        ── navigation request → FilterCriteria     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bazaar_core::Variant / FilterCriteria (strict, trusted)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate never performs the fetch itself: it consumes payloads the
//! host's data-fetching layer already resolved.

pub mod dto;
pub mod error;
pub mod lookup;
pub mod parse;
pub mod seed;

pub use error::{FeedError, FeedResult};
pub use lookup::NameIndex;
pub use parse::{convert_catalog, parse_catalog};
pub use seed::{seed_criteria, CriteriaSeed};
