//! # Change Notifications
//!
//! The observer contract between the engine and whatever presentation
//! layer is bound to it. Deliberately framework-free: a subscription is
//! a plain callback plus a token to release it with.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Events
// =============================================================================

/// Something the presentation layer should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEvent {
    /// The filtered set was recomputed. Carries the new total so list
    /// headers ("45 products") can update without a snapshot fetch.
    FilteredSetChanged { total: usize },

    /// The current page changed, via explicit request or the automatic
    /// reset that follows any criteria change.
    PageChanged { page: usize },
}

// =============================================================================
// Subscriptions
// =============================================================================

/// Token returned by `CatalogStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub(crate) fn new() -> Self {
        SubscriptionId(Uuid::new_v4())
    }

    pub(crate) fn uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A registered observer callback.
///
/// Callbacks run synchronously on the thread performing the mutation, in
/// registration order. They may call back into the store's state methods,
/// but must not subscribe or unsubscribe from inside a notification.
pub(crate) type Subscriber = Box<dyn Fn(CatalogEvent) + Send>;
