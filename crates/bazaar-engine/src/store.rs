//! # Catalog Store
//!
//! The state container the presentation layer binds to.
//!
//! ## State & Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CatalogStore                                     │
//! │                                                                         │
//! │  Sidebar Action           Store Method            State Change          │
//! │  ──────────────           ────────────            ────────────          │
//! │  Check category  ───────► toggle_category() ───┐                        │
//! │  Check brand     ───────► toggle_brand()     ───┼─► criteria replaced   │
//! │  Drag slider     ───────► set_price_range()  ───┤   wholesale (COW),    │
//! │  Type search     ───────► set_search_query() ───┤   recompute DEBOUNCED │
//! │  Click reset     ───────► reset_filters()    ───┘                        │
//! │                                                                         │
//! │  Click pager     ───────► set_page()         ───► clamped, immediate    │
//! │  Catalog fetch   ───────► load_variants()    ───► bounds derived,       │
//! │                                                    recompute immediate  │
//! │                                                                         │
//! │  Debounced recompute:                                                   │
//! │    apply_filters_with(variants, criteria, policy, clock())              │
//! │    page reset to 1                                                      │
//! │    subscribers notified (FilteredSetChanged, PageChanged)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Copy-on-Write Criteria
//! Mutators clone the criteria, modify the clone, and swap it in whole.
//! The debounced recompute reads whatever criteria is current when it
//! fires, so a burst of changes is computed exactly once, with the final
//! values.
//!
//! ## Thread Safety
//! State lives behind `Arc<Mutex<…>>`: the host thread mutates, the
//! debounce task recomputes. Locks are held only for the state swap;
//! subscriber callbacks run after the state lock is released.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use bazaar_core::filter::{
    apply_filters_with, default_bounds, FilterCriteria, FilterPolicy, PriceRange,
};
use bazaar_core::paginate::paginate;
use bazaar_core::pricing::{resolve_price, PriceQuote};
use bazaar_core::types::Variant;
use bazaar_core::validation::{validate_price_range, validate_search_query};

use crate::config::EngineConfig;
use crate::debounce::Debouncer;
use crate::error::{EngineError, EngineResult};
use crate::events::{CatalogEvent, Subscriber, SubscriptionId};

// =============================================================================
// Snapshots
// =============================================================================

/// An owned page snapshot for the presentation layer. Unlike
/// `bazaar_core::PageView` this clones the page items, so the host can
/// hold it across further store mutations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub items: Vec<Variant>,
    pub page_count: usize,
    pub current_page: usize,
    pub total_items: usize,
}

// =============================================================================
// Internal State
// =============================================================================

/// Injected time source. Production uses `Utc::now`; tests pin instants.
type SharedClock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

struct CatalogState {
    /// Snapshot of the loaded catalog. Replaced wholesale on (re)load.
    variants: Arc<Vec<Variant>>,

    /// Current filter criteria. Replaced wholesale on every change.
    criteria: FilterCriteria,

    /// Bounds derived from the loaded catalog; what reset restores.
    default_bounds: PriceRange,

    /// Latest filtered set, order-preserving subsequence of `variants`.
    filtered: Arc<Vec<Variant>>,

    /// Current 1-based page.
    current_page: usize,
}

impl CatalogState {
    fn empty() -> Self {
        let bounds = default_bounds(&[]);
        CatalogState {
            variants: Arc::new(Vec::new()),
            criteria: FilterCriteria::with_bounds(bounds),
            default_bounds: bounds,
            filtered: Arc::new(Vec::new()),
            current_page: 1,
        }
    }
}

// =============================================================================
// Catalog Store
// =============================================================================

/// The engine's state container: owns the variant snapshot, the criteria,
/// the filtered set, page state, and the debounce timer.
pub struct CatalogStore {
    state: Arc<Mutex<CatalogState>>,
    subscribers: Arc<Mutex<Vec<(SubscriptionId, Subscriber)>>>,
    config: EngineConfig,
    policy: FilterPolicy,
    debouncer: Debouncer,
    clock: SharedClock,
}

impl CatalogStore {
    /// Creates a store with the given configuration and the system clock.
    pub fn new(config: EngineConfig) -> Self {
        let debouncer = Debouncer::new(config.debounce_window());
        CatalogStore {
            state: Arc::new(Mutex::new(CatalogState::empty())),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            policy: config.filter_policy(),
            debouncer,
            config,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the time source. Tests pin a fixed instant so pricing and
    /// filtering are deterministic.
    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Loads a catalog snapshot, deriving default price bounds from it and
    /// resetting the criteria. Recomputes immediately (no debounce): there
    /// is one fetch and one consumer, and the page should not flash empty.
    pub fn load_variants(&self, variants: Vec<Variant>) {
        let bounds = default_bounds(&variants);
        let criteria = FilterCriteria::with_bounds(bounds);
        self.load_inner(variants, bounds, criteria);
    }

    /// Loads a catalog snapshot with pre-seeded criteria (e.g. from a
    /// navigation request resolved by the feed layer). The seed's bounds
    /// are kept as given; reset still restores the derived defaults.
    pub fn load_variants_seeded(&self, variants: Vec<Variant>, criteria: FilterCriteria) {
        let bounds = default_bounds(&variants);
        self.load_inner(variants, bounds, criteria);
    }

    fn load_inner(&self, variants: Vec<Variant>, bounds: PriceRange, criteria: FilterCriteria) {
        debug!(count = variants.len(), "catalog loaded");
        {
            let mut state = self.lock_state();
            state.variants = Arc::new(variants);
            state.default_bounds = bounds;
            state.criteria = criteria;
        }
        self.apply_now();
    }

    // -------------------------------------------------------------------------
    // Criteria Mutators (debounced recompute)
    // -------------------------------------------------------------------------

    /// Toggles a category selection.
    pub fn toggle_category(&self, id: &str) {
        let id = id.to_string();
        self.update_criteria(move |c| c.toggle_category(&id));
    }

    /// Toggles a brand selection.
    pub fn toggle_brand(&self, id: &str) {
        let id = id.to_string();
        self.update_criteria(move |c| c.toggle_brand(&id));
    }

    /// Sets the price range. Rejects inverted ranges.
    pub fn set_price_range(&self, range: PriceRange) -> EngineResult<()> {
        validate_price_range(&range)?;
        self.update_criteria(move |c| c.price_range = range);
        Ok(())
    }

    /// Sets the search query (trimmed). Rejects overlong input.
    pub fn set_search_query(&self, query: &str) -> EngineResult<()> {
        let query = validate_search_query(query)?;
        self.update_criteria(move |c| c.search_query = query);
        Ok(())
    }

    /// Resets all criteria to the catalog's default bounds.
    pub fn reset_filters(&self) {
        {
            let mut state = self.lock_state();
            let bounds = state.default_bounds;
            state.criteria = FilterCriteria::with_bounds(bounds);
        }
        self.schedule_recompute();
    }

    /// Copy-on-write criteria update followed by a debounced recompute.
    fn update_criteria<F>(&self, mutate: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        {
            let mut state = self.lock_state();
            let mut next = state.criteria.clone();
            mutate(&mut next);
            state.criteria = next;
        }
        self.schedule_recompute();
    }

    // -------------------------------------------------------------------------
    // Recompute
    // -------------------------------------------------------------------------

    fn schedule_recompute(&self) {
        let state = Arc::clone(&self.state);
        let subscribers = Arc::clone(&self.subscribers);
        let policy = self.policy;
        let clock = Arc::clone(&self.clock);

        self.debouncer.schedule(move || {
            let events = recompute(&state, policy, clock());
            notify(&subscribers, &events);
        });
    }

    /// Forces an immediate recompute, discarding any pending debounced
    /// one. The synchronous entry point for tests and initial load.
    pub fn apply_now(&self) {
        self.debouncer.cancel();
        let events = recompute(&self.state, self.policy, (self.clock)());
        notify(&self.subscribers, &events);
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Requests a page. Out-of-range requests clamp to the nearest valid
    /// page; a notification fires only if the page actually changed.
    pub fn set_page(&self, page: usize) {
        let changed = {
            let mut state = self.lock_state();
            let target = paginate(state.filtered.as_slice(), page, self.config.page_size).current_page;
            if target != state.current_page {
                state.current_page = target;
                Some(target)
            } else {
                None
            }
        };

        if let Some(page) = changed {
            notify(&self.subscribers, &[CatalogEvent::PageChanged { page }]);
        }
    }

    /// The current page as an owned snapshot.
    pub fn page(&self) -> PageSnapshot {
        let state = self.lock_state();
        let view = paginate(
            state.filtered.as_slice(),
            state.current_page,
            self.config.page_size,
        );
        PageSnapshot {
            items: view.items.to_vec(),
            page_count: view.page_count,
            current_page: view.current_page,
            total_items: view.total_items,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The current criteria (a copy; mutate through the store methods).
    pub fn criteria(&self) -> FilterCriteria {
        self.lock_state().criteria.clone()
    }

    /// Size of the current filtered set.
    pub fn filtered_total(&self) -> usize {
        self.lock_state().filtered.len()
    }

    /// Resolves the display price for a loaded variant, using the same
    /// clock the filter uses, so the card and the range predicate can
    /// never disagree about an instant.
    pub fn price_quote(&self, variant_id: &str) -> Option<PriceQuote> {
        let state = self.lock_state();
        let variant = state.variants.iter().find(|v| v.id == variant_id)?;
        Some(resolve_price(variant, (self.clock)()))
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a change observer. Callbacks run synchronously on the
    /// mutating thread, in registration order.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(CatalogEvent) + Send + 'static,
    {
        let id = SubscriptionId::new();
        self.lock_subscribers().push((id, Box::new(callback)));
        id
    }

    /// Releases a subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) -> EngineResult<()> {
        let mut subscribers = self.lock_subscribers();
        let initial_len = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);

        if subscribers.len() == initial_len {
            Err(EngineError::UnknownSubscription(id.uuid()))
        } else {
            Ok(())
        }
    }

    // -------------------------------------------------------------------------
    // Lock Helpers
    // -------------------------------------------------------------------------

    fn lock_state(&self) -> std::sync::MutexGuard<'_, CatalogState> {
        self.state.lock().expect("catalog state mutex poisoned")
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Subscriber)>> {
        self.subscribers
            .lock()
            .expect("subscriber list mutex poisoned")
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

// =============================================================================
// Free Functions (shared between store methods and the debounce task)
// =============================================================================

/// Recomputes the filtered set from current state and resets the page.
fn recompute(
    state: &Mutex<CatalogState>,
    policy: FilterPolicy,
    now: DateTime<Utc>,
) -> Vec<CatalogEvent> {
    let mut state = state.lock().expect("catalog state mutex poisoned");

    let filtered = apply_filters_with(state.variants.as_slice(), &state.criteria, &policy, now);
    debug!(total = filtered.len(), "filtered set recomputed");

    let mut events = vec![CatalogEvent::FilteredSetChanged {
        total: filtered.len(),
    }];
    state.filtered = Arc::new(filtered);

    // Any criteria change lands the shopper back on page 1
    if state.current_page != 1 {
        state.current_page = 1;
        events.push(CatalogEvent::PageChanged { page: 1 });
    }

    events
}

/// Delivers events to all subscribers, outside the state lock.
fn notify(subscribers: &Mutex<Vec<(SubscriptionId, Subscriber)>>, events: &[CatalogEvent]) {
    let subscribers = subscribers.lock().expect("subscriber list mutex poisoned");
    for event in events {
        for (_, callback) in subscribers.iter() {
            callback(*event);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::money::Money;
    use bazaar_core::types::{Coupon, CouponStatus, DiscountRule};
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn variant(id: &str, name: &str, price_cents: i64, category: Option<&str>) -> Variant {
        Variant {
            id: id.to_string(),
            name: name.to_string(),
            regular_price_cents: price_cents,
            category_id: category.map(str::to_string),
            subcategory_id: None,
            brand_id: None,
            stock_quantity: 10,
            promotion: None,
            reviews: vec![],
            images: vec![],
        }
    }

    fn catalog() -> Vec<Variant> {
        vec![
            variant("1", "Alpha", 10_000, Some("A")),
            variant("2", "Beta", 25_000, Some("B")),
            variant("3", "Gamma", 5_000, Some("A")),
        ]
    }

    fn init_logs() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    /// A store with debouncing disabled and a pinned clock; every
    /// mutation recomputes synchronously.
    fn immediate_store() -> CatalogStore {
        init_logs();
        let config = EngineConfig {
            debounce_window_ms: 0,
            ..EngineConfig::default()
        };
        CatalogStore::new(config).with_clock(fixed_now)
    }

    #[test]
    fn test_load_and_filter_scenario() {
        let store = immediate_store();
        store.load_variants(catalog());
        assert_eq!(store.filtered_total(), 3);

        store.toggle_category("A");
        assert_eq!(store.filtered_total(), 2);

        let page = store.page();
        let ids: Vec<&str> = page.items.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_empty_catalog() {
        let store = immediate_store();
        store.load_variants(vec![]);

        let page = store.page();
        assert_eq!(page.page_count, 0);
        assert!(page.items.is_empty());

        let criteria = store.criteria();
        assert_eq!(criteria.price_range.min, Money::zero());
        assert_eq!(criteria.price_range.max, Money::from_major(1000));
    }

    #[test]
    fn test_page_clamping() {
        let store = immediate_store();
        let many: Vec<Variant> = (0..45)
            .map(|i| variant(&format!("v{i}"), &format!("Item {i}"), 1_000, None))
            .collect();
        store.load_variants(many);

        store.set_page(3);
        assert_eq!(store.page().items.len(), 5);

        store.set_page(99);
        assert_eq!(store.page().current_page, 3);

        store.set_page(0);
        assert_eq!(store.page().current_page, 1);
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let store = immediate_store();
        let many: Vec<Variant> = (0..45)
            .map(|i| variant(&format!("v{i}"), &format!("Item {i}"), 1_000, Some("A")))
            .collect();
        store.load_variants(many);
        store.set_page(3);
        assert_eq!(store.page().current_page, 3);

        store.toggle_category("A");
        assert_eq!(store.page().current_page, 1);
    }

    #[test]
    fn test_reset_restores_default_bounds() {
        let store = immediate_store();
        store.load_variants(catalog());
        let defaults = store.criteria().price_range;

        store
            .set_price_range(PriceRange {
                min: Money::zero(),
                max: Money::from_cents(6_000),
            })
            .unwrap();
        store.toggle_category("A");
        assert_eq!(store.filtered_total(), 1); // Gamma only

        store.reset_filters();
        let criteria = store.criteria();
        assert_eq!(criteria.price_range, defaults);
        assert!(criteria.category_ids.is_empty());
        assert_eq!(store.filtered_total(), 3);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let store = immediate_store();
        store.load_variants(catalog());
        let err = store.set_price_range(PriceRange {
            min: Money::from_cents(100),
            max: Money::from_cents(50),
        });
        assert!(err.is_err());
        assert_eq!(store.filtered_total(), 3); // unchanged
    }

    #[test]
    fn test_seeded_load() {
        let store = immediate_store();
        let mut criteria = FilterCriteria::with_bounds(default_bounds(&catalog()));
        criteria.category_ids.push("B".to_string());

        store.load_variants_seeded(catalog(), criteria);
        assert_eq!(store.filtered_total(), 1);
        assert_eq!(store.page().items[0].id, "2");
    }

    #[test]
    fn test_subscriptions() {
        let store = immediate_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |event| {
            sink.lock().unwrap().push(event);
        });

        store.load_variants(catalog());
        store.toggle_category("A");

        {
            let events = seen.lock().unwrap();
            assert!(events
                .iter()
                .any(|e| matches!(e, CatalogEvent::FilteredSetChanged { total: 3 })));
            assert!(events
                .iter()
                .any(|e| matches!(e, CatalogEvent::FilteredSetChanged { total: 2 })));
        }

        store.unsubscribe(id).unwrap();
        let before = seen.lock().unwrap().len();
        store.toggle_category("A");
        assert_eq!(seen.lock().unwrap().len(), before);

        assert!(matches!(
            store.unsubscribe(id),
            Err(EngineError::UnknownSubscription(_))
        ));
    }

    #[test]
    fn test_price_quote_uses_injected_clock() {
        let store = immediate_store();
        let mut v = variant("1", "Alpha", 10_000, None);
        v.promotion = Some(Coupon {
            status: CouponStatus::Active,
            rule: DiscountRule::Percentage { bps: 2000 },
            starts_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap(),
        });
        store.load_variants(vec![v]);

        let quote = store.price_quote("1").unwrap();
        assert_eq!(quote.effective.cents(), 8_000);
        assert!(quote.has_discount);

        assert!(store.price_quote("missing").is_none());
    }

    #[test]
    fn test_effective_basis_config() {
        let config = EngineConfig {
            debounce_window_ms: 0,
            price_filter_basis: bazaar_core::filter::PriceBasis::Effective,
            ..EngineConfig::default()
        };
        let store = CatalogStore::new(config).with_clock(fixed_now);

        // $200 list, 75% off => $50 effective
        let mut v = variant("1", "Alpha", 20_000, None);
        v.promotion = Some(Coupon {
            status: CouponStatus::Active,
            rule: DiscountRule::Percentage { bps: 7500 },
            starts_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap(),
        });
        store.load_variants(vec![v]);

        store
            .set_price_range(PriceRange {
                min: Money::zero(),
                max: Money::from_major(100),
            })
            .unwrap();
        assert_eq!(store.filtered_total(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_burst_recomputes_once_with_final_criteria() {
        let config = EngineConfig::default(); // 300ms window
        let store = CatalogStore::new(config).with_clock(fixed_now);
        store.load_variants(catalog());

        let recomputes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&recomputes);
        store.subscribe(move |event| {
            if matches!(event, CatalogEvent::FilteredSetChanged { .. }) {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        // Three changes 50ms apart: A on, A off, B on. Each yield lets
        // the scheduled task register its timer before the clock moves.
        store.toggle_category("A");
        tokio::task::yield_now().await;
        tokio::time::advance(std::time::Duration::from_millis(50)).await;
        store.toggle_category("A");
        tokio::task::yield_now().await;
        tokio::time::advance(std::time::Duration::from_millis(50)).await;
        store.toggle_category("B");
        tokio::task::yield_now().await;

        // Inside the window: nothing recomputed yet
        tokio::time::advance(std::time::Duration::from_millis(250)).await;
        tokio::task::yield_now().await;
        assert_eq!(recomputes.load(Ordering::SeqCst), 0);
        assert_eq!(store.filtered_total(), 3); // stale set still served

        // 300ms after the LAST change: exactly one recompute, using the
        // final criteria (category B only)
        tokio::time::advance(std::time::Duration::from_millis(50)).await;
        tokio::task::yield_now().await;
        assert_eq!(recomputes.load(Ordering::SeqCst), 1);
        assert_eq!(store.filtered_total(), 1);
        assert_eq!(store.page().items[0].id, "2");

        // And nothing further
        tokio::time::advance(std::time::Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(recomputes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_now_discards_pending_debounce() {
        let store = CatalogStore::new(EngineConfig::default()).with_clock(fixed_now);
        store.load_variants(catalog());

        store.toggle_category("A");
        store.apply_now(); // force immediately
        assert_eq!(store.filtered_total(), 2);

        let recomputes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&recomputes);
        store.subscribe(move |event| {
            if matches!(event, CatalogEvent::FilteredSetChanged { .. }) {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        // The debounced run from toggle_category must not fire again
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(recomputes.load(Ordering::SeqCst), 0);
    }
}
