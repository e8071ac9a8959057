//! # Debouncer
//!
//! Trailing-edge debounce for filter-criteria changes.
//!
//! ## Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Trailing-Edge Debounce (cancel-and-reschedule, not throttle)          │
//! │                                                                         │
//! │  schedule ──┐                                                           │
//! │  schedule ──┼── each call supersedes the pending one                   │
//! │  schedule ──┘                                                           │
//! │      │                                                                  │
//! │      └──── window ────► the LAST closure runs, once                    │
//! │                                                                         │
//! │  t=0ms    schedule(A)          A armed for t=300                       │
//! │  t=50ms   schedule(B)          A superseded, B armed for t=350         │
//! │  t=100ms  schedule(C)          B superseded, C armed for t=400         │
//! │  t=400ms                       C runs. A and B never ran.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Supersession is a generation counter: each `schedule` bumps it and the
//! sleeping task re-checks on wake, so a stale task simply does nothing.
//! A zero window runs the closure inline with no task at all, which also
//! makes the engine usable without a runtime when debouncing is disabled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

// =============================================================================
// Debouncer
// =============================================================================

/// A cancellable trailing-edge debounce timer.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Creates a debouncer with the given window.
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The configured window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedules `f` to run one window from now, superseding any pending
    /// run. With a zero window, runs `f` inline instead.
    ///
    /// Non-zero windows spawn onto the current tokio runtime; callers
    /// mutating criteria with debouncing enabled must be inside one.
    pub fn schedule<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.window.is_zero() {
            f();
            return;
        }

        let armed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let window = self.window;

        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if generation.load(Ordering::SeqCst) == armed {
                f();
            } else {
                debug!(generation = armed, "debounced run superseded");
            }
        });
    }

    /// Cancels any pending run without scheduling a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
