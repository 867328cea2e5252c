// ── Reactive filter store ──
//
// Option lists and the current selection live in one `watch` channel.
// Every write replaces the whole snapshot in a single `send_modify`, so
// a subscriber can never observe half of an update.

mod apply;

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{FilterOptions, FilterSnapshot, Selection};
use crate::stream::FilterStream;

/// Shared option lists plus the current selection.
///
/// Starts empty (every list empty, every selection the empty string).
/// Reads never block; writes are serialized by the channel.
pub struct FilterStore {
    state: watch::Sender<FilterSnapshot>,
}

impl FilterStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(FilterSnapshot::default());
        Self { state }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn snapshot(&self) -> FilterSnapshot {
        self.state.borrow().clone()
    }

    pub fn options(&self) -> Arc<FilterOptions> {
        Arc::clone(&self.state.borrow().options)
    }

    pub fn selection(&self) -> Selection {
        self.state.borrow().selection.clone()
    }

    pub fn version(&self) -> u64 {
        self.state.borrow().version
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe(&self) -> FilterStream {
        FilterStream::new(self.state.subscribe())
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Apply `f` and bump the version, as one notification.
    fn write(&self, f: impl FnOnce(&mut FilterSnapshot)) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.state.send_modify(|snap| {
            f(snap);
            snap.version += 1;
        });
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}
