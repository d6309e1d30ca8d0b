//! Generation tokens that discard stale refresh results.
//!
//! Each refresh takes a [`RefreshTicket`] from a caller-owned
//! [`RefreshTracker`] before fetching. When the response arrives it is only
//! applied if no newer refresh has started in the meantime, so a slow old
//! response can never overwrite a newer display.
//!
//! # Examples
//! ```
//! use parkside_core::RefreshTracker;
//!
//! let tracker = RefreshTracker::new();
//! let first = tracker.begin();
//! let second = tracker.begin();
//!
//! assert_eq!(tracker.accept(first, "old"), None);
//! assert_eq!(tracker.accept(second, "new"), Some("new"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;

/// Identifies one refresh; later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    /// The generation number of this ticket.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Issues refresh tickets and remembers the newest one.
///
/// The tracker is `Sync`, so it can be shared between the task starting
/// refreshes and the tasks completing them.
#[derive(Debug, Default)]
pub struct RefreshTracker {
    latest: AtomicU64,
}

impl RefreshTracker {
    /// Create a tracker that has issued no tickets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Start a refresh, superseding every earlier ticket.
    pub fn begin(&self) -> RefreshTicket {
        let previous = self.latest.fetch_add(1, Ordering::AcqRel);
        RefreshTicket(previous.wrapping_add(1))
    }

    /// Report whether `ticket` belongs to the newest refresh.
    #[must_use]
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Pass `value` through only when `ticket` is still current.
    ///
    /// Stale results are dropped and logged.
    pub fn accept<T>(&self, ticket: RefreshTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            warn!(
                "discarding stale refresh result from generation {}",
                ticket.0
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    fn newest_ticket_is_current() {
        let tracker = RefreshTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[rstest]
    fn out_of_order_completion_keeps_newest() {
        let tracker = RefreshTracker::new();
        let slow = tracker.begin();
        let fast = tracker.begin();

        let mut displayed = None;
        if let Some(value) = tracker.accept(fast, 2) {
            displayed = Some(value);
        }
        if let Some(value) = tracker.accept(slow, 1) {
            displayed = Some(value);
        }

        assert_eq!(displayed, Some(2));
    }

    #[rstest]
    fn tickets_are_unique_across_threads() {
        let tracker = Arc::new(RefreshTracker::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&tracker);
                std::thread::spawn(move || (0..100).map(|_| shared.begin()).collect::<Vec<_>>())
            })
            .collect();

        let mut generations: Vec<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("thread completes"))
            .map(RefreshTicket::generation)
            .collect();
        generations.sort_unstable();
        generations.dedup();

        assert_eq!(generations.len(), 400);
        assert_eq!(generations.last().copied(), Some(400));
    }
}
