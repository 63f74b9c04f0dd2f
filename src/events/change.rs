//! # Change notification payload.
//!
//! [`EventChange`] is the immutable value handed to every subscriber during a
//! fan-out round: a snapshot of the event's fields at notify time, plus flags
//! for which fields the triggering update supplied.
//!
//! ## Ordering guarantees
//! Each change carries a globally unique sequence number (`seq`) that
//! increases monotonically across rounds, and a wall-clock timestamp (`at`)
//! for logs. Within one round, every subscriber sees the *same* `seq`.
//!
//! ## Example
//! ```rust
//! use eventcast::EventChange;
//!
//! let change = EventChange::new("RustConf", "2025-04-10", "Hall 1")
//!     .with_location_changed();
//!
//! assert_eq!(change.location, "Hall 1");
//! assert!(change.location_changed);
//! assert!(!change.date_changed);
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for notification ordering.
static CHANGE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Snapshot of an event delivered to subscribers.
///
/// - `seq`: monotonic global sequence, one per notification round
/// - `at`: wall-clock timestamp (for logs)
/// - field values are the event's state *after* the update was applied
#[derive(Clone, Debug)]
pub struct EventChange {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,

    /// Event name at notify time.
    pub name: String,
    /// Event date at notify time.
    pub date: String,
    /// Event location at notify time.
    pub location: String,

    /// True if the triggering update supplied a new date.
    pub date_changed: bool,
    /// True if the triggering update supplied a new location.
    pub location_changed: bool,
}

impl EventChange {
    /// Creates a snapshot with the current timestamp and next sequence number.
    ///
    /// Field-changed flags start out false; a round triggered by an update
    /// with no parameters (a valid, notification-producing call) keeps them
    /// that way.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            seq: CHANGE_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            name: name.into(),
            date: date.into(),
            location: location.into(),
            date_changed: false,
            location_changed: false,
        }
    }

    /// Marks that the triggering update supplied a new date.
    #[inline]
    #[must_use]
    pub fn with_date_changed(mut self) -> Self {
        self.date_changed = true;
        self
    }

    /// Marks that the triggering update supplied a new location.
    #[inline]
    #[must_use]
    pub fn with_location_changed(mut self) -> Self {
        self.location_changed = true;
        self
    }

    /// True if at least one field was supplied by the triggering update.
    #[inline]
    pub fn is_field_change(&self) -> bool {
        self.date_changed || self.location_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = EventChange::new("e", "d", "l");
        let b = EventChange::new("e", "d", "l");
        assert!(b.seq > a.seq, "seq must grow: {} then {}", a.seq, b.seq);
    }

    #[test]
    fn test_flags_default_to_unchanged() {
        let change = EventChange::new("e", "d", "l");
        assert!(!change.date_changed);
        assert!(!change.location_changed);
        assert!(!change.is_field_change());
    }

    #[test]
    fn test_builder_flags() {
        let change = EventChange::new("e", "d", "l")
            .with_date_changed()
            .with_location_changed();
        assert!(change.date_changed);
        assert!(change.location_changed);
        assert!(change.is_field_change());
    }
}
