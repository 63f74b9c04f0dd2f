//! # SubscriberSet: ordered fan-out over multiple subscribers
//!
//! [`SubscriberSet`] keeps subscribers in registration order and delivers
//! each [`EventChange`](crate::events::EventChange) to all of them with
//! direct synchronous calls.
//!
//! ## What it guarantees
//! - Insertion order is preserved; `notify` walks it front to back.
//! - No duplicate identity keys; `insert` rejects them.
//! - Removal is O(n) and keeps the relative order of the survivors.
//!
//! ## What it does **not** guarantee
//! - No isolation between handlers: a panic in one aborts the rest of the
//!   round and propagates.
//! - No delivery to subscribers added *during* a round (membership is
//!   `&mut`, notification is `&`, so the borrow checker rules that out
//!   anyway).
//!
//! ## Diagram
//! ```text
//!    notify(&EventChange)
//!        │          (same snapshot, in registration order)
//!        ├────────────────► sub1.on_change()
//!        ├────────────────► sub2.on_change()
//!        └────────────────► subN.on_change()
//! ```

use std::sync::Arc;

use crate::error::EventError;
use crate::events::EventChange;

use super::Subscribe;

/// Ordered, identity-keyed collection of subscribers.
///
/// The container itself enforces nothing; uniqueness is the contract of
/// [`SubscriberSet::insert`].
#[derive(Default)]
pub struct SubscriberSet {
    entries: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a subscriber at the end of the order.
    ///
    /// # Errors
    /// [`EventError::DuplicateSubscriber`] if a subscriber with the same
    /// `name()` key is already present; the set is left unchanged.
    pub fn insert(&mut self, sub: Arc<dyn Subscribe>) -> Result<(), EventError> {
        let key = sub.name();
        if self.position(key).is_some() {
            log::warn!("subscribe rejected: duplicate key '{key}'");
            return Err(EventError::DuplicateSubscriber {
                name: key.to_string(),
            });
        }
        log::debug!("subscribed '{key}' at position {}", self.entries.len());
        self.entries.push(sub);
        Ok(())
    }

    /// Removes the subscriber with the given key, preserving the relative
    /// order of the remaining entries, and returns its handle.
    ///
    /// # Errors
    /// [`EventError::UnknownSubscriber`] if no entry has that key.
    pub fn remove(&mut self, name: &str) -> Result<Arc<dyn Subscribe>, EventError> {
        match self.position(name) {
            Some(idx) => {
                log::debug!("unsubscribed '{name}' from position {idx}");
                Ok(self.entries.remove(idx))
            }
            None => {
                log::warn!("unsubscribe rejected: unknown key '{name}'");
                Err(EventError::UnknownSubscriber {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Delivers one change to every subscriber, in registration order.
    ///
    /// Handler panics are not caught; they abort the remainder of the round.
    /// An empty set is a valid no-op.
    pub fn notify(&self, change: &EventChange) {
        log::debug!(
            "fan-out seq={} to {} subscriber(s)",
            change.seq,
            self.entries.len()
        );
        for sub in &self.entries {
            sub.on_change(change);
        }
    }

    /// True if the key is currently registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Registration-order iterator over the subscriber handles.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Subscribe>> {
        self.entries.iter()
    }

    /// Registration-order list of identity keys.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|s| s.name().to_string()).collect()
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        key: String,
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn arc(key: &str, seen: &Rc<RefCell<Vec<String>>>) -> Arc<dyn Subscribe> {
            Arc::new(Self {
                key: key.to_string(),
                seen: Rc::clone(seen),
            })
        }
    }

    impl Subscribe for Recorder {
        fn on_change(&self, _change: &EventChange) {
            self.seen.borrow_mut().push(self.key.clone());
        }

        fn name(&self) -> &str {
            &self.key
        }
    }

    #[test]
    fn test_insert_preserves_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriberSet::new();
        set.insert(Recorder::arc("a", &seen)).unwrap();
        set.insert(Recorder::arc("b", &seen)).unwrap();
        set.insert(Recorder::arc("c", &seen)).unwrap();
        assert_eq!(set.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_insert_rejected_and_length_unchanged() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriberSet::new();
        set.insert(Recorder::arc("a", &seen)).unwrap();
        let err = set.insert(Recorder::arc("a", &seen)).unwrap_err();
        assert_eq!(err, EventError::DuplicateSubscriber { name: "a".into() });
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_unknown_reports_error() {
        let mut set = SubscriberSet::new();
        let err = set.remove("ghost").unwrap_err();
        assert_eq!(err, EventError::UnknownSubscriber { name: "ghost".into() });
    }

    #[test]
    fn test_remove_preserves_survivor_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriberSet::new();
        for key in ["a", "b", "c", "d"] {
            set.insert(Recorder::arc(key, &seen)).unwrap();
        }
        let removed = set.remove("b").unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(set.names(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_removed_handle_outlives_membership() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriberSet::new();
        set.insert(Recorder::arc("a", &seen)).unwrap();
        let handle = set.remove("a").unwrap();
        // The subscriber itself is still alive and callable.
        handle.on_change(&EventChange::new("e", "d", "l"));
        assert_eq!(*seen.borrow(), vec!["a"]);
    }

    #[test]
    fn test_notify_walks_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriberSet::new();
        set.insert(Recorder::arc("first", &seen)).unwrap();
        set.insert(Recorder::arc("second", &seen)).unwrap();
        set.notify(&EventChange::new("e", "d", "l"));
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_notify_empty_set_is_noop() {
        let set = SubscriberSet::new();
        set.notify(&EventChange::new("e", "d", "l"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_membership_matches_operation_history() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriberSet::new();
        set.insert(Recorder::arc("a", &seen)).unwrap();
        set.insert(Recorder::arc("b", &seen)).unwrap();
        assert!(set.insert(Recorder::arc("a", &seen)).is_err());
        set.remove("a").unwrap();
        assert!(set.remove("a").is_err());
        set.insert(Recorder::arc("c", &seen)).unwrap();
        assert_eq!(set.names(), vec!["b", "c"]);
        assert!(set.contains("b"));
        assert!(!set.contains("a"));
    }
}
