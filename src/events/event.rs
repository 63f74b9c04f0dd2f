//! # The event subject.
//!
//! [`Event`] owns the mutable state (name, date, location) and the
//! [`SubscriberSet`] it broadcasts through. [`EventUpdate`] carries the
//! optional new field values for one update.
//!
//! ## Rules
//! - [`Event::apply`] always runs exactly one notification round, even when
//!   the update carries no fields. Callers that want change-only
//!   notification must check [`EventUpdate::is_empty`] themselves.
//! - Subscribers see the state *after* the update, as one shared snapshot.
//! - Membership errors (duplicate key, unknown key) are reported, never
//!   fatal.

use std::sync::Arc;

use crate::error::EventError;
use crate::subscribers::{Subscribe, SubscriberSet};

use super::EventChange;

/// Optional new field values for one update.
///
/// An empty update is valid and still triggers a notification round.
///
/// # Example
/// ```
/// use eventcast::EventUpdate;
///
/// let update = EventUpdate::new().with_location("Hall 2");
/// assert_eq!(update.location(), Some("Hall 2"));
/// assert_eq!(update.date(), None);
/// assert!(!update.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventUpdate {
    date: Option<String>,
    location: Option<String>,
}

impl EventUpdate {
    /// Creates an update that changes nothing (but still notifies).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets a new location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The new date, if this update carries one.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// The new location, if this update carries one.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// True if the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.location.is_none()
    }
}

/// Calendar-style event: mutable fields plus an ordered subscriber list.
///
/// The event references its subscribers through shared handles; removing a
/// subscriber from the event does not destroy it.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use eventcast::{Event, EventUpdate, Participant};
///
/// let mut event = Event::new("RustConf", "2025-04-10", "Hall 1");
/// event.subscribe(Arc::new(Participant::new("ana")))?;
/// event.apply(EventUpdate::new().with_location("Hall 2"));
/// assert_eq!(event.location(), "Hall 2");
/// # Ok::<(), eventcast::EventError>(())
/// ```
pub struct Event {
    name: String,
    date: String,
    location: String,
    subscribers: SubscriberSet,
}

impl Event {
    /// Creates an event with its initial name, date, and location and no
    /// subscribers.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            location: location.into(),
            subscribers: SubscriberSet::new(),
        }
    }

    /// Registers a subscriber at the end of the notification order.
    ///
    /// # Errors
    /// [`EventError::DuplicateSubscriber`] if its `name()` key is already
    /// registered; the list is left unchanged.
    pub fn subscribe(&mut self, sub: Arc<dyn Subscribe>) -> Result<(), EventError> {
        self.subscribers.insert(sub)
    }

    /// Removes the subscriber with the given key and returns its handle.
    ///
    /// # Errors
    /// [`EventError::UnknownSubscriber`] if the key is not registered.
    pub fn unsubscribe(&mut self, name: &str) -> Result<Arc<dyn Subscribe>, EventError> {
        self.subscribers.remove(name)
    }

    /// Applies an update and runs one notification round.
    ///
    /// Fields the update carries overwrite the event's; the round happens
    /// unconditionally, even for an empty update.
    pub fn apply(&mut self, update: EventUpdate) {
        let EventUpdate { date, location } = update;
        let date_changed = date.is_some();
        let location_changed = location.is_some();

        if let Some(date) = date {
            self.date = date;
        }
        if let Some(location) = location {
            self.location = location;
        }

        log::debug!(
            "event '{}' updated (date_changed={date_changed}, location_changed={location_changed})",
            self.name
        );

        let mut change = EventChange::new(&self.name, &self.date, &self.location);
        if date_changed {
            change = change.with_date_changed();
        }
        if location_changed {
            change = change.with_location_changed();
        }
        self.subscribers.notify(&change);
    }

    /// Runs one notification round with the current state.
    ///
    /// The snapshot's changed-field flags are false; use [`Event::apply`]
    /// when a field update should be attributed.
    pub fn notify_all(&self) {
        self.subscribers
            .notify(&EventChange::new(&self.name, &self.date, &self.location));
    }

    /// Registration-order iterator over the subscriber handles.
    pub fn subscribers(&self) -> impl Iterator<Item = &Arc<dyn Subscribe>> {
        self.subscribers.iter()
    }

    /// Registration-order list of subscriber identity keys.
    #[must_use]
    pub fn subscriber_names(&self) -> Vec<String> {
        self.subscribers.names()
    }

    /// Number of current subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current date.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Current location.
    pub fn location(&self) -> &str {
        &self.location
    }
}
