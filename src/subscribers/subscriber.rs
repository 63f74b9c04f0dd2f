//! # Change subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for plugging custom change
//! handlers into an event.
//!
//! Each subscriber gets:
//! - **Synchronous delivery** (called inline from the updating thread)
//! - **Registration-order position** (notified in the order it subscribed)
//! - **A stable identity key** ([`Subscribe::name`]) used for membership
//!
//! ## Rules
//! - Handlers run one after another; a slow handler delays the ones after it.
//! - Panics are **not** caught: a panicking handler aborts the remainder of
//!   the current round and propagates to the caller of the update.
//! - Two subscribers must not share a `name()` key on the same event; the
//!   second `subscribe` is rejected with `EventError::DuplicateSubscriber`.
//!
//! ## Example
//! ```rust
//! use eventcast::{Subscribe, EventChange};
//!
//! struct Audit;
//!
//! impl Subscribe for Audit {
//!     fn on_change(&self, change: &EventChange) {
//!         if change.date_changed {
//!             // record the reschedule, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &str { "audit" }   // prefer short, descriptive keys
//! }
//! ```

use crate::events::EventChange;

/// Event change subscriber.
///
/// Implementations hold whatever state they need; the event stores them as
/// shared handles (`Arc<dyn Subscribe>`), so unsubscribing never destroys
/// the subscriber itself.
///
/// ### Implementation requirements
/// - Keep handlers quick; they run inline on the updating thread.
/// - Handle errors internally; a panic aborts the round for everyone after
///   you.
/// - Return the same `name()` for the lifetime of the subscription.
pub trait Subscribe {
    /// Processes a single change notification.
    ///
    /// Called synchronously, in registration order, once per notification
    /// round. The snapshot reflects the event's state after the update.
    fn on_change(&self, change: &EventChange);

    /// Returns the identity key for this subscriber.
    ///
    /// Membership (duplicate rejection, removal) is keyed on this value,
    /// not on pointer identity, so the key must be stable.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn Subscribe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribe").field("name", &self.name()).finish()
    }
}
