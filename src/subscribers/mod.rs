//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait, the ordered
//! [`SubscriberSet`] an event fans out through, and the built-in
//! [`Participant`] demo subscriber.
//!
//! ## Architecture
//! ```text
//! Change flow:
//!   Event::apply() ── snapshot ──► SubscriberSet::notify(&EventChange)
//!                                      │  (registration order, synchronous)
//!                                 ┌────┴─────┬──────────┐
//!                                 ▼          ▼          ▼
//!                             Participant  Custom     ...
//! ```
//!
//! ## Implementing custom subscribers
//! ```rust
//! use eventcast::{Subscribe, EventChange};
//!
//! struct RescheduleCounter;
//!
//! impl Subscribe for RescheduleCounter {
//!     fn on_change(&self, change: &EventChange) {
//!         if change.date_changed {
//!             // bump a counter, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &str { "reschedule-counter" }
//! }
//! ```

mod participant;
mod set;
mod subscriber;

pub use participant::Participant;
pub use set::SubscriberSet;
pub use subscriber::Subscribe;
