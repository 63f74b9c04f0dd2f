//! # eventcast
//!
//! **Eventcast** is a small synchronous observer library for Rust.
//!
//! It models a mutable "calendar event" subject that broadcasts a change
//! notification to an ordered, duplicate-free list of subscribers every
//! time it is updated. The crate is the subject/observer core only; menus,
//! prompts, and any other front end are the caller's business.
//!
//! ## Architecture
//! ```text
//!    caller
//!      │ subscribe / unsubscribe (identity-keyed, order-preserving)
//!      │ apply(EventUpdate)      (update fields, then notify)
//!      ▼
//! ┌──────────────────────────────────────────────┐
//! │  Event (subject)                             │
//! │  - name / date / location (mutable fields)   │
//! │  - SubscriberSet (registration order)        │
//! └───────────────────┬──────────────────────────┘
//!                     │ EventChange (one snapshot per round:
//!                     │  seq, at, fields, changed flags)
//!          ┌──────────┼──────────┐
//!          ▼          ▼          ▼
//!      sub1.on    sub2.on    subN.on
//!      _change()  _change()  _change()
//! ```
//!
//! ## Delivery rules
//! - One round per update, **even when the update changes nothing**; the
//!   trigger is the call, not a field diff.
//! - Subscribers are invoked synchronously, in registration order, with the
//!   same post-update snapshot.
//! - Handler panics are not caught; they abort the rest of the round and
//!   propagate to the updating caller.
//!
//! ## Modules
//! | Concern            | What it is for                                  | Entry point        |
//! |--------------------|-------------------------------------------------|--------------------|
//! | **Subject**        | Mutable state plus broadcast on update.         | [`Event`]          |
//! | **Updates**        | Carry optional new field values.                | [`EventUpdate`]    |
//! | **Notifications**  | Immutable per-round snapshot.                   | [`EventChange`]    |
//! | **Subscribers**    | The observer capability and its container.      | [`Subscribe`], [`SubscriberSet`] |
//! | **Errors**         | Duplicate / unknown membership conditions.      | [`EventError`]     |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventcast::{Event, EventUpdate, Participant};
//!
//! fn main() -> Result<(), eventcast::EventError> {
//!     let mut event = Event::new("RustConf", "2025-04-10", "Hall 1");
//!
//!     event.subscribe(Arc::new(Participant::new("ana")))?;
//!     event.subscribe(Arc::new(Participant::new("bruno")))?;
//!
//!     // Both participants print a line, ana first.
//!     event.apply(EventUpdate::new().with_location("Hall 2"));
//!
//!     event.unsubscribe("ana")?;
//!     assert_eq!(event.subscriber_names(), vec!["bruno"]);
//!     Ok(())
//! }
//! ```

mod error;
mod events;
mod subscribers;

// ---- Public re-exports ----

pub use error::EventError;
pub use events::{Event, EventChange, EventUpdate};
pub use subscribers::{Participant, Subscribe, SubscriberSet};
