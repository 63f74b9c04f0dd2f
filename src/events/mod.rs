//! # The event subject and its notification payload.
//!
//! - [`Event`]: the mutable subject (name, date, location) that owns the
//!   subscriber list and triggers fan-out on update.
//! - [`EventUpdate`]: optional new field values for one update.
//! - [`EventChange`]: the immutable snapshot subscribers receive.

mod change;
mod event;

pub use change::EventChange;
pub use event::{Event, EventUpdate};
