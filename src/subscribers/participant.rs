//! # Simple printing subscriber for debugging and demos.
//!
//! [`Participant`] prints a human-readable line per notification to stdout.
//! This is primarily useful for development, demos, and examples.
//!
//! ## Output format
//! ```text
//! [ana] notified: event 'RustConf' was updated (date=2025-04-10, location=Hall 2)
//! ```

use crate::events::EventChange;

use super::Subscribe;

/// Named stdout subscriber.
///
/// Prints every change it receives. Not intended for production use;
/// implement a custom [`Subscribe`] for structured logging or metrics.
pub struct Participant {
    name: String,
}

impl Participant {
    /// Creates a participant with the given display name.
    ///
    /// The display name doubles as the identity key, so two participants
    /// with the same name cannot be subscribed to the same event.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Subscribe for Participant {
    fn on_change(&self, change: &EventChange) {
        println!(
            "[{}] notified: event '{}' was updated (date={}, location={})",
            self.name, change.name, change.date, change.location
        );
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_identity_key() {
        let p = Participant::new("ana");
        assert_eq!(p.name(), "ana");
    }
}
