//! Error types reported by subscriber membership operations.
//!
//! This module defines a single error enum:
//!
//! - [`EventError`] — recoverable conditions raised when subscribing or
//!   unsubscribing an identity that is, respectively, already present or
//!   absent.
//!
//! The type provides helper methods (`as_label`, `as_message`) for logging.
//! Failures inside a subscriber's `on_change` handler are *not* represented
//! here: the fan-out does not catch panics, they propagate to whoever
//! triggered the notification round.

use thiserror::Error;

/// # Errors produced by subscriber membership operations.
///
/// Both variants are ordinary reported conditions: the event and its
/// subscriber list stay valid and usable after either one.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// A subscriber with this identity key is already registered.
    #[error("subscriber '{name}' is already subscribed")]
    DuplicateSubscriber {
        /// Identity key of the rejected subscriber.
        name: String,
    },

    /// No subscriber with this identity key is registered.
    #[error("subscriber '{name}' is not subscribed")]
    UnknownSubscriber {
        /// Identity key that was not found.
        name: String,
    },
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use eventcast::EventError;
    ///
    /// let err = EventError::DuplicateSubscriber { name: "ana".into() };
    /// assert_eq!(err.as_label(), "duplicate_subscriber");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::DuplicateSubscriber { .. } => "duplicate_subscriber",
            EventError::UnknownSubscriber { .. } => "unknown_subscriber",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventError::DuplicateSubscriber { name } => {
                format!("already subscribed: {name}")
            }
            EventError::UnknownSubscriber { name } => {
                format!("not subscribed: {name}")
            }
        }
    }

    /// Returns the identity key the failed operation referred to.
    ///
    /// # Example
    /// ```
    /// use eventcast::EventError;
    ///
    /// let err = EventError::UnknownSubscriber { name: "bruno".into() };
    /// assert_eq!(err.subscriber(), "bruno");
    /// ```
    pub fn subscriber(&self) -> &str {
        match self {
            EventError::DuplicateSubscriber { name } => name,
            EventError::UnknownSubscriber { name } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let dup = EventError::DuplicateSubscriber { name: "a".into() };
        let unk = EventError::UnknownSubscriber { name: "b".into() };
        assert_eq!(dup.as_label(), "duplicate_subscriber");
        assert_eq!(unk.as_label(), "unknown_subscriber");
    }

    #[test]
    fn test_display_includes_subscriber_name() {
        let err = EventError::DuplicateSubscriber { name: "ana".into() };
        assert_eq!(err.to_string(), "subscriber 'ana' is already subscribed");
        assert_eq!(err.as_message(), "already subscribed: ana");
    }
}
