//! Diagnostic events emitted by holders.
//!
//! Holders do not log; they report lifecycle transitions to an optional
//! user-supplied hook, and the application decides what to do with them
//! (print, count, forward to its own logger).  Events fire only when the
//! slot changes — never on steady-state reads — so an installed hook does
//! not slow down the fast path.

use std::fmt;

/// A lifecycle transition observed on a holder.
///
/// Each event carries the payload's `type_name` so a single hook can serve
/// several holders.
#[derive(Debug)]
pub enum HolderEvent {
    /// An instance was constructed and stored.
    Created {
        /// Payload type that was constructed.
        type_name: &'static str,
    },
    /// The factory ran and reported failure; the slot stays empty.
    CreationFailed {
        /// Payload type whose construction failed.
        type_name: &'static str,
        /// The factory's error message.
        message: String,
    },
    /// The stored instance was explicitly torn down.
    Destroyed {
        /// Payload type that was dropped.
        type_name: &'static str,
    },
}

impl fmt::Display for HolderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolderEvent::Created { type_name } => {
                write!(f, "created {{ type_name: {type_name} }}")
            }
            HolderEvent::CreationFailed { type_name, message } => {
                write!(
                    f,
                    "creation_failed {{ type_name: {type_name}, message: {message} }}"
                )
            }
            HolderEvent::Destroyed { type_name } => {
                write!(f, "destroyed {{ type_name: {type_name} }}")
            }
        }
    }
}

/// Type alias for the user-supplied event hook.
///
/// The hook must be thread-safe: holders are shared across threads and a
/// transition can fire from any of them.
pub type EventHook = dyn Fn(&HolderEvent) + Send + Sync + 'static;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_created() {
        let ev = HolderEvent::Created { type_name: "Config" };
        assert_eq!(ev.to_string(), "created { type_name: Config }");
    }

    #[test]
    fn display_creation_failed() {
        let ev = HolderEvent::CreationFailed {
            type_name: "Config",
            message: "missing file".into(),
        };
        assert_eq!(
            ev.to_string(),
            "creation_failed { type_name: Config, message: missing file }"
        );
    }

    #[test]
    fn display_destroyed() {
        let ev = HolderEvent::Destroyed { type_name: "Config" };
        assert_eq!(ev.to_string(), "destroyed { type_name: Config }");
    }
}
