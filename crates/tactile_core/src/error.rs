//! Engine error types
//!
//! Three families of failure exist:
//!
//! - **Protocol violations**: gesture calls out of order (`move` before
//!   `begin`, a second `begin` while a session is live). These are contract
//!   errors by the host and are routed through [`ViolationPolicy`].
//! - **Degenerate measurements**: zero or non-finite extents. These never
//!   surface to the host; controllers recover locally with a no-op.
//! - **Invalid targets**: the transition state machine was asked to move to
//!   something that is not a lifecycle state, or seeded outside `[0, 1]`.
//!   These are returned as `Err` immediately.

use thiserror::Error;

/// Errors raised by the interaction engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Gesture calls arrived out of order
    #[error("Gesture protocol violation in {controller}: {detail}")]
    ProtocolViolation {
        /// Controller that observed the violation
        controller: &'static str,
        /// What went wrong
        detail: &'static str,
    },

    /// A layout measurement had no usable extent
    ///
    /// Informational: controllers trace it and fall back instead of failing.
    #[error("Degenerate measurement: {0}")]
    DegenerateMeasurement(&'static str),

    /// The transition state machine was asked for an unknown target
    #[error("Invalid transition target: {0}")]
    InvalidTarget(String),

    /// A numeric input was outside its valid range
    #[error("Value out of range for {what}: {value}")]
    OutOfRange {
        /// Name of the rejected quantity
        what: &'static str,
        /// The rejected value
        value: f32,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// How gesture controllers react to protocol violations
///
/// Development builds default to [`ViolationPolicy::Panic`] so mis-sequenced
/// host code is caught immediately. Release builds default to
/// [`ViolationPolicy::Absorb`]: the violation is logged and the offending call
/// is treated as the start of a fresh session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViolationPolicy {
    /// Panic with the violation message
    Panic,
    /// Log at warn level and recover
    Absorb,
}

impl Default for ViolationPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::Absorb
        }
    }
}

impl ViolationPolicy {
    /// Report a violation according to this policy
    ///
    /// Returns normally only when the policy is [`ViolationPolicy::Absorb`].
    #[track_caller]
    pub fn report(self, error: EngineError) {
        match self {
            Self::Panic => panic!("{error}"),
            Self::Absorb => tracing::warn!("{error} (absorbed)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::ProtocolViolation {
            controller: "resize",
            detail: "move without begin",
        };
        assert_eq!(
            err.to_string(),
            "Gesture protocol violation in resize: move without begin"
        );

        let err = EngineError::OutOfRange {
            what: "progress",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "Value out of range for progress: 1.5");
    }

    #[test]
    fn test_absorb_returns() {
        ViolationPolicy::Absorb.report(EngineError::DegenerateMeasurement("container"));
    }

    #[test]
    #[should_panic(expected = "Invalid transition target: sideways")]
    fn test_panic_policy_panics() {
        ViolationPolicy::Panic.report(EngineError::InvalidTarget("sideways".into()));
    }
}
