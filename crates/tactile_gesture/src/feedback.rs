//! Haptic feedback output
//!
//! Controllers emit a discrete pulse when a gesture commits. Delivery is
//! best-effort: a sink that fails (no haptics engine, web host) is logged at
//! trace level and otherwise ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Strength of a feedback pulse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    #[default]
    Light,
    Medium,
    Heavy,
}

/// Failure reported by a feedback sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// The host has no feedback hardware or API
    #[error("Feedback unavailable")]
    Unavailable,

    /// The host API rejected the request
    #[error("Feedback failed: {0}")]
    Failed(String),
}

/// Receiver of feedback pulses
pub trait FeedbackSink {
    fn pulse(&mut self, kind: FeedbackKind) -> Result<(), FeedbackError>;
}

/// Sink that drops every pulse
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn pulse(&mut self, _kind: FeedbackKind) -> Result<(), FeedbackError> {
        Ok(())
    }
}

impl<F> FeedbackSink for F
where
    F: FnMut(FeedbackKind) -> Result<(), FeedbackError>,
{
    fn pulse(&mut self, kind: FeedbackKind) -> Result<(), FeedbackError> {
        self(kind)
    }
}

/// Fire a pulse, swallowing failures
pub(crate) fn deliver(sink: &mut dyn FeedbackSink, kind: FeedbackKind) {
    if let Err(err) = sink.pulse(kind) {
        tracing::trace!("feedback pulse dropped: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_delivery_is_swallowed() {
        let mut calls = 0;
        let mut sink = |_kind: FeedbackKind| -> Result<(), FeedbackError> {
            calls += 1;
            Err(FeedbackError::Unavailable)
        };
        deliver(&mut sink, FeedbackKind::Light);
        deliver(&mut sink, FeedbackKind::Heavy);
        assert_eq!(calls, 2);
    }
}
