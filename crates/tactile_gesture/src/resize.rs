//! Drag-to-resize split controller
//!
//! Converts a drag along one axis into the size of the first of two panels,
//! expressed as a percentage of the container (the "ratio").
//!
//! # Algorithm
//!
//! Every sample is evaluated against the ratio the session *started* at:
//!
//! ```text
//! ratio = clamp(start_ratio + delta / container_extent * 100, min_ratio, max_ratio)
//! ```
//!
//! Because `delta` is the cumulative displacement since the gesture began,
//! the result depends only on total displacement, never on how many samples
//! the host delivered along the way.
//!
//! # Example
//!
//! ```
//! use tactile_core::Axis;
//! use tactile_gesture::GestureResizeController;
//!
//! let mut resize = GestureResizeController::new(Axis::Horizontal, 50.0);
//! resize.begin(400.0, 50.0);
//! assert_eq!(resize.move_by(80.0), 70.0);
//! assert_eq!(resize.end(200.0), 90.0); // clamped
//! assert_eq!(resize.ratio(), 90.0);
//! ```

use serde::{Deserialize, Serialize};
use tactile_core::{
    Axis, EngineError, GesturePhase, GestureSample, ListenerId, Listeners, ViolationPolicy,
};

use crate::feedback::{deliver, FeedbackKind, FeedbackSink, NoFeedback};

/// Limits and feedback for a resize controller
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Smallest allowed first-panel ratio (percent)
    pub min_ratio: f32,
    /// Largest allowed first-panel ratio (percent)
    pub max_ratio: f32,
    /// Pulse fired when a resize commits (None disables feedback)
    pub commit_feedback: Option<FeedbackKind>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_ratio: 10.0,
            max_ratio: 90.0,
            commit_feedback: Some(FeedbackKind::Light),
        }
    }
}

impl ResizeConfig {
    /// Set the allowed ratio range
    pub fn with_limits(mut self, min_ratio: f32, max_ratio: f32) -> Self {
        self.min_ratio = min_ratio.min(max_ratio);
        self.max_ratio = max_ratio.max(min_ratio);
        self
    }

    /// Clamp without panicking on an inverted range
    fn clamp(&self, ratio: f32) -> f32 {
        ratio.max(self.min_ratio).min(self.max_ratio)
    }
}

/// One active drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    pub axis: Axis,
    pub container_extent: f32,
    pub start_ratio: f32,
    pub current_ratio: f32,
    last_delta: f32,
}

/// Converts drag displacement into a clamped split ratio
pub struct GestureResizeController {
    config: ResizeConfig,
    axis: Axis,
    policy: ViolationPolicy,
    /// Ratio committed by the last completed session
    baseline: f32,
    /// Latest container measurement along `axis`
    container_extent: f32,
    session: Option<ResizeSession>,
    feedback: Box<dyn FeedbackSink>,
    on_commit: Listeners<f32>,
}

impl std::fmt::Debug for GestureResizeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureResizeController")
            .field("axis", &self.axis)
            .field("baseline", &self.baseline)
            .field("container_extent", &self.container_extent)
            .field("session", &self.session)
            .finish()
    }
}

impl GestureResizeController {
    /// Create a controller with default limits
    pub fn new(axis: Axis, initial_ratio: f32) -> Self {
        Self::with_config(axis, initial_ratio, ResizeConfig::default())
    }

    pub fn with_config(axis: Axis, initial_ratio: f32, config: ResizeConfig) -> Self {
        let baseline = if initial_ratio.is_finite() {
            config.clamp(initial_ratio)
        } else {
            config.clamp(50.0)
        };
        Self {
            config,
            axis,
            policy: ViolationPolicy::default(),
            baseline,
            container_extent: 0.0,
            session: None,
            feedback: Box::new(NoFeedback),
            on_commit: Listeners::new(),
        }
    }

    /// Route commit pulses to a feedback sink
    pub fn with_feedback(mut self, sink: impl FeedbackSink + 'static) -> Self {
        self.feedback = Box::new(sink);
        self
    }

    /// Override the protocol-violation policy
    pub fn with_policy(mut self, policy: ViolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Current ratio: the live session value, or the committed baseline
    pub fn ratio(&self) -> f32 {
        self.session
            .map(|s| s.current_ratio)
            .unwrap_or(self.baseline)
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Register a callback fired with the ratio each time a session commits
    pub fn on_commit<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&f32) + 'static,
    {
        self.on_commit.subscribe(callback)
    }

    /// Record a layout measurement of the container along this axis
    ///
    /// An active session that started without a usable measurement adopts it.
    pub fn set_container_extent(&mut self, extent: f32) {
        self.container_extent = extent;
        if let Some(session) = self.session.as_mut() {
            if !is_usable(session.container_extent) && is_usable(extent) {
                session.container_extent = extent;
            }
        }
    }

    /// Start a drag session
    pub fn begin(&mut self, container_extent: f32, initial_ratio: f32) {
        if let Some(session) = self.session {
            self.policy.report(EngineError::ProtocolViolation {
                controller: "GestureResizeController",
                detail: "begin while a session is active",
            });
            // Resolve the orphaned session before starting over
            self.finish(session.last_delta);
        }

        if is_usable(container_extent) {
            self.container_extent = container_extent;
        }
        let start_ratio = if initial_ratio.is_finite() {
            self.config.clamp(initial_ratio)
        } else {
            self.baseline
        };
        self.session = Some(ResizeSession {
            axis: self.axis,
            container_extent,
            start_ratio,
            current_ratio: start_ratio,
            last_delta: 0.0,
        });
        tracing::trace!(
            "resize begin: extent {container_extent}, ratio {start_ratio:.2}"
        );
    }

    /// Start a drag session from the committed ratio and last measured extent
    pub fn begin_at_baseline(&mut self) {
        self.begin(self.container_extent, self.baseline);
    }

    /// Apply cumulative displacement `delta` and return the live ratio
    pub fn move_by(&mut self, delta: f32) -> f32 {
        if self.session.is_none() {
            self.policy.report(EngineError::ProtocolViolation {
                controller: "GestureResizeController",
                detail: "move without begin",
            });
            self.begin_at_baseline();
        }
        self.update(delta)
    }

    /// Apply the final displacement, commit it as the new baseline, and pulse feedback
    pub fn end(&mut self, delta: f32) -> f32 {
        if self.session.is_none() {
            self.policy.report(EngineError::ProtocolViolation {
                controller: "GestureResizeController",
                detail: "end without begin",
            });
            self.begin_at_baseline();
        }
        self.finish(delta)
    }

    /// Resolve the active session with its last known displacement
    pub fn cancel(&mut self) -> Option<f32> {
        let last_delta = self.session?.last_delta;
        Some(self.finish(last_delta))
    }

    /// Route a normalized gesture sample; returns the ratio it produced
    pub fn handle(&mut self, sample: &GestureSample) -> Option<f32> {
        let delta = sample.delta_along(self.axis);
        match sample.phase {
            GesturePhase::Begin => {
                self.begin_at_baseline();
                Some(self.ratio())
            }
            GesturePhase::Move => Some(self.move_by(delta)),
            GesturePhase::End | GesturePhase::Cancel => Some(self.end(delta)),
        }
    }

    fn update(&mut self, delta: f32) -> f32 {
        let config = self.config;
        let Some(session) = self.session.as_mut() else {
            return self.baseline;
        };
        if !is_usable(session.container_extent) {
            // No measurement yet: hold the ratio
            tracing::trace!("{}", EngineError::DegenerateMeasurement("resize container"));
            return session.current_ratio;
        }
        let candidate = session.start_ratio + delta / session.container_extent * 100.0;
        if candidate.is_finite() {
            session.current_ratio = config.clamp(candidate);
            session.last_delta = delta;
        }
        session.current_ratio
    }

    fn finish(&mut self, delta: f32) -> f32 {
        let ratio = self.update(delta);
        self.session = None;
        self.baseline = ratio;

        tracing::debug!("resize committed at {ratio:.2}%");
        if let Some(kind) = self.config.commit_feedback {
            deliver(self.feedback.as_mut(), kind);
        }
        self.on_commit.emit(&ratio);
        ratio
    }
}

fn is_usable(extent: f32) -> bool {
    extent.is_finite() && extent > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackError;
    use std::cell::Cell;
    use std::rc::Rc;

    fn controller() -> GestureResizeController {
        GestureResizeController::new(Axis::Horizontal, 50.0).with_policy(ViolationPolicy::Absorb)
    }

    #[test]
    fn test_drag_and_clamp() {
        let mut resize = controller();
        resize.begin(400.0, 50.0);
        assert_eq!(resize.move_by(80.0), 70.0);
        assert_eq!(resize.move_by(200.0), 90.0);
        assert_eq!(resize.move_by(-400.0), 10.0);
        assert_eq!(resize.end(-40.0), 40.0);
        assert_eq!(resize.ratio(), 40.0);
        assert!(!resize.is_active());
    }

    #[test]
    fn test_always_within_limits() {
        let mut resize = controller();
        resize.begin(321.0, 50.0);
        let mut delta = -2000.0;
        while delta <= 2000.0 {
            let ratio = resize.move_by(delta);
            assert!((10.0..=90.0).contains(&ratio), "delta {delta} gave {ratio}");
            delta += 37.5;
        }
    }

    #[test]
    fn test_idempotent_in_total_displacement() {
        let mut fine = controller();
        fine.begin(400.0, 50.0);
        let mut cumulative = 0.0;
        for _ in 0..40 {
            cumulative += 1.5;
            fine.move_by(cumulative);
        }

        let mut coarse = controller();
        coarse.begin(400.0, 50.0);
        coarse.move_by(60.0);

        assert_eq!(fine.ratio(), coarse.ratio());
        assert_eq!(coarse.ratio(), 65.0);
    }

    #[test]
    fn test_zero_extent_is_noop() {
        let mut resize = controller();
        resize.begin(0.0, 50.0);
        assert_eq!(resize.move_by(120.0), 50.0);

        // A layout pass arrives mid-drag
        resize.set_container_extent(400.0);
        assert_eq!(resize.move_by(40.0), 60.0);
    }

    #[test]
    fn test_end_commits_baseline_and_pulses_once() {
        let pulses = Rc::new(Cell::new(0));
        let counter = pulses.clone();
        let mut resize = controller().with_feedback(move |_kind: FeedbackKind| -> Result<(), FeedbackError> {
            counter.set(counter.get() + 1);
            Ok(())
        });

        resize.set_container_extent(200.0);
        resize.begin_at_baseline();
        resize.move_by(20.0);
        resize.move_by(30.0);
        assert_eq!(pulses.get(), 0);
        assert_eq!(resize.end(20.0), 60.0);
        assert_eq!(pulses.get(), 1);

        // Next session starts from the committed ratio
        resize.begin_at_baseline();
        assert_eq!(resize.move_by(-20.0), 50.0);
    }

    #[test]
    fn test_feedback_failure_ignored() {
        let mut resize = controller().with_feedback(|_kind: FeedbackKind| -> Result<(), FeedbackError> {
            Err(FeedbackError::Failed("no motor".into()))
        });
        resize.begin(100.0, 50.0);
        assert_eq!(resize.end(10.0), 60.0);
    }

    #[test]
    fn test_cancel_resolves_with_last_delta() {
        let mut resize = controller();
        resize.begin(400.0, 50.0);
        resize.move_by(40.0);
        assert_eq!(resize.cancel(), Some(60.0));
        assert_eq!(resize.ratio(), 60.0);
        assert_eq!(resize.cancel(), None);
    }

    #[test]
    fn test_move_without_begin_absorbed() {
        let mut resize = controller();
        resize.set_container_extent(400.0);
        assert_eq!(resize.move_by(40.0), 60.0);
        assert!(resize.is_active());
    }

    #[test]
    fn test_double_begin_resolves_previous() {
        let commits = Rc::new(Cell::new(0));
        let counter = commits.clone();
        let mut resize = controller();
        resize.on_commit(move |_| counter.set(counter.get() + 1));

        resize.begin(400.0, 50.0);
        resize.move_by(40.0);
        resize.begin(400.0, 20.0);
        assert_eq!(commits.get(), 1);
        assert_eq!(resize.ratio(), 20.0);
    }

    #[test]
    #[should_panic(expected = "move without begin")]
    fn test_move_without_begin_panics_in_strict_mode() {
        let mut resize =
            GestureResizeController::new(Axis::Vertical, 50.0).with_policy(ViolationPolicy::Panic);
        resize.move_by(10.0);
    }

    #[test]
    fn test_handle_samples() {
        let mut resize = GestureResizeController::new(Axis::Vertical, 30.0)
            .with_policy(ViolationPolicy::Absorb);
        resize.set_container_extent(500.0);

        resize.handle(&GestureSample::begin());
        assert_eq!(resize.handle(&GestureSample::moved(999.0, 50.0)), Some(40.0));
        assert_eq!(resize.handle(&GestureSample::end(0.0, 100.0)), Some(50.0));
        assert_eq!(resize.ratio(), 50.0);
    }

    #[test]
    fn test_custom_limits() {
        let config = ResizeConfig::default().with_limits(80.0, 20.0);
        assert_eq!(config.min_ratio, 20.0);
        assert_eq!(config.max_ratio, 80.0);

        let mut resize = GestureResizeController::with_config(Axis::Horizontal, 5.0, config);
        assert_eq!(resize.ratio(), 20.0);
        resize.begin(100.0, 50.0);
        assert_eq!(resize.move_by(100.0), 80.0);
    }
}
