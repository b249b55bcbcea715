//! Swipe-to-dismiss controller
//!
//! Tracks a drag in the closing direction of a panel (down for a bottom
//! drawer, right for a right-edge sheet) and decides on release whether the
//! panel dismisses or springs back open.
//!
//! The decision evaluates both checks every time:
//!
//! - **Distance**: closing displacement beyond the distance threshold
//!   (120px by default, or a fraction of the panel extent when
//!   `commit_threshold_ratio` is set)
//! - **Flick**: closing-direction release velocity beyond the velocity
//!   threshold (500px/s by default)
//!
//! Either one dismisses.
//!
//! Displacement against the closing direction is clamped to zero: the panel
//! cannot be dragged past fully open.
//!
//! A drag that grabs a panel mid-animation starts from where the panel is on
//! screen: the session's baseline offset is the closing offset at capture,
//! and finger displacement is added to it.

use serde::{Deserialize, Serialize};
use tactile_animation::{Target, TransitionStateMachine};
use tactile_core::{
    Axis, EngineError, GesturePhase, GestureSample, ListenerId, Listeners, Result, Side,
    ViolationPolicy,
};

use crate::velocity::VelocityTracker;

/// Sign of displacement that closes the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissDirection {
    /// Increasing coordinate (swipe down / right)
    #[default]
    Positive,
    /// Decreasing coordinate (swipe up / left)
    Negative,
}

impl DismissDirection {
    /// Project a signed value onto the closing direction
    pub fn closing(self, value: f32) -> f32 {
        match self {
            DismissDirection::Positive => value,
            DismissDirection::Negative => -value,
        }
    }
}

/// Thresholds for a dismiss controller
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismissConfig {
    /// Axis the panel slides along
    pub axis: Axis,
    /// Closing direction along `axis`
    pub direction: DismissDirection,
    /// Closing displacement (px) past which release dismisses
    pub distance_threshold: f32,
    /// Closing velocity (px/s) past which release dismisses
    pub velocity_threshold: f32,
    /// When set, replaces `distance_threshold` with this fraction of the panel extent
    pub commit_threshold_ratio: Option<f32>,
    /// Displacement (px) a drag must exceed before the panel captures it
    pub activation_slop: f32,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            direction: DismissDirection::Positive,
            distance_threshold: 120.0,
            velocity_threshold: 500.0,
            commit_threshold_ratio: None,
            activation_slop: 5.0,
        }
    }
}

impl DismissConfig {
    /// Config for a panel attached to `side` of the screen
    ///
    /// The panel closes by sliding back toward that edge.
    pub fn for_side(side: Side) -> Self {
        Self {
            axis: side.axis(),
            direction: if side.is_far_edge() {
                DismissDirection::Positive
            } else {
                DismissDirection::Negative
            },
            ..Self::default()
        }
    }

    pub fn with_distance_threshold(mut self, px: f32) -> Self {
        self.distance_threshold = px;
        self
    }

    pub fn with_velocity_threshold(mut self, px_per_sec: f32) -> Self {
        self.velocity_threshold = px_per_sec;
        self
    }

    /// Dismiss past a fraction of the panel extent instead of a fixed distance
    pub fn with_commit_ratio(mut self, ratio: f32) -> Self {
        self.commit_threshold_ratio = Some(ratio);
        self
    }

    pub fn with_activation_slop(mut self, px: f32) -> Self {
        self.activation_slop = px;
        self
    }

    /// Distance threshold for a panel of `extent` px
    pub fn distance_threshold_for(&self, extent: f32) -> f32 {
        match self.commit_threshold_ratio {
            Some(ratio) if ratio.is_finite() && extent.is_finite() && extent > 0.0 => {
                ratio * extent
            }
            _ => self.distance_threshold,
        }
    }
}

/// Result of a released swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissOutcome {
    /// Animate closed
    Dismiss,
    /// Animate back open
    SnapBack,
}

impl DismissOutcome {
    /// Transition target for this outcome
    pub fn target(self) -> Target {
        match self {
            DismissOutcome::Dismiss => Target::Closed,
            DismissOutcome::SnapBack => Target::Open,
        }
    }
}

/// One active swipe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DismissSession {
    pub axis: Axis,
    /// Closing offset the panel already had when the drag began
    pub baseline_offset: f32,
    /// Closing-direction displacement, never negative
    pub accumulated_offset: f32,
    /// Panel extent along `axis` at begin
    pub extent: f32,
    pub commit_threshold_ratio: Option<f32>,
    /// Release velocity, set on end
    pub velocity: Option<f32>,
    last_delta: f32,
}

/// Decides whether a released swipe dismisses a panel
pub struct SwipeDismissController {
    config: DismissConfig,
    policy: ViolationPolicy,
    /// Panel extent along the dismiss axis
    extent: f32,
    session: Option<DismissSession>,
    /// The most recently resolved session
    released: Option<DismissSession>,
    tracker: VelocityTracker,
    on_decision: Listeners<DismissOutcome>,
}

impl std::fmt::Debug for SwipeDismissController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeDismissController")
            .field("config", &self.config)
            .field("extent", &self.extent)
            .field("session", &self.session)
            .finish()
    }
}

impl Default for SwipeDismissController {
    fn default() -> Self {
        Self::new(DismissConfig::default())
    }
}

impl SwipeDismissController {
    pub fn new(config: DismissConfig) -> Self {
        Self {
            config,
            policy: ViolationPolicy::default(),
            extent: 0.0,
            session: None,
            released: None,
            tracker: VelocityTracker::new(),
            on_decision: Listeners::new(),
        }
    }

    /// Override the protocol-violation policy
    pub fn with_policy(mut self, policy: ViolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the panel extent used for progress and ratio thresholds
    pub fn with_extent(mut self, extent: f32) -> Self {
        self.set_extent(extent);
        self
    }

    pub fn config(&self) -> &DismissConfig {
        &self.config
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Record a layout measurement of the panel along the dismiss axis
    pub fn set_extent(&mut self, extent: f32) {
        self.extent = extent;
        if let Some(session) = self.session.as_mut() {
            session.extent = extent;
        }
    }

    pub fn session(&self) -> Option<&DismissSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The last resolved session, with its release velocity
    pub fn last_release(&self) -> Option<&DismissSession> {
        self.released.as_ref()
    }

    /// Register a callback fired with every decision
    pub fn on_decision<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&DismissOutcome) + 'static,
    {
        self.on_decision.subscribe(callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.on_decision.unsubscribe(id)
    }

    /// Whether a drag with displacement `delta` along the axis should be captured
    pub fn should_capture(&self, delta: f32) -> bool {
        delta.abs() > self.config.activation_slop
    }

    /// Start a swipe session on a fully open panel
    pub fn begin(&mut self) {
        self.begin_at(0.0);
    }

    /// Start a swipe session on a panel already `offset` px toward closed
    ///
    /// Non-finite or negative offsets start from fully open.
    pub fn begin_at(&mut self, offset: f32) {
        if let Some(session) = self.session {
            self.policy.report(EngineError::ProtocolViolation {
                controller: "SwipeDismissController",
                detail: "begin while a session is active",
            });
            self.resolve(session.last_delta, Some(0.0));
        }

        let baseline = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        self.tracker.reset();
        self.session = Some(DismissSession {
            baseline_offset: baseline,
            accumulated_offset: baseline,
            ..self.fresh_session()
        });
        tracing::trace!("swipe begin at offset {:.1}", baseline);
    }

    /// Closing offset of a panel shown at `progress`
    ///
    /// 0 before the panel has been measured.
    pub fn offset_at(&self, progress: f32) -> f32 {
        if !(self.extent.is_finite() && self.extent > 0.0) {
            tracing::trace!(
                "{}",
                EngineError::DegenerateMeasurement("swipe extent")
            );
            return 0.0;
        }
        (1.0 - progress.clamp(0.0, 1.0)) * self.extent
    }

    /// Apply cumulative displacement and return the closing offset
    pub fn move_by(&mut self, delta: f32) -> f32 {
        self.ensure_session("move without begin");
        self.update(delta)
    }

    /// Current closing offset (0 when idle)
    pub fn offset(&self) -> f32 {
        self.session.map(|s| s.accumulated_offset).unwrap_or(0.0)
    }

    /// Fraction of the panel still on screen, `1 - offset / extent`
    ///
    /// 1.0 when idle or before the panel has been measured.
    pub fn open_progress(&self) -> f32 {
        let Some(session) = self.session else {
            return 1.0;
        };
        if !(session.extent.is_finite() && session.extent > 0.0) {
            return 1.0;
        }
        (1.0 - session.accumulated_offset / session.extent).clamp(0.0, 1.0)
    }

    /// Release the swipe and decide
    ///
    /// `velocity` is the signed release velocity along the axis in px/s.
    /// `None` falls back to the estimate from timestamped samples.
    pub fn end(&mut self, delta: f32, velocity: Option<f32>) -> DismissOutcome {
        self.ensure_session("end without begin");
        self.resolve(delta, velocity).0
    }

    /// Resolve the active session with its last displacement and no velocity
    pub fn cancel(&mut self) -> Option<DismissOutcome> {
        let last_delta = self.session?.last_delta;
        Some(self.resolve(last_delta, Some(0.0)).0)
    }

    /// Drag the panel: apply `delta` and hold `machine` at the matching progress
    pub fn move_with(&mut self, delta: f32, machine: &mut TransitionStateMachine) -> Result<f32> {
        let offset = self.move_by(delta);
        machine.scrub(self.open_progress())?;
        Ok(offset)
    }

    /// Release the panel: decide, then animate `machine` from the drag position
    pub fn end_with(
        &mut self,
        delta: f32,
        velocity: Option<f32>,
        machine: &mut TransitionStateMachine,
    ) -> Result<DismissOutcome> {
        self.ensure_session("end without begin");
        let (outcome, progress) = self.resolve(delta, velocity);
        machine.retarget_from(progress, outcome.target())?;
        Ok(outcome)
    }

    /// Route a normalized sample; returns the decision on End/Cancel
    pub fn handle(&mut self, sample: &GestureSample) -> Option<DismissOutcome> {
        if sample.phase == GesturePhase::Begin {
            self.begin();
            self.track(sample);
            return None;
        }
        let delta = self.track(sample);
        match sample.phase {
            GesturePhase::Begin => None,
            GesturePhase::Move => {
                self.move_by(delta);
                None
            }
            GesturePhase::End => Some(self.end(delta, sample.velocity_along(self.config.axis))),
            GesturePhase::Cancel => {
                self.ensure_session("cancel without begin");
                Some(self.resolve(delta, Some(0.0)).0)
            }
        }
    }

    /// Route a normalized sample and drive `machine` along with it
    ///
    /// Begin seeds the session from the machine's current progress, so a
    /// panel grabbed mid-animation stays where it is.
    pub fn handle_with(
        &mut self,
        sample: &GestureSample,
        machine: &mut TransitionStateMachine,
    ) -> Result<Option<DismissOutcome>> {
        if sample.phase == GesturePhase::Begin {
            self.begin_at(self.offset_at(machine.progress()));
            self.track(sample);
            return Ok(None);
        }
        let delta = self.track(sample);
        match sample.phase {
            GesturePhase::Begin => Ok(None),
            GesturePhase::Move => {
                self.move_with(delta, machine)?;
                Ok(None)
            }
            GesturePhase::End => self
                .end_with(delta, sample.velocity_along(self.config.axis), machine)
                .map(Some),
            GesturePhase::Cancel => self.end_with(delta, Some(0.0), machine).map(Some),
        }
    }

    /// Feed timestamped samples to the velocity estimate; returns the axis delta
    fn track(&mut self, sample: &GestureSample) -> f32 {
        let delta = sample.delta_along(self.config.axis);
        if let Some(ts) = sample.timestamp_ms {
            self.tracker.add(ts, delta);
        }
        delta
    }

    fn ensure_session(&mut self, detail: &'static str) {
        if self.session.is_none() {
            self.policy.report(EngineError::ProtocolViolation {
                controller: "SwipeDismissController",
                detail,
            });
            self.session = Some(self.fresh_session());
        }
    }

    fn fresh_session(&self) -> DismissSession {
        DismissSession {
            axis: self.config.axis,
            baseline_offset: 0.0,
            accumulated_offset: 0.0,
            extent: self.extent,
            commit_threshold_ratio: self.config.commit_threshold_ratio,
            velocity: None,
            last_delta: 0.0,
        }
    }

    fn update(&mut self, delta: f32) -> f32 {
        let direction = self.config.direction;
        let Some(session) = self.session.as_mut() else {
            return 0.0;
        };
        if delta.is_finite() {
            session.accumulated_offset =
                (session.baseline_offset + direction.closing(delta)).max(0.0);
            session.last_delta = delta;
        }
        session.accumulated_offset
    }

    /// Decide, close the session, and notify; returns the outcome and the
    /// open progress at release
    fn resolve(&mut self, delta: f32, velocity: Option<f32>) -> (DismissOutcome, f32) {
        self.update(delta);
        let progress = self.open_progress();
        let Some(mut session) = self.session.take() else {
            return (DismissOutcome::SnapBack, progress);
        };

        let velocity = velocity
            .filter(|v| v.is_finite())
            .unwrap_or_else(|| self.tracker.velocity());
        session.velocity = Some(velocity);

        let distance_threshold = self.config.distance_threshold_for(session.extent);
        let far_enough = session.accumulated_offset > distance_threshold;
        let fast_enough = self.config.direction.closing(velocity) > self.config.velocity_threshold;

        let outcome = if far_enough || fast_enough {
            DismissOutcome::Dismiss
        } else {
            DismissOutcome::SnapBack
        };
        tracing::debug!(
            "swipe released at offset {:.1} ({:.0}px/s): {:?}",
            session.accumulated_offset,
            velocity,
            outcome
        );

        self.released = Some(session);
        self.tracker.reset();
        self.on_decision.emit(&outcome);
        (outcome, progress)
    }
}
