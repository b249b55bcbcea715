//! Open/close transition state machine
//!
//! Every animated widget owns one [`TransitionStateMachine`]. It tracks the
//! lifecycle state and a continuous `progress` value the renderer reads to
//! drive transforms and opacity:
//!
//! ```text
//!            set_target(Open)            tick .. 1.0
//!   Closed ──────────────────▶ Opening ──────────────▶ Open
//!     ▲                        │    ▲                    │
//!     │                        │    │ set_target(Open)   │ set_target(Closed)
//!     │       tick .. 0.0      ▼    │                    ▼
//!     └──────────────────── Closing ◀────────────────────┘
//! ```
//!
//! # Invariants
//!
//! - `progress` is always in `[0, 1]` and moves monotonically toward the
//!   current target endpoint (0 for Closed, 1 for Open).
//! - Re-targeting mid-flight restarts interpolation from the current
//!   progress; it never snaps.
//! - Each settle fires the `on_settled` listeners exactly once. A transition
//!   that is re-targeted before it settles fires nothing.
//!
//! # Example
//!
//! ```
//! use tactile_animation::{Target, TransitionConfig, TransitionState, TransitionStateMachine};
//!
//! let mut machine = TransitionStateMachine::new(TransitionConfig::uniform(200));
//! machine.set_target(Target::Open);
//! assert_eq!(machine.state(), TransitionState::Opening);
//!
//! machine.tick(100.0);
//! assert!(machine.progress() > 0.0 && machine.progress() < 1.0);
//!
//! machine.tick(100.0);
//! assert_eq!(machine.state(), TransitionState::Open);
//! assert_eq!(machine.progress(), 1.0);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tactile_core::{EngineError, ListenerId, Listeners, Result, StateTransitions};

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};

// =============================================================================
// Transition Event Types
// =============================================================================

/// Event codes understood by [`TransitionState`]
pub mod transition_events {
    /// Request the open state (Closed/Closing -> Opening)
    pub const OPEN: u32 = 30001;
    /// Request the closed state (Open/Opening -> Closing)
    pub const CLOSE: u32 = 30002;
    /// Interpolation reached its endpoint (Opening -> Open, Closing -> Closed)
    pub const ANIMATION_COMPLETE: u32 = 30003;
}

// =============================================================================
// TransitionState
// =============================================================================

/// Lifecycle state of an animated widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TransitionState {
    /// Not visible
    #[default]
    Closed,
    /// Animating toward open
    Opening,
    /// Fully visible and interactive
    Open,
    /// Animating toward closed
    Closing,
}

impl TransitionState {
    /// Whether the widget should be mounted/rendered
    pub fn is_visible(&self) -> bool {
        !matches!(self, TransitionState::Closed)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TransitionState::Open)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, TransitionState::Opening | TransitionState::Closing)
    }

    /// The endpoint this state is at or moving toward
    pub fn target(&self) -> Target {
        match self {
            TransitionState::Opening | TransitionState::Open => Target::Open,
            TransitionState::Closing | TransitionState::Closed => Target::Closed,
        }
    }
}

impl StateTransitions for TransitionState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use transition_events::*;
        use TransitionState::*;

        match (self, event) {
            (Closed, OPEN) | (Closing, OPEN) => Some(Opening),
            (Open, CLOSE) | (Opening, CLOSE) => Some(Closing),
            (Opening, ANIMATION_COMPLETE) => Some(Open),
            (Closing, ANIMATION_COMPLETE) => Some(Closed),
            _ => None,
        }
    }
}

// =============================================================================
// Target
// =============================================================================

/// Endpoint a transition moves toward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Open,
    Closed,
}

impl Target {
    /// Progress value at this endpoint
    pub fn endpoint(self) -> f32 {
        match self {
            Target::Open => 1.0,
            Target::Closed => 0.0,
        }
    }

    /// State once the endpoint is reached
    pub fn settled_state(self) -> TransitionState {
        match self {
            Target::Open => TransitionState::Open,
            Target::Closed => TransitionState::Closed,
        }
    }

    /// State while moving toward the endpoint
    pub fn in_flight_state(self) -> TransitionState {
        match self {
            Target::Open => TransitionState::Opening,
            Target::Closed => TransitionState::Closing,
        }
    }
}

impl TryFrom<u32> for Target {
    type Error = EngineError;

    fn try_from(event: u32) -> Result<Self> {
        match event {
            transition_events::OPEN => Ok(Target::Open),
            transition_events::CLOSE => Ok(Target::Closed),
            other => Err(EngineError::InvalidTarget(format!("event code {other}"))),
        }
    }
}

impl TryFrom<&str> for Target {
    type Error = EngineError;

    fn try_from(name: &str) -> Result<Self> {
        name.parse()
    }
}

impl FromStr for Target {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "open" => Ok(Target::Open),
            "closed" => Ok(Target::Closed),
            other => Err(EngineError::InvalidTarget(other.to_string())),
        }
    }
}

// =============================================================================
// TransitionConfig
// =============================================================================

/// Timing configuration for a transition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Duration of a full Closed -> Open interpolation
    pub open_duration_ms: u32,
    /// Duration of a full Open -> Closed interpolation
    pub close_duration_ms: u32,
    /// Curve applied to timed interpolation
    pub easing: Easing,
    /// When set, transitions toward Open use spring physics instead of a timed curve
    pub open_spring: Option<SpringConfig>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::uniform(200)
    }
}

impl TransitionConfig {
    /// Same duration in both directions, ease-in-out
    pub fn uniform(duration_ms: u32) -> Self {
        Self {
            open_duration_ms: duration_ms,
            close_duration_ms: duration_ms,
            easing: Easing::EaseInOut,
            open_spring: None,
        }
    }

    /// Separate open and close durations
    pub fn asymmetric(open_duration_ms: u32, close_duration_ms: u32) -> Self {
        Self {
            open_duration_ms,
            close_duration_ms,
            ..Self::uniform(0)
        }
    }

    /// Settle on the next tick (reduced motion)
    pub fn instant() -> Self {
        Self::uniform(0)
    }

    /// Set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Use spring physics when moving toward Open
    pub fn with_open_spring(mut self, spring: SpringConfig) -> Self {
        self.open_spring = Some(spring);
        self
    }

    /// Duration used for a transition toward `target`
    pub fn duration_for(&self, target: Target) -> u32 {
        match target {
            Target::Open => self.open_duration_ms,
            Target::Closed => self.close_duration_ms,
        }
    }
}

// =============================================================================
// TransitionStateMachine
// =============================================================================

/// Lifecycle state plus the animated progress value it drives
pub struct TransitionStateMachine {
    config: TransitionConfig,
    state: TransitionState,
    progress: f32,
    /// Progress at the moment the current interpolation started
    from: f32,
    /// Time spent in the current interpolation
    elapsed_ms: f32,
    /// Active spring when the current interpolation is physics-driven
    spring: Option<Spring>,
    /// A gesture is holding progress; ticks do not advance
    held: bool,
    on_settled: Listeners<TransitionState>,
}

impl std::fmt::Debug for TransitionStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionStateMachine")
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("held", &self.held)
            .finish()
    }
}

impl TransitionStateMachine {
    /// Create a machine resting in the Closed state
    pub fn new(config: TransitionConfig) -> Self {
        Self::settled_at(config, Target::Closed)
    }

    /// Create a machine resting at `target`
    pub fn settled_at(config: TransitionConfig, target: Target) -> Self {
        Self {
            config,
            state: target.settled_state(),
            progress: target.endpoint(),
            from: target.endpoint(),
            elapsed_ms: 0.0,
            spring: None,
            held: false,
            on_settled: Listeners::new(),
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Current progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Endpoint the machine is at or moving toward
    pub fn target(&self) -> Target {
        self.state.target()
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TransitionConfig) {
        self.config = config;
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating() && !self.held
    }

    /// Whether a gesture currently holds progress
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Register a callback fired each time the machine settles
    pub fn on_settled<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&TransitionState) + 'static,
    {
        self.on_settled.subscribe(callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.on_settled.unsubscribe(id)
    }

    /// Request a transition toward `target`
    ///
    /// No-op when already at or moving toward `target` (unless a gesture is
    /// holding progress, in which case the hold is released and the
    /// transition resumes from the held position).
    pub fn set_target(&mut self, target: Target) {
        if self.state.target() == target && !self.held {
            return;
        }
        self.start(target);
    }

    /// Apply a numeric event from the host
    ///
    /// `OPEN` and `CLOSE` map to [`set_target`](Self::set_target). Any other
    /// code is a programming error and is rejected.
    pub fn apply_event(&mut self, event: u32) -> Result<()> {
        let target = Target::try_from(event)?;
        self.set_target(target);
        Ok(())
    }

    /// Hold progress at a gesture-driven position
    ///
    /// Ticks do not advance while held. The lifecycle state is unchanged; the
    /// next [`set_target`](Self::set_target) or
    /// [`retarget_from`](Self::retarget_from) releases the hold.
    pub fn scrub(&mut self, progress: f32) -> Result<()> {
        let progress = validate_progress(progress)?;
        self.progress = progress;
        self.held = true;
        Ok(())
    }

    /// Seed progress from an interrupted gesture, then move toward `target`
    ///
    /// Used when a drag releases: the settle animation starts exactly where
    /// the finger left the widget.
    pub fn retarget_from(&mut self, progress: f32, target: Target) -> Result<()> {
        let progress = validate_progress(progress)?;
        self.progress = progress;
        self.held = false;

        if progress == target.endpoint() && self.state == target.settled_state() {
            // Never left the resting position
            return Ok(());
        }
        self.start(target);
        Ok(())
    }

    /// Settle at `target` immediately
    ///
    /// Fires `on_settled` once if the state changes.
    pub fn jump_to(&mut self, target: Target) {
        self.held = false;
        self.spring = None;
        let settled = target.settled_state();
        self.progress = target.endpoint();
        self.from = self.progress;
        self.elapsed_ms = 0.0;
        if self.state != settled {
            self.state = settled;
            tracing::debug!("transition jumped to {:?}", settled);
            self.on_settled.emit(&settled);
        }
    }

    /// Advance the interpolation by `elapsed_ms` and return the new progress
    pub fn tick(&mut self, elapsed_ms: f32) -> f32 {
        if !self.state.is_animating() || self.held {
            return self.progress;
        }

        let elapsed_ms = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };
        let target = self.state.target();
        let endpoint = target.endpoint();

        let (value, done) = match self.spring.as_mut() {
            Some(spring) => {
                spring.step(elapsed_ms / 1000.0);
                (spring.value(), spring.is_settled())
            }
            None => {
                self.elapsed_ms += elapsed_ms;
                let duration = self.config.duration_for(target) as f32;
                let t = if duration <= 0.0 {
                    1.0
                } else {
                    (self.elapsed_ms / duration).min(1.0)
                };
                let eased = self.config.easing.apply(t);
                (self.from + (endpoint - self.from) * eased, t >= 1.0)
            }
        };

        // Monotonic toward the endpoint, never past it
        self.progress = if endpoint >= self.from {
            value.clamp(self.progress, endpoint)
        } else {
            value.clamp(endpoint, self.progress)
        };

        if done {
            self.progress = endpoint;
            self.settle();
        }
        self.progress
    }

    fn start(&mut self, target: Target) {
        self.held = false;
        let event = match target {
            Target::Open => transition_events::OPEN,
            Target::Closed => transition_events::CLOSE,
        };
        if !self.state.apply(event) {
            // Already in flight toward target (a released hold)
            self.state = target.in_flight_state();
        }

        self.from = self.progress;
        self.elapsed_ms = 0.0;
        self.spring = match (target, self.config.open_spring) {
            (Target::Open, Some(config)) => {
                let mut spring = Spring::new(config, self.progress);
                spring.set_target(target.endpoint());
                Some(spring)
            }
            _ => None,
        };

        tracing::debug!(
            "transition {:?} from progress {:.3}",
            self.state,
            self.progress
        );
    }

    fn settle(&mut self) {
        self.state.apply(transition_events::ANIMATION_COMPLETE);
        self.spring = None;
        self.from = self.progress;
        self.elapsed_ms = 0.0;
        tracing::debug!("transition settled {:?}", self.state);
        self.on_settled.emit(&self.state);
    }
}

fn validate_progress(progress: f32) -> Result<f32> {
    if progress.is_finite() && (0.0..=1.0).contains(&progress) {
        Ok(progress)
    } else {
        Err(EngineError::OutOfRange {
            what: "progress",
            value: progress,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
