//! Bottom drawer with swipe-down dismiss
//!
//! The drawer slides up from the bottom edge. Dragging it down more than the
//! activation slop captures the gesture; the drawer then follows the finger
//! and on release either dismisses or springs back open from where it was
//! let go. It stays mounted until the close animation settles.

use serde::{Deserialize, Serialize};
use tactile_animation::{Target, TransitionConfig, TransitionState, TransitionStateMachine};
use tactile_core::{Axis, GestureSample, ListenerId, Result};
use tactile_gesture::{DismissConfig, DismissDirection, DismissOutcome, SwipeDismissController};

use super::SwipeRouter;

/// Drawer configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Panel height in px
    pub height: f32,
    pub transition: TransitionConfig,
    pub dismiss: DismissConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            height: 400.0,
            transition: TransitionConfig::drawer(),
            dismiss: DismissConfig::default(),
        }
    }
}

impl DrawerConfig {
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

/// A bottom drawer
#[derive(Debug)]
pub struct Drawer {
    height: f32,
    machine: TransitionStateMachine,
    swipe: SwipeDismissController,
    router: SwipeRouter,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(DrawerConfig::default())
    }
}

impl Drawer {
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            height: config.height,
            machine: TransitionStateMachine::new(config.transition),
            // The panel always slides down to close
            swipe: SwipeDismissController::new(DismissConfig {
                axis: Axis::Vertical,
                direction: DismissDirection::Positive,
                ..config.dismiss
            })
            .with_extent(config.height),
            router: SwipeRouter::default(),
        }
    }

    pub fn open(&mut self) {
        self.machine.set_target(Target::Open);
    }

    /// Animate closed (backdrop press, back button)
    pub fn close(&mut self) {
        self.machine.set_target(Target::Closed);
    }

    /// Advance the open/close animation
    pub fn tick(&mut self, elapsed_ms: f32) -> f32 {
        self.machine.tick(elapsed_ms)
    }

    /// Route a gesture sample on the drawer panel
    ///
    /// Returns the dismiss decision when a captured drag is released.
    pub fn handle(&mut self, sample: &GestureSample) -> Result<Option<DismissOutcome>> {
        if !self.is_mounted() && !self.router.is_captured() {
            return Ok(None);
        }
        self.router.route(&mut self.swipe, &mut self.machine, sample)
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.swipe.set_extent(height);
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Downward translation of the panel from its open position
    pub fn translate_y(&self) -> f32 {
        (1.0 - self.machine.progress()) * self.height
    }

    /// Whether the panel (and its backdrop) should be rendered
    pub fn is_mounted(&self) -> bool {
        self.machine.state().is_visible()
    }

    pub fn state(&self) -> TransitionState {
        self.machine.state()
    }

    pub fn progress(&self) -> f32 {
        self.machine.progress()
    }

    /// Register a callback fired when the drawer finishes opening or closing
    pub fn on_settled<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&TransitionState) + 'static,
    {
        self.machine.on_settled(callback)
    }

    /// Register a callback fired with every swipe decision
    pub fn on_decision<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&DismissOutcome) + 'static,
    {
        self.swipe.on_decision(callback)
    }
}
