//! Long-press tooltip
//!
//! Pressing the trigger starts a show delay; the tooltip fades in only if
//! the press is still held when the delay elapses. Releasing cancels a
//! pending show and hides a visible tooltip.

use serde::{Deserialize, Serialize};
use tactile_animation::{Target, TransitionConfig, TransitionState, TransitionStateMachine};
use tactile_core::{AnchorMeasurement, FloatingSize, ListenerId, Side, ViewportBounds};

use crate::positioner::{Align, AnchoredPositioner, PlacementResult};

/// Tooltip configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Hold time before the tooltip appears
    pub delay_ms: u32,
    pub side: Side,
    /// Gap between the trigger and the tooltip
    pub side_offset: f32,
    /// Estimated tooltip size until the host measures it
    pub size: FloatingSize,
    pub align: Align,
    pub auto_flip: bool,
    pub transition: TransitionConfig,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            side: Side::Top,
            side_offset: 8.0,
            size: FloatingSize::default(),
            align: Align::Center,
            auto_flip: false,
            transition: TransitionConfig::tooltip(),
        }
    }
}

/// A tooltip attached to one trigger
#[derive(Debug)]
pub struct Tooltip {
    config: TooltipConfig,
    positioner: AnchoredPositioner,
    machine: TransitionStateMachine,
    /// Time the current press has been held, while the show is pending
    pending_ms: Option<f32>,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

impl Tooltip {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            positioner: AnchoredPositioner::new(config.size)
                .with_align(config.align)
                .with_auto_flip(config.auto_flip),
            machine: TransitionStateMachine::new(config.transition),
            pending_ms: None,
        }
    }

    /// Trigger pressed: start the show delay
    pub fn press_in(&mut self) {
        if self.machine.target() == Target::Open {
            return;
        }
        self.pending_ms = Some(0.0);
    }

    /// Trigger released: cancel a pending show and hide
    pub fn press_out(&mut self) {
        self.pending_ms = None;
        self.machine.set_target(Target::Closed);
    }

    /// Advance the show delay and the fade animation
    pub fn tick(&mut self, elapsed_ms: f32) -> f32 {
        let elapsed_ms = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };

        if let Some(waited) = self.pending_ms {
            let waited = waited + elapsed_ms;
            let delay = self.config.delay_ms as f32;
            if waited < delay {
                self.pending_ms = Some(waited);
                return self.machine.progress();
            }
            self.pending_ms = None;
            tracing::trace!("tooltip delay elapsed");
            self.machine.set_target(Target::Open);
            return self.machine.tick(waited - delay);
        }
        self.machine.tick(elapsed_ms)
    }

    /// Whether a show is waiting on the delay
    pub fn is_pending(&self) -> bool {
        self.pending_ms.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.machine.state().is_visible()
    }

    /// Fade/scale progress
    pub fn progress(&self) -> f32 {
        self.machine.progress()
    }

    pub fn state(&self) -> TransitionState {
        self.machine.state()
    }

    /// Replace the estimated size with a measured one
    pub fn set_size(&mut self, size: FloatingSize) {
        self.positioner.set_element_size(size);
    }

    /// Where to draw the tooltip for the trigger at `anchor`
    pub fn placement(&self, anchor: AnchorMeasurement, viewport: ViewportBounds) -> PlacementResult {
        self.positioner
            .compute(anchor, viewport, self.config.side, self.config.side_offset)
    }

    pub fn on_settled<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&TransitionState) + 'static,
    {
        self.machine.on_settled(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_after_delay() {
        let mut tooltip = Tooltip::default();
        tooltip.press_in();
        tooltip.tick(300.0);
        assert!(tooltip.is_pending());
        assert!(!tooltip.is_visible());

        tooltip.tick(250.0);
        assert!(!tooltip.is_pending());
        assert_eq!(tooltip.state(), TransitionState::Opening);
        assert!(tooltip.progress() > 0.0);

        tooltip.tick(150.0);
        assert_eq!(tooltip.state(), TransitionState::Open);
    }

    #[test]
    fn test_early_release_never_shows() {
        let mut tooltip = Tooltip::default();
        tooltip.press_in();
        tooltip.tick(400.0);
        tooltip.press_out();
        tooltip.tick(1000.0);
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.progress(), 0.0);
    }

    #[test]
    fn test_release_hides() {
        let mut tooltip = Tooltip::default();
        tooltip.press_in();
        tooltip.tick(500.0);
        tooltip.tick(150.0);
        assert_eq!(tooltip.state(), TransitionState::Open);

        tooltip.press_out();
        assert_eq!(tooltip.state(), TransitionState::Closing);
        tooltip.tick(120.0);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_placement_above_trigger() {
        let tooltip = Tooltip::default();
        let anchor = AnchorMeasurement::new(100.0, 300.0, 80.0, 30.0);
        let placed = tooltip.placement(anchor, ViewportBounds::new(400.0, 800.0));
        assert_eq!(placed.side, Side::Top);
        assert_eq!((placed.top, placed.left), (252.0, 80.0));
    }
}
