//! Edge sheet
//!
//! A panel attached to one edge of the viewport. Top and bottom sheets take
//! half the viewport height; left and right sheets take three quarters of
//! its width. Swipe-to-dismiss is optional and always pulls the sheet back
//! toward its own edge.

use serde::{Deserialize, Serialize};
use tactile_animation::{Target, TransitionConfig, TransitionState, TransitionStateMachine};
use tactile_core::{Axis, GestureSample, ListenerId, Result, Side};
use tactile_gesture::{DismissConfig, DismissOutcome, SwipeDismissController};

use super::SwipeRouter;

/// Sheet configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Edge the sheet slides in from
    pub side: Side,
    /// Fraction of the viewport height used by top and bottom sheets
    pub vertical_fraction: f32,
    /// Fraction of the viewport width used by left and right sheets
    pub horizontal_fraction: f32,
    pub transition: TransitionConfig,
    /// Dismiss thresholds; `None` disables swipe-to-dismiss
    pub dismiss: Option<DismissConfig>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            side: Side::Right,
            vertical_fraction: 0.5,
            horizontal_fraction: 0.75,
            transition: TransitionConfig::sheet(),
            dismiss: None,
        }
    }
}

impl SheetConfig {
    pub fn side(side: Side) -> Self {
        Self {
            side,
            ..Self::default()
        }
    }

    /// Enable swipe-to-dismiss with default thresholds
    pub fn with_swipe_dismiss(mut self) -> Self {
        self.dismiss = Some(DismissConfig::for_side(self.side));
        self
    }
}

/// A sheet sliding in from a viewport edge
#[derive(Debug)]
pub struct Sheet {
    config: SheetConfig,
    viewport: (f32, f32),
    machine: TransitionStateMachine,
    swipe: Option<SwipeDismissController>,
    router: SwipeRouter,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

impl Sheet {
    pub fn new(config: SheetConfig) -> Self {
        let swipe = config.dismiss.map(|dismiss| {
            let edge = DismissConfig::for_side(config.side);
            SwipeDismissController::new(DismissConfig {
                axis: edge.axis,
                direction: edge.direction,
                ..dismiss
            })
        });
        Self {
            config,
            viewport: (0.0, 0.0),
            machine: TransitionStateMachine::new(config.transition),
            swipe,
            router: SwipeRouter::default(),
        }
    }

    pub fn side(&self) -> Side {
        self.config.side
    }

    /// Record the viewport size from a layout pass
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        let size = self.size();
        if let Some(swipe) = self.swipe.as_mut() {
            swipe.set_extent(size);
        }
    }

    /// Sheet extent along its slide axis
    pub fn size(&self) -> f32 {
        let (width, height) = self.viewport;
        match self.config.side.axis() {
            Axis::Vertical => height * self.config.vertical_fraction,
            Axis::Horizontal => width * self.config.horizontal_fraction,
        }
    }

    pub fn open(&mut self) {
        self.machine.set_target(Target::Open);
    }

    pub fn close(&mut self) {
        self.machine.set_target(Target::Closed);
    }

    pub fn tick(&mut self, elapsed_ms: f32) -> f32 {
        self.machine.tick(elapsed_ms)
    }

    /// Route a gesture sample on the sheet panel
    ///
    /// Always `Ok(None)` when swipe-to-dismiss is disabled.
    pub fn handle(&mut self, sample: &GestureSample) -> Result<Option<DismissOutcome>> {
        if !self.is_mounted() && !self.router.is_captured() {
            return Ok(None);
        }
        match self.swipe.as_mut() {
            Some(swipe) => self.router.route(swipe, &mut self.machine, sample),
            None => Ok(None),
        }
    }

    /// `(x, y)` translation of the sheet from its open position
    ///
    /// A closed sheet sits fully past its edge.
    pub fn translation(&self) -> (f32, f32) {
        let hidden = (1.0 - self.machine.progress()) * self.size();
        let signed = if self.config.side.is_far_edge() {
            hidden
        } else {
            -hidden
        };
        match self.config.side.axis() {
            Axis::Horizontal => (signed, 0.0),
            Axis::Vertical => (0.0, signed),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.machine.state().is_visible()
    }

    pub fn state(&self) -> TransitionState {
        self.machine.state()
    }

    pub fn progress(&self) -> f32 {
        self.machine.progress()
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

    fn settle(sheet: &mut Sheet) {
        for _ in 0..200 {
            sheet.tick(16.0);
        }
    }

    #[test]
    fn test_sizes_per_side() {
        let mut right = Sheet::default();
        right.set_viewport(400.0, 800.0);
        assert_eq!(right.side(), Side::Right);
        assert_eq!(right.size(), 300.0);

        let mut bottom = Sheet::new(SheetConfig::side(Side::Bottom));
        bottom.set_viewport(400.0, 800.0);
        assert_eq!(bottom.size(), 400.0);
    }

    #[test]
    fn test_translation_direction() {
        let mut left = Sheet::new(SheetConfig::side(Side::Left));
        left.set_viewport(400.0, 800.0);
        assert_eq!(left.translation(), (-300.0, 0.0));

        let mut top = Sheet::new(SheetConfig::side(Side::Top));
        top.set_viewport(400.0, 800.0);
        assert_eq!(top.translation(), (0.0, -400.0));

        top.open();
        settle(&mut top);
        assert_eq!(top.translation(), (0.0, 0.0));
    }

    #[test]
    fn test_swipe_disabled_by_default() {
        let mut sheet = Sheet::default();
        sheet.set_viewport(400.0, 800.0);
        sheet.open();
        settle(&mut sheet);

        sheet.handle(&GestureSample::begin()).unwrap();
        sheet.handle(&GestureSample::moved(250.0, 0.0)).unwrap();
        assert_eq!(sheet.handle(&GestureSample::end(250.0, 0.0)).unwrap(), None);
        assert_eq!(sheet.state(), TransitionState::Open);
    }

    #[test]
    fn test_swipe_toward_edge_dismisses() {
        let mut sheet = Sheet::new(SheetConfig::side(Side::Left).with_swipe_dismiss());
        sheet.set_viewport(400.0, 800.0);
        sheet.open();
        settle(&mut sheet);

        sheet.handle(&GestureSample::begin()).unwrap();
        sheet.handle(&GestureSample::moved(-150.0, 0.0)).unwrap();
        assert_eq!(sheet.translation(), (-150.0, 0.0));

        let outcome = sheet.handle(&GestureSample::end(-150.0, 0.0)).unwrap();
        assert_eq!(outcome, Some(DismissOutcome::Dismiss));
        assert_eq!(sheet.state(), TransitionState::Closing);

        settle(&mut sheet);
        assert!(!sheet.is_mounted());
    }
}
