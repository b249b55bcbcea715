//! Widget hosts
//!
//! Each widget owns exactly one [`TransitionStateMachine`] and at most one
//! gesture controller, and exposes the values a renderer needs (progress,
//! translation, panel sizes, placement). Hosts forward normalized gesture
//! samples and frame ticks; nothing here renders.

mod drawer;
mod resizable;
mod sheet;
mod tooltip;

pub use drawer::{Drawer, DrawerConfig};
pub use resizable::ResizablePanelGroup;
pub use sheet::{Sheet, SheetConfig};
pub use tooltip::{Tooltip, TooltipConfig};

use tactile_animation::TransitionStateMachine;
use tactile_core::{GesturePhase, GestureSample, Result};
use tactile_gesture::{DismissOutcome, SwipeDismissController};

/// Forwards samples to a swipe controller once a drag passes its activation slop
///
/// Taps and sub-slop jitter never open a dismiss session.
#[derive(Debug, Default)]
pub(crate) struct SwipeRouter {
    captured: bool,
}

impl SwipeRouter {
    pub(crate) fn is_captured(&self) -> bool {
        self.captured
    }

    pub(crate) fn route(
        &mut self,
        swipe: &mut SwipeDismissController,
        machine: &mut TransitionStateMachine,
        sample: &GestureSample,
    ) -> Result<Option<DismissOutcome>> {
        match sample.phase {
            GesturePhase::Begin => {
                self.captured = false;
                Ok(None)
            }
            GesturePhase::Move => {
                if !self.captured {
                    let delta = sample.delta_along(swipe.config().axis);
                    if !swipe.should_capture(delta) {
                        return Ok(None);
                    }
                    self.captured = true;
                    let begin = GestureSample {
                        phase: GesturePhase::Begin,
                        ..*sample
                    };
                    swipe.handle_with(&begin, machine)?;
                }
                swipe.handle_with(sample, machine)
            }
            GesturePhase::End | GesturePhase::Cancel => {
                if !std::mem::take(&mut self.captured) {
                    return Ok(None);
                }
                swipe.handle_with(sample, machine)
            }
        }
    }
}
