//! Two-panel resizable group
//!
//! A handle between two panels resizes them along the group's direction. The
//! split is kept as the first panel's share of the container in percent.

use tactile_core::{Axis, GestureSample, ListenerId, ViolationPolicy};
use tactile_gesture::{FeedbackSink, GestureResizeController, ResizeConfig};

/// Two panels separated by a drag handle
#[derive(Debug)]
pub struct ResizablePanelGroup {
    controller: GestureResizeController,
    container_extent: f32,
}

impl ResizablePanelGroup {
    /// Create an evenly split group
    pub fn new(direction: Axis) -> Self {
        Self::with_config(direction, 50.0, ResizeConfig::default())
    }

    pub fn with_config(direction: Axis, initial_ratio: f32, config: ResizeConfig) -> Self {
        Self {
            controller: GestureResizeController::with_config(direction, initial_ratio, config),
            container_extent: 0.0,
        }
    }

    /// Pulse `sink` each time a resize commits
    pub fn with_feedback(mut self, sink: impl FeedbackSink + 'static) -> Self {
        self.controller = self.controller.with_feedback(sink);
        self
    }

    pub fn with_policy(mut self, policy: ViolationPolicy) -> Self {
        self.controller = self.controller.with_policy(policy);
        self
    }

    pub fn direction(&self) -> Axis {
        self.controller.axis()
    }

    /// Record the container's extent along the group direction
    pub fn set_container_extent(&mut self, extent: f32) {
        self.container_extent = extent;
        self.controller.set_container_extent(extent);
    }

    /// Route a gesture sample from the handle
    pub fn handle(&mut self, sample: &GestureSample) -> f32 {
        self.controller.handle(sample).unwrap_or_else(|| self.ratio())
    }

    /// First panel's share of the container (percent)
    pub fn ratio(&self) -> f32 {
        self.controller.ratio()
    }

    /// Flex weights for the two panels
    pub fn panel_flex(&self) -> (f32, f32) {
        let ratio = self.ratio();
        (ratio, 100.0 - ratio)
    }

    /// Pixel extents of the two panels
    pub fn panel_extents(&self) -> (f32, f32) {
        if !(self.container_extent.is_finite() && self.container_extent > 0.0) {
            return (0.0, 0.0);
        }
        let first = self.container_extent * self.ratio() / 100.0;
        (first, self.container_extent - first)
    }

    /// Register a callback fired with the ratio after each committed resize
    pub fn on_commit<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&f32) + 'static,
    {
        self.controller.on_commit(callback)
    }
}
