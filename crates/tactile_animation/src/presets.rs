//! Transition timings for the stock widgets
//!
//! Opening and closing run at different speeds for most widgets: content
//! eases in a little slower than it leaves.

use crate::easing::Easing;
use crate::spring::SpringConfig;
use crate::transition::TransitionConfig;

impl TransitionConfig {
    /// Tooltip fade/scale (150ms in, 120ms out)
    pub fn tooltip() -> Self {
        Self::asymmetric(150, 120).easing(Easing::EaseOut)
    }

    /// Hover card (200ms in, 150ms out)
    pub fn hover_card() -> Self {
        Self::asymmetric(200, 150).easing(Easing::EaseOut)
    }

    /// Popover (250ms in, 200ms out)
    pub fn popover() -> Self {
        Self::asymmetric(250, 200)
    }

    /// Bottom drawer: slides in over 300ms, dismisses over 200ms, springs back when a swipe is released early
    pub fn drawer() -> Self {
        Self::asymmetric(300, 200).with_open_spring(SpringConfig::native_default())
    }

    /// Edge sheet: springs open, slides out over 250ms
    pub fn sheet() -> Self {
        Self::asymmetric(300, 250).with_open_spring(SpringConfig::from_origami(40.0, 7.0))
    }

    /// Collapsible section (250ms both ways)
    pub fn collapsible() -> Self {
        Self::uniform(250)
    }

    /// Accordion item (200ms both ways)
    pub fn accordion() -> Self {
        Self::uniform(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Target;

    #[test]
    fn test_preset_durations() {
        let tooltip = TransitionConfig::tooltip();
        assert_eq!(tooltip.duration_for(Target::Open), 150);
        assert_eq!(tooltip.duration_for(Target::Closed), 120);

        let drawer = TransitionConfig::drawer();
        assert_eq!(drawer.duration_for(Target::Closed), 200);
        assert!(drawer.open_spring.is_some());

        assert_eq!(TransitionConfig::collapsible().duration_for(Target::Open), 250);
        assert!(TransitionConfig::popover().open_spring.is_none());
    }
}
