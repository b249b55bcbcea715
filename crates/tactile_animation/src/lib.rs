//! Tactile Animation
//!
//! Time-driven interpolation for widget lifecycles.
//!
//! # Features
//!
//! - **Transition State Machine**: Closed/Opening/Open/Closing with a
//!   continuous progress value and exactly-once settle notifications
//! - **Interruptible**: re-targeting mid-flight resumes from current progress
//! - **Gesture Seeding**: progress can be held by a drag and released into a
//!   settle animation from the exact drag position
//! - **Easing Curves**: monotonic, non-overshooting cubic curves
//! - **Spring Physics**: RK4 springs clamped to never pass their target
//! - **Presets**: stock timings for tooltip, hover card, popover, drawer,
//!   sheet, collapsible and accordion widgets
//!
//! There is no internal clock. Hosts drive every machine with
//! `tick(elapsed_ms)` from their frame callback; tests call it with
//! synthetic deltas.

pub mod easing;
pub mod presets;
pub mod spring;
pub mod transition;

pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use transition::{
    transition_events, Target, TransitionConfig, TransitionState, TransitionStateMachine,
};
