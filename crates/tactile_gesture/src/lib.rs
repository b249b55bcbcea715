//! Tactile Gesture
//!
//! Controllers that turn normalized drag samples into layout decisions.
//!
//! # Controllers
//!
//! - [`GestureResizeController`]: drag displacement to a clamped split
//!   ratio between two panels, with a feedback pulse on commit
//! - [`SwipeDismissController`]: drag displacement and release velocity to a
//!   `Dismiss` or `SnapBack` decision, optionally driving a
//!   [`TransitionStateMachine`](tactile_animation::TransitionStateMachine)
//!   from the exact release position
//!
//! Both accept either direct calls (`begin` / `move_by` / `end`) or
//! [`GestureSample`](tactile_core::GestureSample)s through `handle`, and
//! both route out-of-order calls through a
//! [`ViolationPolicy`](tactile_core::ViolationPolicy).
//!
//! # Example
//!
//! ```
//! use tactile_gesture::{DismissConfig, DismissOutcome, SwipeDismissController};
//!
//! let mut swipe = SwipeDismissController::new(DismissConfig::default());
//! swipe.begin();
//! swipe.move_by(40.0);
//! assert_eq!(swipe.end(40.0, Some(1200.0)), DismissOutcome::Dismiss);
//! ```

pub mod dismiss;
pub mod feedback;
pub mod resize;
pub mod velocity;

pub use dismiss::{
    DismissConfig, DismissDirection, DismissOutcome, DismissSession, SwipeDismissController,
};
pub use feedback::{FeedbackError, FeedbackKind, FeedbackSink, NoFeedback};
pub use resize::{GestureResizeController, ResizeConfig, ResizeSession};
pub use velocity::VelocityTracker;
