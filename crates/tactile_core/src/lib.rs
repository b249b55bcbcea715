//! Tactile Core
//!
//! Foundational types shared by every Tactile crate:
//!
//! - **Geometry**: axes, sides, anchor measurements and viewport bounds
//! - **Input**: normalized gesture samples delivered by the host gesture layer
//! - **Errors**: the engine error taxonomy and the contract-violation policy
//! - **State Machines**: the `StateTransitions` trait for lifecycle enums
//! - **Listeners**: a single-threaded observer registry
//!
//! The engine is single-threaded and event-driven. Nothing here blocks,
//! allocates threads, or reads a clock; time enters only through explicit
//! `tick(elapsed_ms)` calls in the animation layer.

pub mod error;
pub mod fsm;
pub mod geometry;
pub mod input;
pub mod listener;

pub use error::{EngineError, Result, ViolationPolicy};
pub use fsm::StateTransitions;
pub use geometry::{AnchorMeasurement, Axis, FloatingSize, Side, ViewportBounds};
pub use input::{GesturePhase, GestureSample};
pub use listener::{ListenerId, Listeners};
