//! Tactile Overlay
//!
//! Floating-element placement and the widget hosts built on the gesture and
//! animation layers.
//!
//! # Features
//!
//! - **Anchored Positioning**: tooltips, hover cards and popovers placed
//!   against an anchor and clamped inside the viewport, with optional
//!   alignment and opt-in auto-flip
//! - **Drawer**: bottom drawer with swipe-down dismiss
//! - **Sheet**: edge sheet sliding in from any side
//! - **Resizable Panels**: two-panel split with a drag handle
//! - **Tooltip**: long-press tooltip with a show delay
//! - **Configuration**: every widget's timings and thresholds loadable from
//!   TOML or JSON
//!
//! # Example
//!
//! ```
//! use tactile_core::{AnchorMeasurement, FloatingSize, Side, ViewportBounds};
//! use tactile_overlay::AnchoredPositioner;
//!
//! let positioner = AnchoredPositioner::new(FloatingSize::new(120.0, 40.0));
//! let placed = positioner.compute(
//!     AnchorMeasurement::new(0.0, 0.0, 20.0, 20.0),
//!     ViewportBounds::new(400.0, 800.0),
//!     Side::Top,
//!     8.0,
//! );
//! assert_eq!((placed.top, placed.left), (10.0, 10.0));
//! assert_eq!(placed.side, Side::Top);
//! ```

pub mod config;
pub mod positioner;
pub mod widgets;

pub use config::{ConfigError, EngineConfig};
pub use positioner::{Align, AnchoredPositioner, PlacementResult};
pub use widgets::{
    Drawer, DrawerConfig, ResizablePanelGroup, Sheet, SheetConfig, Tooltip, TooltipConfig,
};
