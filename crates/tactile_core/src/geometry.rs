//! Layout measurement types
//!
//! All coordinates are logical pixels in a single shared coordinate space
//! with the origin at the top-left of the viewport.

use serde::{Deserialize, Serialize};

// =============================================================================
// Axis
// =============================================================================

/// Orientation a gesture is resolved along
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis (left/right)
    #[default]
    Horizontal,
    /// Y axis (up/down)
    Vertical,
}

impl Axis {
    /// Pick the component of an `(x, y)` pair that lies along this axis
    pub fn select(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    /// The perpendicular axis
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

// =============================================================================
// Side
// =============================================================================

/// Edge of an anchor (or of the screen) a floating element attaches to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Above
    #[default]
    Top,
    /// Below
    Bottom,
    /// To the left
    Left,
    /// To the right
    Right,
}

impl Side {
    /// The opposite edge
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Axis perpendicular to this edge (the axis the element is pushed along)
    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }

    /// Whether moving away from the center toward this edge increases the coordinate
    pub fn is_far_edge(self) -> bool {
        matches!(self, Side::Bottom | Side::Right)
    }
}

// =============================================================================
// AnchorMeasurement
// =============================================================================

/// Bounding box of the element a floating widget is positioned against
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorMeasurement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorMeasurement {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point `(x, y)`
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Replace non-finite components with zero
    ///
    /// Malformed measurements from the host must never poison a placement.
    pub fn sanitized(&self) -> Self {
        let fix = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            x: fix(self.x),
            y: fix(self.y),
            width: fix(self.width).max(0.0),
            height: fix(self.height).max(0.0),
        }
    }
}

// =============================================================================
// FloatingSize
// =============================================================================

/// Measured size of the floating element being placed
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatingSize {
    pub width: f32,
    pub height: f32,
}

impl FloatingSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along an axis
    pub fn along(&self, axis: Axis) -> f32 {
        axis.select(self.width, self.height)
    }
}

impl Default for FloatingSize {
    /// Tooltip-sized box
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 40.0,
        }
    }
}

// =============================================================================
// ViewportBounds
// =============================================================================

/// Layout surface a floating element must stay inside
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub width: f32,
    pub height: f32,
    /// Minimum distance kept between the floating element and every viewport edge
    #[serde(default = "default_inset")]
    pub inset: f32,
}

fn default_inset() -> f32 {
    ViewportBounds::DEFAULT_INSET
}

impl ViewportBounds {
    /// Default edge margin
    pub const DEFAULT_INSET: f32 = 10.0;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            inset: Self::DEFAULT_INSET,
        }
    }

    /// Set the edge margin
    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    /// Extent along an axis
    pub fn along(&self, axis: Axis) -> f32 {
        axis.select(self.width, self.height)
    }

    /// Whether the viewport has a usable, finite area
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite_and_axis() {
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Top.axis(), Axis::Vertical);
        assert_eq!(Side::Right.axis(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
    }

    #[test]
    fn test_anchor_center() {
        let anchor = AnchorMeasurement::new(100.0, 50.0, 80.0, 30.0);
        assert_eq!(anchor.center(), (140.0, 65.0));
        assert_eq!(anchor.right(), 180.0);
        assert_eq!(anchor.bottom(), 80.0);
    }

    #[test]
    fn test_anchor_sanitized() {
        let anchor = AnchorMeasurement::new(f32::NAN, 5.0, -4.0, f32::INFINITY).sanitized();
        assert_eq!(anchor, AnchorMeasurement::new(0.0, 5.0, 0.0, 0.0));
    }

    #[test]
    fn test_viewport_degenerate() {
        assert!(ViewportBounds::new(0.0, 800.0).is_degenerate());
        assert!(ViewportBounds::new(f32::NAN, 800.0).is_degenerate());
        assert!(!ViewportBounds::new(400.0, 800.0).is_degenerate());
        assert_eq!(ViewportBounds::new(1.0, 1.0).inset, 10.0);
    }
}
