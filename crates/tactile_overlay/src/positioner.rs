//! Anchor-relative placement for floating elements
//!
//! Places a tooltip, hover card or popover `offset` pixels outside one edge of
//! its anchor, aligned along that edge, then clamps the result into the
//! viewport:
//!
//! ```text
//!            ┌──────────┐
//!            │ floating │   side = Top
//!            └──────────┘
//!                 ↕ offset
//!          ┌────────────────┐
//!          │     anchor     │
//!          └────────────────┘
//! ```
//!
//! `top` and `left` are clamped independently into
//! `[inset, viewport_extent - inset - element_extent]`. Clamping only
//! translates; the returned side is the requested one unless auto-flip is
//! enabled and the opposite side has room where the requested one does not.
//!
//! [`AnchoredPositioner::compute`] is pure: identical inputs always yield an
//! identical [`PlacementResult`], so hosts can recompute on every layout pass.

use serde::{Deserialize, Serialize};
use tactile_core::{AnchorMeasurement, Axis, EngineError, FloatingSize, Side, ViewportBounds};

/// Alignment along the anchor edge
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Flush with the anchor's leading edge
    Start,
    /// Centered on the anchor
    #[default]
    Center,
    /// Flush with the anchor's trailing edge
    End,
}

/// Computed position of a floating element
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub top: f32,
    pub left: f32,
    /// Side the element was actually placed on
    pub side: Side,
}

/// Positions a floating element of known size against an anchor
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchoredPositioner {
    /// Size of the floating element
    pub element: FloatingSize,
    /// Alignment along the anchor edge
    pub align: Align,
    /// Flip to the opposite side when the requested side lacks room
    pub auto_flip: bool,
}

impl AnchoredPositioner {
    pub fn new(element: FloatingSize) -> Self {
        Self {
            element,
            ..Self::default()
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_auto_flip(mut self, enabled: bool) -> Self {
        self.auto_flip = enabled;
        self
    }

    /// Update the element size after it has been measured
    pub fn set_element_size(&mut self, element: FloatingSize) {
        self.element = element;
    }

    /// Compute the placement of the element next to `anchor`
    pub fn compute(
        &self,
        anchor: AnchorMeasurement,
        viewport: ViewportBounds,
        side: Side,
        offset: f32,
    ) -> PlacementResult {
        let anchor = anchor.sanitized();
        let offset = finite_or_zero(offset);
        let element = FloatingSize::new(
            finite_or_zero(self.element.width).max(0.0),
            finite_or_zero(self.element.height).max(0.0),
        );

        let side = if self.auto_flip
            && !viewport.is_degenerate()
            && !has_room(&anchor, &viewport, element, side, offset)
            && has_room(&anchor, &viewport, element, side.opposite(), offset)
        {
            tracing::trace!("placement flipped {:?} -> {:?}", side, side.opposite());
            side.opposite()
        } else {
            side
        };

        let (top, left) = self.candidate(&anchor, element, side, offset);
        PlacementResult {
            top: clamp_into(top, viewport, Axis::Vertical, element.height),
            left: clamp_into(left, viewport, Axis::Horizontal, element.width),
            side,
        }
    }

    /// Unclamped `(top, left)` on `side`
    fn candidate(
        &self,
        anchor: &AnchorMeasurement,
        element: FloatingSize,
        side: Side,
        offset: f32,
    ) -> (f32, f32) {
        match side {
            Side::Top => (
                anchor.y - offset - element.height,
                self.aligned(anchor.x, anchor.width, element.width),
            ),
            Side::Bottom => (
                anchor.bottom() + offset,
                self.aligned(anchor.x, anchor.width, element.width),
            ),
            Side::Left => (
                self.aligned(anchor.y, anchor.height, element.height),
                anchor.x - offset - element.width,
            ),
            Side::Right => (
                self.aligned(anchor.y, anchor.height, element.height),
                anchor.right() + offset,
            ),
        }
    }

    /// Leading coordinate along the anchor edge
    fn aligned(&self, start: f32, anchor_extent: f32, element_extent: f32) -> f32 {
        match self.align {
            Align::Start => start,
            Align::Center => start + (anchor_extent - element_extent) / 2.0,
            Align::End => start + anchor_extent - element_extent,
        }
    }
}

/// Whether the element fits on `side` without clamping on the perpendicular axis
fn has_room(
    anchor: &AnchorMeasurement,
    viewport: &ViewportBounds,
    element: FloatingSize,
    side: Side,
    offset: f32,
) -> bool {
    let inset = sanitized_inset(viewport.inset);
    match side {
        Side::Top => anchor.y - offset - element.height >= inset,
        Side::Bottom => anchor.bottom() + offset + element.height <= viewport.height - inset,
        Side::Left => anchor.x - offset - element.width >= inset,
        Side::Right => anchor.right() + offset + element.width <= viewport.width - inset,
    }
}

/// Clamp a coordinate into `[inset, extent - inset - size]`
///
/// A degenerate viewport, or an element too large to fit, pins to the inset.
fn clamp_into(value: f32, viewport: ViewportBounds, axis: Axis, size: f32) -> f32 {
    let inset = sanitized_inset(viewport.inset);
    if viewport.is_degenerate() {
        tracing::trace!("{}", EngineError::DegenerateMeasurement("viewport"));
        return inset;
    }
    let max = viewport.along(axis) - inset - size;
    if max < inset {
        return inset;
    }
    value.max(inset).min(max)
}

fn sanitized_inset(inset: f32) -> f32 {
    finite_or_zero(inset).max(0.0)
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportBounds {
        ViewportBounds::new(400.0, 800.0)
    }

    fn tooltip() -> AnchoredPositioner {
        AnchoredPositioner::new(FloatingSize::new(120.0, 40.0))
    }

    #[test]
    fn test_each_side() {
        let anchor = AnchorMeasurement::new(100.0, 300.0, 80.0, 30.0);
        let positioner = tooltip();

        let top = positioner.compute(anchor, viewport(), Side::Top, 8.0);
        assert_eq!((top.top, top.left, top.side), (252.0, 80.0, Side::Top));

        let bottom = positioner.compute(anchor, viewport(), Side::Bottom, 8.0);
        assert_eq!((bottom.top, bottom.left), (338.0, 80.0));

        let left = positioner.compute(anchor, viewport(), Side::Left, 8.0);
        // 100 - 8 - 120 = -28, clamped to the inset
        assert_eq!((left.top, left.left), (295.0, 10.0));

        let right = positioner.compute(anchor, viewport(), Side::Right, 8.0);
        assert_eq!((right.top, right.left, right.side), (295.0, 188.0, Side::Right));
    }

    #[test]
    fn test_clamped_near_edges() {
        let positioner = tooltip();

        let corner = AnchorMeasurement::new(0.0, 0.0, 20.0, 20.0);
        let placed = positioner.compute(corner, viewport(), Side::Top, 8.0);
        assert_eq!((placed.top, placed.left), (10.0, 10.0));
        assert_eq!(placed.side, Side::Top);

        let far = AnchorMeasurement::new(390.0, 790.0, 20.0, 20.0);
        let placed = positioner.compute(far, viewport(), Side::Bottom, 8.0);
        assert_eq!((placed.top, placed.left), (750.0, 270.0));
    }

    #[test]
    fn test_always_inside_viewport() {
        let positioner = tooltip();
        let viewport = viewport();
        let sides = [Side::Top, Side::Bottom, Side::Left, Side::Right];

        let mut x = -50.0;
        while x <= 450.0 {
            let mut y = -50.0;
            while y <= 850.0 {
                let anchor = AnchorMeasurement::new(x, y, 60.0, 24.0);
                for side in sides {
                    let placed = positioner.compute(anchor, viewport, side, 8.0);
                    assert!(placed.left >= 10.0 && placed.left + 120.0 <= 390.0);
                    assert!(placed.top >= 10.0 && placed.top + 40.0 <= 790.0);
                    assert_eq!(placed.side, side);
                }
                y += 25.0;
            }
            x += 25.0;
        }
    }

    #[test]
    fn test_deterministic() {
        let positioner = tooltip().with_align(Align::End);
        let anchor = AnchorMeasurement::new(12.5, 700.25, 33.0, 17.0);
        let first = positioner.compute(anchor, viewport(), Side::Bottom, 6.0);
        for _ in 0..10 {
            assert_eq!(positioner.compute(anchor, viewport(), Side::Bottom, 6.0), first);
        }
    }

    #[test]
    fn test_alignment() {
        let anchor = AnchorMeasurement::new(100.0, 300.0, 200.0, 30.0);
        let start = tooltip().with_align(Align::Start);
        assert_eq!(start.compute(anchor, viewport(), Side::Bottom, 8.0).left, 100.0);

        let end = tooltip().with_align(Align::End);
        assert_eq!(end.compute(anchor, viewport(), Side::Bottom, 8.0).left, 180.0);
    }

    #[test]
    fn test_auto_flip_opt_in() {
        let anchor = AnchorMeasurement::new(100.0, 20.0, 80.0, 30.0);

        let plain = tooltip().compute(anchor, viewport(), Side::Top, 8.0);
        assert_eq!(plain.side, Side::Top);

        let flipping = tooltip().with_auto_flip(true);
        let placed = flipping.compute(anchor, viewport(), Side::Top, 8.0);
        assert_eq!(placed.side, Side::Bottom);
        assert_eq!(placed.top, 58.0);

        // Room on the requested side: no flip
        let low = AnchorMeasurement::new(100.0, 400.0, 80.0, 30.0);
        assert_eq!(flipping.compute(low, viewport(), Side::Top, 8.0).side, Side::Top);

        // No room on either side: keep the requested side
        let cramped = ViewportBounds::new(400.0, 60.0);
        let placed = flipping.compute(AnchorMeasurement::new(0.0, 10.0, 40.0, 40.0), cramped, Side::Top, 8.0);
        assert_eq!(placed.side, Side::Top);
    }

    #[test]
    fn test_degenerate_viewport_pins_to_inset() {
        let positioner = tooltip();
        let anchor = AnchorMeasurement::new(100.0, 300.0, 80.0, 30.0);

        let placed = positioner.compute(anchor, ViewportBounds::new(0.0, 0.0), Side::Bottom, 8.0);
        assert_eq!((placed.top, placed.left), (10.0, 10.0));

        let placed =
            positioner.compute(anchor, ViewportBounds::new(f32::NAN, 800.0), Side::Top, 8.0);
        assert_eq!((placed.top, placed.left), (10.0, 10.0));

        // Wider than the viewport
        let placed = positioner.compute(anchor, ViewportBounds::new(100.0, 800.0), Side::Top, 8.0);
        assert_eq!(placed.left, 10.0);
        assert_eq!(placed.top, 252.0);
    }

    #[test]
    fn test_malformed_anchor() {
        let anchor = AnchorMeasurement::new(f32::NAN, f32::INFINITY, 10.0, 10.0);
        let placed = tooltip().compute(anchor, viewport(), Side::Bottom, f32::NAN);
        assert!(placed.top.is_finite() && placed.left.is_finite());
        assert_eq!(placed.top, 10.0);
    }
}
