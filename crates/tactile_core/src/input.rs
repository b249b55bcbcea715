//! Normalized gesture input
//!
//! The host gesture layer reduces platform touch/pointer events to a stream of
//! [`GestureSample`]s. Deltas are cumulative from the point where the gesture
//! began, in logical pixels; velocities are in logical pixels per second.

use crate::geometry::Axis;

/// Lifecycle phase of a gesture sample
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Finger down / drag recognized
    Begin,
    /// Finger moved
    Move,
    /// Finger lifted
    End,
    /// A competing gesture won; resolve with the last known delta
    Cancel,
}

/// One normalized gesture sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Horizontal displacement since `Begin`
    pub delta_x: f32,
    /// Vertical displacement since `Begin`
    pub delta_y: f32,
    /// Horizontal release velocity, when the host tracks it
    pub velocity_x: Option<f32>,
    /// Vertical release velocity, when the host tracks it
    pub velocity_y: Option<f32>,
    /// Host timestamp, used for velocity estimation when velocities are absent
    pub timestamp_ms: Option<u64>,
}

impl GestureSample {
    fn with_phase(phase: GesturePhase, delta_x: f32, delta_y: f32) -> Self {
        Self {
            phase,
            delta_x,
            delta_y,
            velocity_x: None,
            velocity_y: None,
            timestamp_ms: None,
        }
    }

    pub fn begin() -> Self {
        Self::with_phase(GesturePhase::Begin, 0.0, 0.0)
    }

    pub fn moved(delta_x: f32, delta_y: f32) -> Self {
        Self::with_phase(GesturePhase::Move, delta_x, delta_y)
    }

    pub fn end(delta_x: f32, delta_y: f32) -> Self {
        Self::with_phase(GesturePhase::End, delta_x, delta_y)
    }

    pub fn cancel(delta_x: f32, delta_y: f32) -> Self {
        Self::with_phase(GesturePhase::Cancel, delta_x, delta_y)
    }

    /// Attach release velocities
    pub fn with_velocity(mut self, velocity_x: f32, velocity_y: f32) -> Self {
        self.velocity_x = Some(velocity_x);
        self.velocity_y = Some(velocity_y);
        self
    }

    /// Attach a host timestamp
    pub fn at(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Displacement along an axis
    pub fn delta_along(&self, axis: Axis) -> f32 {
        axis.select(self.delta_x, self.delta_y)
    }

    /// Velocity along an axis, if the host supplied one
    pub fn velocity_along(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.velocity_x,
            Axis::Vertical => self.velocity_y,
        }
    }

    /// Whether this sample terminates the gesture
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, GesturePhase::End | GesturePhase::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_axis_selection() {
        let sample = GestureSample::moved(12.0, -3.0).with_velocity(100.0, -40.0);
        assert_eq!(sample.delta_along(Axis::Horizontal), 12.0);
        assert_eq!(sample.delta_along(Axis::Vertical), -3.0);
        assert_eq!(sample.velocity_along(Axis::Vertical), Some(-40.0));
        assert!(!sample.is_terminal());
        assert!(GestureSample::cancel(0.0, 0.0).is_terminal());
    }
}
