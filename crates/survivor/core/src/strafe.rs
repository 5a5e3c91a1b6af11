//! Evasive strafe: keep moving along the old heading while turning around.

use core::f32::consts::PI;

use crate::agent::AgentInfo;
use crate::math::{Vec2, angle_delta};

/// State of an in-progress 180° strafe turn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrafeInfo {
    pub start_orientation: f32,
    pub end_orientation: f32,
    pub start_velocity: Vec2,
    pub active: bool,
}

impl StrafeInfo {
    /// Records the start of a strafe from the agent's current motion.
    pub fn begin(agent: &AgentInfo) -> Self {
        Self {
            start_orientation: agent.orientation,
            end_orientation: agent.orientation + PI,
            start_velocity: agent.linear_velocity,
            active: true,
        }
    }

    /// Whether `orientation` has reached the end orientation within `tolerance`.
    ///
    /// Compared on the circle, so host wrap-around does not matter.
    pub fn is_complete(&self, orientation: f32, tolerance: f32) -> bool {
        angle_delta(self.end_orientation, orientation).abs() < tolerance
    }

    /// Point to keep seeking while turning.
    pub fn seek_point(&self, position: Vec2) -> Vec2 {
        position + self.start_velocity * 5.0
    }

    /// Point to face while turning.
    pub fn face_point(&self, position: Vec2) -> Vec2 {
        position + Vec2::from_orientation(self.end_orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_targets_reverse_heading() {
        let agent = AgentInfo {
            orientation: 0.5,
            linear_velocity: Vec2::new(1.0, 2.0),
            ..AgentInfo::default()
        };
        let strafe = StrafeInfo::begin(&agent);
        assert!(strafe.active);
        assert!((strafe.end_orientation - (0.5 + PI)).abs() < 1e-6);
        assert_eq!(strafe.seek_point(Vec2::ZERO), Vec2::new(5.0, 10.0));
    }

    #[test]
    fn completion_handles_wrapped_orientation() {
        let agent = AgentInfo {
            orientation: 3.0,
            ..AgentInfo::default()
        };
        let strafe = StrafeInfo::begin(&agent);
        // Host reports the end orientation wrapped into (-π, π].
        let wrapped = 3.0 + PI - 2.0 * PI;
        assert!(strafe.is_complete(wrapped, 0.01));
        assert!(!strafe.is_complete(3.0, 0.01));
    }
}
