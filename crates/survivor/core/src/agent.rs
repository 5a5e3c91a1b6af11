//! Per-tick agent snapshot, world bounds and the steering command.

use crate::math::Vec2;

/// Physical and vital state of the agent for one tick.
///
/// Supplied by the host and replaced wholesale every tick; never mutated by
/// the decision core.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentInfo {
    pub position: Vec2,
    /// Orientation in radians, host convention (see [`crate::math`]).
    pub orientation: f32,
    pub linear_velocity: Vec2,
    pub max_linear_speed: f32,
    pub max_angular_speed: f32,
    pub health: f32,
    pub energy: f32,
    pub fov_range: f32,
    pub fov_angle: f32,
    pub grab_range: f32,
    /// Currently being bitten.
    pub bitten: bool,
    /// Was bitten since the previous tick.
    pub was_bitten: bool,
}

impl AgentInfo {
    /// Unit vector the agent is facing.
    pub fn heading(&self) -> Vec2 {
        Vec2::from_orientation(self.orientation)
    }

    /// Whether `point` lies strictly inside the grab radius.
    pub fn can_grab(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) < self.grab_range * self.grab_range
    }
}

/// Axis-aligned bounds of the playable world.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldInfo {
    pub center: Vec2,
    pub dimensions: Vec2,
}

impl WorldInfo {
    pub fn new(center: Vec2, dimensions: Vec2) -> Self {
        Self { center, dimensions }
    }

    /// Coordinate-wise bounds check (inclusive edges).
    pub fn contains(&self, point: Vec2) -> bool {
        let half_width = self.dimensions.x / 2.0;
        let half_height = self.dimensions.y / 2.0;
        let inside_x =
            self.center.x - half_width <= point.x && point.x <= self.center.x + half_width;
        let inside_y =
            self.center.y - half_height <= point.y && point.y <= self.center.y + half_height;
        inside_x && inside_y
    }
}

/// Actuation record handed back to the host once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringOutput {
    pub linear_velocity: Vec2,
    pub angular_velocity: f32,
    pub run_mode: bool,
    /// When `false`, the host must not rotate the agent towards its velocity;
    /// `angular_velocity` is authoritative.
    pub auto_orient: bool,
}

impl Default for SteeringOutput {
    fn default() -> Self {
        Self {
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            run_mode: false,
            auto_orient: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_bounds_are_inclusive() {
        let world = WorldInfo::new(Vec2::ZERO, Vec2::new(100.0, 50.0));
        assert!(world.contains(Vec2::new(50.0, 25.0)));
        assert!(world.contains(Vec2::new(-50.0, -25.0)));
        assert!(!world.contains(Vec2::new(50.1, 0.0)));
        assert!(!world.contains(Vec2::new(0.0, -25.1)));
    }

    #[test]
    fn grab_range_is_strict() {
        let agent = AgentInfo {
            grab_range: 2.0,
            ..AgentInfo::default()
        };
        assert!(agent.can_grab(Vec2::new(1.9, 0.0)));
        assert!(!agent.can_grab(Vec2::new(2.0, 0.0)));
    }
}
