//! Expanding square search.
//!
//! A deterministic outward square spiral around the starting point. Legs grow
//! every second step and the direction cycles left, up, right, down:
//!
//! ```text
//!        (-25,25) ---> (25,25)
//!           ^             |
//!           |    (0,0)    |
//!        (-25,0) <--'     v
//!                    ... (25,-25)
//! ```
//!
//! No record of visited cells is needed. The walk is "exhausted" once the
//! waypoint leaves the world rectangle on either axis, which is a bounds check
//! and not a coverage guarantee.

use strum::Display;

use crate::agent::WorldInfo;
use crate::math::Vec2;

/// Leg direction for a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const fn for_step(step: u32) -> Self {
        match step % 4 {
            0 => Direction::Left,
            1 => Direction::Up,
            2 => Direction::Right,
            _ => Direction::Down,
        }
    }

    pub const fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
        }
    }
}

/// Exploration cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandingSearch {
    /// Base leg distance `d`.
    pub leg: f32,
    /// Number of legs walked so far.
    pub step: u32,
    /// Current waypoint.
    pub waypoint: Vec2,
}

impl ExpandingSearch {
    pub fn new(leg: f32, origin: Vec2) -> Self {
        Self {
            leg,
            step: 0,
            waypoint: origin,
        }
    }

    /// Length of leg `step`: `d * (1 + floor(step / 2))`.
    pub fn leg_length(&self, step: u32) -> f32 {
        self.leg * (1 + step / 2) as f32
    }

    /// Whether `position` is close enough to the waypoint to start the next leg.
    pub fn has_arrived(&self, position: Vec2, margin_sq: f32) -> bool {
        self.waypoint.distance_squared(position) < margin_sq
    }

    /// Moves the waypoint along the next leg and returns it.
    pub fn advance(&mut self) -> Vec2 {
        let length = self.leg_length(self.step);
        let direction = Direction::for_step(self.step);
        self.waypoint += direction.unit() * length;
        self.step += 1;
        self.waypoint
    }

    /// Advances only when `position` has reached the waypoint.
    ///
    /// Returns `true` if the waypoint moved.
    pub fn advance_if_arrived(&mut self, position: Vec2, margin_sq: f32) -> bool {
        if self.has_arrived(position, margin_sq) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn is_exhausted(&self, world: &WorldInfo) -> bool {
        !world.contains(self.waypoint)
    }
}
