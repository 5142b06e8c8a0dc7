//! Position, velocity, and movement integration.

use crate::types::Vec2;

/// Velocity decay applied each integration step while coasting.
const FRICTION: f32 = 0.8;

/// Per-axis speed below which velocity snaps to zero.
const STOP_EPSILON: f32 = 0.1;

/// World position plus a velocity driven by direction-and-speed steering.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementComponent {
    pub position: Vec2,
    pub velocity: Vec2,
    pub speed: f32,
}

impl MovementComponent {
    pub const fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            speed,
        }
    }

    /// Points the velocity along `direction` at full speed.
    ///
    /// The direction is normalized first, so callers can pass any non-zero
    /// vector. A zero direction stops the entity.
    pub fn set_direction(&mut self, direction: Vec2) {
        self.velocity = direction.normalized() * self.speed;
    }

    /// Zeroes the velocity immediately.
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Advances the position by one step of `dt` seconds and applies
    /// friction so released entities coast to a stop.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;

        self.velocity = self.velocity * FRICTION;
        if self.velocity.x.abs() < STOP_EPSILON {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < STOP_EPSILON {
            self.velocity.y = 0.0;
        }
    }
}
