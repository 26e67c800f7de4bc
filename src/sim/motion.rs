//! Angular motion shared by the planet and the star
//!
//! Both bodies hold an [`AngularMotion`] and advance it with [`integrate`].

use serde::{Deserialize, Serialize};

/// Steering input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Negative,
    #[default]
    None,
    Positive,
}

impl Direction {
    /// Signed multiplier applied to the acceleration
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Negative => -1.0,
            Direction::None => 0.0,
            Direction::Positive => 1.0,
        }
    }
}

/// Angle, angular speed, and the constants that drive them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularMotion {
    /// Radians
    pub angle: f64,
    /// Radians per tick
    pub speed: f64,
    pub acceleration: f64,
    /// Per-tick damping factor in (0, 1)
    pub friction: f64,
}

impl AngularMotion {
    pub fn new(angle: f64, speed: f64, acceleration: f64, friction: f64) -> Self {
        Self {
            angle,
            speed,
            acceleration,
            friction,
        }
    }

    /// Speed approached under constant input: a·f / (1 - f)
    pub fn terminal_speed(&self) -> f64 {
        self.acceleration * self.friction / (1.0 - self.friction)
    }
}

/// Advance one tick: accelerate, then damp, then move.
///
/// The order fixes the steady-state bound at exactly [`AngularMotion::terminal_speed`].
#[inline]
pub fn integrate(body: &mut AngularMotion, direction: Direction) {
    body.speed += body.acceleration * direction.sign();
    body.speed *= body.friction;
    body.angle += body.speed;
}
