//! Orbital Survival - simulation core for a single-screen orbital dodging game
//!
//! A planet orbits a star that fires expanding arc-shaped beams. The player
//! accelerates the planet along its orbit to dodge them.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, beams, star AI, collisions, session state)
//! - `snapshot`: Read-only view of the session for rendering and HUD collaborators
//! - `env`: Reinforcement-learning style reset/step wrapper
//! - `settings`: Data-driven tuning with JSON overrides

pub mod env;
pub mod error;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use env::{Action, OrbitEnv, Step, StepInfo};
pub use error::{Result, SimError};
pub use settings::Settings;
pub use snapshot::RenderSnapshot;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    use std::f64::consts::PI;

    /// Fixed simulation rate (ticks per second)
    pub const FPS: u32 = 120;

    /// Screen dimensions; the shared orbit center sits in the middle
    pub const SCREEN_WIDTH: f64 = 1200.0;
    pub const SCREEN_HEIGHT: f64 = 800.0;

    /// Planet defaults
    pub const PLANET_SIZE: f64 = 12.0;
    pub const PLANET_ORBIT_RADIUS: f64 = 225.0;
    pub const PLANET_INITIAL_ANGLE: f64 = PI / 2.0; // bottom of the screen (y points down)
    pub const PLANET_ACCELERATION: f64 = 0.0004;
    pub const PLANET_FRICTION: f64 = 0.95;

    /// Star defaults
    pub const STAR_SIZE: f64 = 40.0;
    pub const STAR_ACCELERATION: f64 = 0.0010;
    pub const STAR_FRICTION: f64 = 0.99;
    /// Initial spin is drawn uniformly from [-x, x)
    pub const STAR_INITIAL_SPEED_RANGE: f64 = 0.005;
    /// Cannon / beam angular span (60 degrees of a half circle = 30 degrees)
    pub const STAR_ARC_RANGE: f64 = PI * 60.0 / 360.0;

    /// Cannons
    pub const CANNON_COUNT: usize = 3;
    /// Flash radius right after firing, as a fraction of nominal
    pub const CANNON_RECOIL: f64 = 0.75;
    /// Flash radius recovery per tick
    pub const CANNON_RECOVERY: f64 = 0.5;
    /// Per-cannon chance to fire on each firing window
    pub const BEAM_SPAWN_CHANCE: f64 = 0.20;

    /// Beams
    pub const BEAM_SPEED: f64 = 2.0;
    pub const BEAM_MAX_RADIUS: f64 = 450.0;

    /// Star steering weights for directions -1, 0, +1 (percent)
    pub const STEER_WEIGHTS: [u32; 3] = [40, 20, 40];

    /// Scoring
    pub const HIT_PENALTY: i64 = 200;
    pub const DODGE_BONUS: i64 = 10;

    /// Trail history
    pub const TRAIL_MAX_LENGTH: usize = 40;
    /// Target arc-length spacing between interpolated trail points
    pub const TRAIL_STEP: f64 = 4.0;

    /// Palette (RGB)
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const EARTH: [u8; 3] = [51, 153, 204];
    pub const SUN: [u8; 3] = [252, 130, 0];
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: DVec2, r: f64, theta: f64) -> DVec2 {
    center + DVec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle_range() {
        for &a in &[0.0, PI, -PI, 3.0 * PI, -7.5, 123.456, 1e6] {
            let n = normalize_angle(a);
            assert!((-PI..PI).contains(&n), "{a} -> {n}");
            // Same direction on the circle
            assert!((n.sin() - a.sin()).abs() < 1e-6);
            assert!((n.cos() - a.cos()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_normalize_angle_full_turn_is_zero() {
        assert!(normalize_angle(2.0 * PI).abs() < 1e-12);
        assert!((normalize_angle(PI) + PI).abs() < 1e-12);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let c = DVec2::new(600.0, 400.0);
        let p = polar_to_cartesian(c, 225.0, PI / 2.0);
        assert!((p.x - 600.0).abs() < 1e-9);
        assert!((p.y - 625.0).abs() < 1e-9);
    }
}
