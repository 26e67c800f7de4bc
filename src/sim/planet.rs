//! The player's planet and its motion trail

use std::collections::VecDeque;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::motion::{AngularMotion, Direction, integrate};
use crate::consts::EARTH;
use crate::error::SimError;
use crate::polar_to_cartesian;
use crate::settings::Settings;

/// Fixed-capacity FIFO of past positions; the oldest point is evicted first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredTrail")]
pub struct TrailHistory {
    points: VecDeque<DVec2>,
    capacity: usize,
}

/// Unchecked wire form, validated into a [`TrailHistory`]
#[derive(Deserialize)]
struct StoredTrail {
    points: VecDeque<DVec2>,
    capacity: usize,
}

impl TryFrom<StoredTrail> for TrailHistory {
    type Error = SimError;

    fn try_from(stored: StoredTrail) -> Result<Self, Self::Error> {
        if stored.points.len() > stored.capacity {
            return Err(SimError::TrailOverflow {
                len: stored.points.len(),
                capacity: stored.capacity,
            });
        }
        Ok(Self {
            points: stored.points,
            capacity: stored.capacity,
        })
    }
}

impl TrailHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: DVec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DVec2> + ExactSizeIterator {
        self.points.iter()
    }

    /// The newest `count` points, oldest first
    pub fn newest(&self, count: usize) -> Vec<DVec2> {
        let skip = self.points.len().saturating_sub(count);
        self.points.iter().skip(skip).copied().collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    /// Center of the orbit
    pub center: DVec2,
    pub orbit_radius: f64,
    pub size: f64,
    pub color: [u8; 3],
    pub motion: AngularMotion,
    /// Derived from `motion.angle` after every update
    pub position: DVec2,
    pub trail: TrailHistory,
    /// Speed change produced by the last update, for the HUD
    pub last_acceleration_delta: f64,
    /// Arc length between interpolated trail points
    trail_step: f64,
}

impl Planet {
    pub fn new(settings: &Settings) -> Self {
        let center = settings.center();
        let angle = settings.planet_initial_angle;
        Self {
            center,
            orbit_radius: settings.planet_orbit_radius,
            size: settings.planet_size,
            color: EARTH,
            motion: AngularMotion::new(
                angle,
                0.0,
                settings.planet_acceleration,
                settings.planet_friction,
            ),
            position: polar_to_cartesian(center, settings.planet_orbit_radius, angle),
            trail: TrailHistory::new(settings.trail_max_length),
            last_acceleration_delta: 0.0,
            trail_step: settings.trail_step,
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.motion.angle
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.motion.speed
    }

    /// Steady-state speed under constant input
    pub fn max_speed(&self) -> f64 {
        self.motion.terminal_speed()
    }

    /// Apply one tick of player input
    pub fn update(&mut self, direction: Direction) {
        let speed_before = self.motion.speed;
        let angle_before = self.motion.angle;

        integrate(&mut self.motion, direction);

        self.last_acceleration_delta = self.motion.speed - speed_before;
        self.position = polar_to_cartesian(self.center, self.orbit_radius, self.motion.angle);
        self.record_trail(angle_before, self.motion.angle);
    }

    /// Spread this tick's angular travel over evenly spaced trail points
    fn record_trail(&mut self, angle_before: f64, angle_after: f64) {
        let delta = angle_after - angle_before;
        let arc_length = delta.abs() * self.orbit_radius;
        let steps = if arc_length.is_finite() && self.trail_step > 0.0 {
            (arc_length / self.trail_step).floor() as usize + 1
        } else {
            1
        };

        // Points older than the capacity would be evicted immediately
        let first = steps.saturating_sub(self.trail.capacity()) + 1;
        for i in first..=steps {
            let angle = if i == steps {
                angle_after
            } else {
                angle_before + delta * (i as f64 / steps as f64)
            };
            self.trail
                .push(polar_to_cartesian(self.center, self.orbit_radius, angle));
        }
    }

    /// Fraction of the trail to show, proportional to speed
    pub fn trail_ratio(&self) -> f64 {
        let max = self.max_speed();
        if max > 0.0 {
            (self.motion.speed.abs() / max).min(1.0)
        } else {
            0.0
        }
    }

    /// Trail points a renderer should draw at the current speed, oldest first
    pub fn visible_trail(&self) -> Vec<DVec2> {
        let count = (self.trail.len() as f64 * self.trail_ratio()).ceil() as usize;
        self.trail.newest(count)
    }
}
