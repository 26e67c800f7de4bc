//! The star: a randomly steered turret with three cannons
//!
//! Steering is a biased random walk with no knowledge of the planet, so
//! difficulty does not depend on where the player is.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arc::{ArcGeometry, ArcStroke};
use super::beam::Beam;
use super::motion::{AngularMotion, Direction, integrate};
use crate::consts::{CANNON_COUNT, CANNON_RECOIL, CANNON_RECOVERY, STEER_WEIGHTS, SUN};
use crate::settings::Settings;

/// What happened to the beam list during one star update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarUpdate {
    pub spawned: u32,
    pub expired: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub center: DVec2,
    pub size: f64,
    pub motion: AngularMotion,
    /// Angular span of each cannon and of the beams it fires
    pub arc_range: f64,
    /// Per-cannon flash radius; dips on firing and recovers to `size`
    pub cannon_radii: [f64; CANNON_COUNT],
    pub random_direction: Direction,
    pub random_timer: u32,
    pub beam_timer: u32,
    /// Live beams in spawn order
    pub beams: Vec<Beam>,
}

impl Star {
    pub fn new<R: Rng>(settings: &Settings, rng: &mut R) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let spin = settings.star_initial_speed_range;
        let speed = if spin > 0.0 {
            rng.random_range(-spin..spin)
        } else {
            0.0
        };
        Self {
            center: settings.center(),
            size: settings.star_size,
            motion: AngularMotion::new(
                angle,
                speed,
                settings.star_acceleration,
                settings.star_friction,
            ),
            arc_range: settings.arc_range,
            cannon_radii: [settings.star_size; CANNON_COUNT],
            random_direction: Direction::None,
            random_timer: 0,
            beam_timer: 0,
            beams: Vec::new(),
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.motion.angle
    }

    /// Angle of cannon `i`, spaced evenly around the star
    #[inline]
    pub fn cannon_angle(&self, i: usize) -> f64 {
        self.motion.angle + (TAU / CANNON_COUNT as f64) * i as f64
    }

    /// Advance one tick: age beams, steer, fire, recover flashes, spin
    pub fn update<R: Rng>(&mut self, settings: &Settings, rng: &mut R) -> StarUpdate {
        let mut report = StarUpdate::default();

        // Age before spawning so a new beam is not advanced in its spawn tick
        let before = self.beams.len();
        self.beams = std::mem::take(&mut self.beams)
            .into_iter()
            .filter_map(|mut beam| {
                beam.advance(settings.beam_speed);
                beam.is_alive(settings.beam_max_radius).then_some(beam)
            })
            .collect();
        report.expired = (before - self.beams.len()) as u32;

        self.random_timer += 1;
        self.beam_timer += 1;

        let interval = settings.fire_interval_ticks();
        if self.random_timer >= interval {
            self.random_timer = 0;
            self.random_direction = roll_direction(rng);
        }

        if self.beam_timer >= interval {
            self.beam_timer = 0;
            for i in 0..CANNON_COUNT {
                if rng.random::<f64>() < settings.beam_spawn_chance {
                    self.fire(i, settings);
                    report.spawned += 1;
                }
            }
        }

        for radius in &mut self.cannon_radii {
            if *radius < self.size {
                *radius = (*radius + CANNON_RECOVERY).min(self.size);
            }
        }

        integrate(&mut self.motion, self.random_direction);

        report
    }

    fn fire(&mut self, cannon: usize, settings: &Settings) {
        let geometry = ArcGeometry::new(
            self.center,
            self.cannon_angle(cannon),
            self.arc_range,
            self.size,
            settings.beam_width(),
        );
        log::debug!(
            "Cannon {} fired at angle {:.3} ({} live beams)",
            cannon,
            geometry.angle,
            self.beams.len() + 1
        );
        self.beams.push(Beam::new(geometry));
        self.cannon_radii[cannon] = self.size * CANNON_RECOIL;
    }

    /// Cannon arcs for drawing, one per cannon
    pub fn cannon_strokes(&self) -> Vec<ArcStroke> {
        let width = (self.size / 4.0).floor();
        (0..CANNON_COUNT)
            .filter_map(|i| {
                ArcGeometry::new(
                    self.center,
                    self.cannon_angle(i),
                    self.arc_range,
                    self.cannon_radii[i],
                    width,
                )
                .stroke(SUN, 1.0, width)
            })
            .collect()
    }
}

/// Biased random walk: -1 and +1 at 40% each, 0 at 20%
fn roll_direction<R: Rng>(rng: &mut R) -> Direction {
    let [neg, none, pos] = STEER_WEIGHTS;
    let roll = rng.random_range(0..neg + none + pos);
    if roll < neg {
        Direction::Negative
    } else if roll < neg + none {
        Direction::None
    } else {
        Direction::Positive
    }
}
