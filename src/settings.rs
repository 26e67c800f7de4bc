//! Game tuning settings
//!
//! Every tunable mirrors a constant in [`crate::consts`]. Settings files are
//! JSON; missing keys fall back to the compile-time defaults, so a file can
//! override just the values you care about.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Runtime-tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Simulation ticks per second
    pub fps: u32,

    // === Arena ===
    pub screen_width: f64,
    pub screen_height: f64,

    // === Planet ===
    pub planet_size: f64,
    pub planet_orbit_radius: f64,
    pub planet_initial_angle: f64,
    pub planet_acceleration: f64,
    pub planet_friction: f64,

    // === Star ===
    pub star_size: f64,
    pub star_acceleration: f64,
    pub star_friction: f64,
    pub star_initial_speed_range: f64,
    pub arc_range: f64,

    // === Cannons & beams ===
    pub beam_spawn_chance: f64,
    pub beam_speed: f64,
    pub beam_max_radius: f64,

    // === Scoring ===
    pub hit_penalty: i64,
    pub dodge_bonus: i64,

    // === Trail ===
    pub trail_max_length: usize,
    pub trail_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            planet_size: PLANET_SIZE,
            planet_orbit_radius: PLANET_ORBIT_RADIUS,
            planet_initial_angle: PLANET_INITIAL_ANGLE,
            planet_acceleration: PLANET_ACCELERATION,
            planet_friction: PLANET_FRICTION,

            star_size: STAR_SIZE,
            star_acceleration: STAR_ACCELERATION,
            star_friction: STAR_FRICTION,
            star_initial_speed_range: STAR_INITIAL_SPEED_RANGE,
            arc_range: STAR_ARC_RANGE,

            beam_spawn_chance: BEAM_SPAWN_CHANCE,
            beam_speed: BEAM_SPEED,
            beam_max_radius: BEAM_MAX_RADIUS,

            hit_penalty: HIT_PENALTY,
            dodge_bonus: DODGE_BONUS,

            trail_max_length: TRAIL_MAX_LENGTH,
            trail_step: TRAIL_STEP,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SimError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).inspect_err(|err| {
            log::warn!("Rejected settings file {}: {}", path.display(), err);
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SimError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<()> {
        check_positive("fps", self.fps as f64)?;
        check_positive("screen_width", self.screen_width)?;
        check_positive("screen_height", self.screen_height)?;
        check_positive("planet_size", self.planet_size)?;
        check_positive("planet_orbit_radius", self.planet_orbit_radius)?;
        check_non_negative("planet_acceleration", self.planet_acceleration)?;
        check_friction("planet_friction", self.planet_friction)?;
        check_positive("star_size", self.star_size)?;
        check_non_negative("star_acceleration", self.star_acceleration)?;
        check_friction("star_friction", self.star_friction)?;
        check_non_negative("star_initial_speed_range", self.star_initial_speed_range)?;
        check_positive("arc_range", self.arc_range)?;
        check_positive("beam_speed", self.beam_speed)?;
        check_positive("trail_step", self.trail_step)?;
        check_positive("trail_max_length", self.trail_max_length as f64)?;

        if !(0.0..=1.0).contains(&self.beam_spawn_chance) {
            return Err(SimError::InvalidSetting {
                name: "beam_spawn_chance",
                value: self.beam_spawn_chance,
                expected: "in [0, 1]",
            });
        }
        if self.fire_interval_ticks() == 0 {
            return Err(SimError::InvalidSetting {
                name: "fps",
                value: self.fps as f64,
                expected: "at least 8 so beams have a firing window",
            });
        }
        if self.beam_max_radius.is_nan() || self.beam_max_radius <= self.star_size {
            return Err(SimError::InvalidSetting {
                name: "beam_max_radius",
                value: self.beam_max_radius,
                expected: "greater than star_size",
            });
        }
        Ok(())
    }

    /// Ticks between star steering changes and firing windows
    pub fn fire_interval_ticks(&self) -> u32 {
        self.fps / 8
    }

    /// Lifetime of a beam corpse in ticks
    pub fn corpse_duration(&self) -> i32 {
        (self.fps / 4) as i32
    }

    /// Steady-state planet speed under constant input
    pub fn planet_max_speed(&self) -> f64 {
        self.planet_acceleration * self.planet_friction / (1.0 - self.planet_friction)
    }

    /// Beam stroke width, derived from the star size
    pub fn beam_width(&self) -> f64 {
        (self.star_size / 4.0).floor()
    }

    pub fn half_screen_height(&self) -> f64 {
        self.screen_height / 2.0
    }

    /// Shared center of the star and the planet's orbit
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            expected: "a finite value greater than 0",
        })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            expected: "a finite value of at least 0",
        })
    }
}

fn check_friction(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            expected: "in (0, 1)",
        })
    }
}
