//! Reinforcement-learning style wrapper around a session
//!
//! `reset()` starts a fresh session and returns the first observation;
//! `step(action)` advances one tick. An episode ends on the first collision.

use std::f64::consts::TAU;

use crate::error::{Result, SimError};
use crate::normalize_angle;
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};

/// Number of nearest beams encoded in an observation by default
pub const DEFAULT_NEAREST_BEAMS: usize = 5;
/// Features per encoded beam
pub const BEAM_FEATURES: usize = 4;
/// Planet features at the start of every observation
pub const PLANET_FEATURES: usize = 3;
/// Filler for missing beam slots
pub const PAD_VALUE: f64 = -1.0;

pub const COLLISION_REWARD: f64 = -100.0;
pub const SURVIVAL_REWARD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Coast,
    /// Accelerate in the positive angular direction
    Left,
    /// Accelerate in the negative angular direction
    Right,
}

impl TryFrom<u8> for Action {
    type Error = SimError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Action::Coast),
            1 => Ok(Action::Left),
            2 => Ok(Action::Right),
            other => Err(SimError::InvalidAction(other)),
        }
    }
}

impl Action {
    fn to_input(self) -> TickInput {
        TickInput {
            left: self == Action::Left,
            right: self == Action::Right,
            autopilot: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    pub score: i64,
    pub kill_count: u64,
    pub hits: u32,
    pub dodges: u32,
    pub time_ticks: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Vec<f64>,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

pub struct OrbitEnv {
    state: GameState,
    nearest_beams: usize,
}

impl OrbitEnv {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed, DEFAULT_NEAREST_BEAMS)
    }

    pub fn with_settings(settings: Settings, seed: u64, nearest_beams: usize) -> Self {
        Self {
            state: GameState::with_settings(settings, seed),
            nearest_beams,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Length of every observation vector
    pub fn observation_len(&self) -> usize {
        PLANET_FEATURES + BEAM_FEATURES * self.nearest_beams
    }

    /// Start a new episode from the stored seed
    pub fn reset(&mut self) -> Vec<f64> {
        self.state.reset();
        self.observation()
    }

    pub fn step(&mut self, action: Action) -> Step {
        let report = tick(&mut self.state, &action.to_input());
        let done = report.collided();
        let reward = if done {
            COLLISION_REWARD
        } else {
            SURVIVAL_REWARD + report.score_delta as f64
        };
        Step {
            observation: self.observation(),
            reward,
            done,
            info: StepInfo {
                score: self.state.score,
                kill_count: self.state.kill_count,
                hits: report.hits,
                dodges: report.dodges,
                time_ticks: self.state.time_ticks,
            },
        }
    }

    /// Decode a raw action code and step
    pub fn step_code(&mut self, code: u8) -> Result<Step> {
        Ok(self.step(Action::try_from(code)?))
    }

    /// Planet features followed by the nearest beams by radial distance
    pub fn observation(&self) -> Vec<f64> {
        let planet = &self.state.planet;
        let half_height = self.state.settings.half_screen_height();
        let orbit = planet.orbit_radius;

        let mut obs = Vec::with_capacity(self.observation_len());
        obs.push(planet.angle().rem_euclid(TAU) / TAU);
        obs.push(planet.speed());
        obs.push(orbit / half_height);

        let mut beams: Vec<_> = self.state.star.beams.iter().collect();
        beams.sort_by(|a, b| {
            (a.radius() - orbit)
                .abs()
                .total_cmp(&(b.radius() - orbit).abs())
        });

        for beam in beams.iter().take(self.nearest_beams) {
            let g = &beam.geometry;
            obs.push((g.radius - orbit) / half_height);
            obs.push(normalize_angle(g.angle - planet.angle()));
            obs.push(g.arc_range);
            obs.push(g.width / half_height);
        }
        obs.resize(self.observation_len(), PAD_VALUE);
        obs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ArcGeometry, Beam};
    use std::f64::consts::PI;

    fn quiet_env(nearest: usize) -> OrbitEnv {
        let settings = Settings {
            beam_spawn_chance: 0.0,
            ..Default::default()
        };
        OrbitEnv::with_settings(settings, 11, nearest)
    }

    fn add_beam(env: &mut OrbitEnv, angle: f64, radius: f64) {
        let center = env.state.star.center;
        env.state
            .star
            .beams
            .push(Beam::new(ArcGeometry::new(center, angle, PI / 6.0, radius, 10.0)));
    }

    #[test]
    fn test_action_codes() {
        assert_eq!(Action::try_from(0).unwrap(), Action::Coast);
        assert_eq!(Action::try_from(1).unwrap(), Action::Left);
        assert_eq!(Action::try_from(2).unwrap(), Action::Right);
        assert!(matches!(Action::try_from(3), Err(SimError::InvalidAction(3))));
    }

    #[test]
    fn test_reset_observation_padded() {
        let mut env = quiet_env(3);
        let obs = env.reset();
        assert_eq!(obs.len(), 3 + 4 * 3);
        assert!((obs[0] - 0.25).abs() < 1e-12); // initial angle π/2
        assert_eq!(obs[1], 0.0);
        assert!((obs[2] - 225.0 / 400.0).abs() < 1e-12);
        assert!(obs[3..].iter().all(|&v| v == PAD_VALUE));
    }

    #[test]
    fn test_nearest_beams_sorted() {
        let mut env = quiet_env(2);
        add_beam(&mut env, 0.0, 100.0);
        add_beam(&mut env, 1.0, 230.0);
        add_beam(&mut env, 2.0, 200.0);
        let obs = env.observation();
        assert_eq!(obs.len(), 11);
        // Nearest first: 230 (5 away), then 200 (25 away); 100 is dropped
        assert!((obs[3] - 5.0 / 400.0).abs() < 1e-12);
        assert!((obs[4] - normalize_angle(1.0 - PI / 2.0)).abs() < 1e-12);
        assert!((obs[5] - PI / 6.0).abs() < 1e-12);
        assert!((obs[6] - 10.0 / 400.0).abs() < 1e-12);
        assert!((obs[7] + 25.0 / 400.0).abs() < 1e-12);
    }

    #[test]
    fn test_survival_reward() {
        let mut env = quiet_env(5);
        env.reset();
        let step = env.step(Action::Coast);
        assert!(!step.done);
        assert!((step.reward - 0.1).abs() < 1e-12);
        assert_eq!(step.info.time_ticks, 1);
    }

    #[test]
    fn test_dodge_reward() {
        let mut env = quiet_env(5);
        env.reset();
        // Planet at π/2, beam well off to the side; after growing its back
        // edge 248 - 10 - 12 = 226 has cleared the orbit
        add_beam(&mut env, PI, 246.0);
        let step = env.step(Action::Coast);
        assert_eq!(step.info.dodges, 1);
        assert!((step.reward - 10.1).abs() < 1e-12);
    }

    #[test]
    fn test_collision_ends_episode() {
        let mut env = quiet_env(5);
        env.reset();
        // Planet sits at π/2; beam and planet angles summing to π line up
        add_beam(&mut env, PI / 2.0, 220.0);
        let step = env.step(Action::Coast);
        assert!(step.done);
        assert_eq!(step.reward, COLLISION_REWARD);
        assert_eq!(step.info.kill_count, 1);
        assert_eq!(step.info.hits, 1);

        let obs = env.reset();
        assert_eq!(env.state().kill_count, 0);
        assert_eq!(obs.len(), env.observation_len());
    }

    #[test]
    fn test_step_code() {
        let mut env = quiet_env(5);
        env.reset();
        let step = env.step_code(1).unwrap();
        assert!(step.observation[1] > 0.0);
        assert!(env.step_code(9).is_err());
    }
}
