//! Session state and its lifecycle
//!
//! One `GameState` owns everything the tick mutates: the planet, the star
//! (and through it the live beams), the corpse list, score and RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::beam::BeamCorpse;
use super::planet::Planet;
use super::star::Star;
use crate::settings::Settings;

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub planet: Planet,
    pub star: Star,
    /// Fade-out markers of beams that hit the planet
    pub corpses: Vec<BeamCorpse>,
    pub score: i64,
    pub kill_count: u64,
    /// Player intent from the last tick's input
    pub left_active: bool,
    pub right_active: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed)
    }

    pub fn with_settings(settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let planet = Planet::new(&settings);
        let star = Star::new(&settings, &mut rng);
        log::info!(
            "New session: seed={} star_angle={:.3} star_speed={:.5}",
            seed,
            star.angle(),
            star.motion.speed
        );
        Self {
            seed,
            settings,
            planet,
            star,
            corpses: Vec::new(),
            score: 0,
            kill_count: 0,
            left_active: false,
            right_active: false,
            time_ticks: 0,
            rng,
        }
    }

    /// Replace the whole session, keeping settings and seed
    pub fn reset(&mut self) {
        self.restart(self.seed);
    }

    /// Replace the whole session with a new seed
    pub fn restart(&mut self, seed: u64) {
        log::info!(
            "Session restart after {} ticks (score={}, kills={})",
            self.time_ticks,
            self.score,
            self.kill_count
        );
        *self = Self::with_settings(self.settings.clone(), seed);
    }

    /// Seconds of simulated play
    pub fn elapsed_secs(&self) -> f64 {
        self.time_ticks as f64 / self.settings.fps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(12345);
        assert_eq!(state.score, 0);
        assert_eq!(state.kill_count, 0);
        assert!(state.corpses.is_empty());
        assert!(state.star.beams.is_empty());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_same_seed_same_star() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert_eq!(a.star.motion, b.star.motion);
        let c = GameState::new(100);
        assert_ne!(a.star.motion.angle, c.star.motion.angle);
    }

    #[test]
    fn test_reset_replaces_state() {
        let mut state = GameState::new(7);
        let star_angle = state.star.angle();
        state.score = -400;
        state.kill_count = 2;
        state.time_ticks = 500;
        state.planet.motion.angle = 3.0;
        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.kill_count, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.star.angle(), star_angle);
        assert_eq!(state.planet.angle(), state.settings.planet_initial_angle);
    }

    #[test]
    fn test_elapsed_secs() {
        let mut state = GameState::new(1);
        state.time_ticks = 240;
        assert!((state.elapsed_secs() - 2.0).abs() < 1e-12);
    }
}
