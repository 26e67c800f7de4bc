//! Fixed timestep simulation tick
//!
//! Per tick: input -> planet -> star (beams age, AI, spawns) -> corpses ->
//! collision sweep. Collision therefore sees this tick's positions for both
//! bodies.

use super::collision::{age_corpses, angle_diff, angle_margin, sweep};
use super::motion::Direction;
use super::state::GameState;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Accelerate in the positive angular direction
    pub left: bool,
    /// Accelerate in the negative angular direction
    pub right: bool,
    /// Demo mode - the autopilot steers and the buttons are ignored
    pub autopilot: bool,
}

impl TickInput {
    /// Left wins if both are held
    pub fn direction(&self) -> Direction {
        if self.left {
            Direction::Positive
        } else if self.right {
            Direction::Negative
        } else {
            Direction::None
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub hits: u32,
    pub dodges: u32,
    pub score_delta: i64,
    pub spawned: u32,
    pub expired: u32,
}

impl TickReport {
    pub fn collided(&self) -> bool {
        self.hits > 0
    }
}

/// How far inside the orbit the autopilot starts reacting to a beam
const AUTOPILOT_LOOKAHEAD: f64 = 90.0;
/// Extra angular clearance the autopilot keeps from a beam's edge
const AUTOPILOT_CLEARANCE: f64 = 0.15;

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    state.time_ticks += 1;

    let direction = if input.autopilot {
        let direction = autopilot_direction(state);
        state.left_active = direction == Direction::Positive;
        state.right_active = direction == Direction::Negative;
        direction
    } else {
        state.left_active = input.left;
        state.right_active = input.right;
        input.direction()
    };

    state.planet.update(direction);
    let star_report = state.star.update(&state.settings, &mut state.rng);

    state.corpses = age_corpses(std::mem::take(&mut state.corpses));

    let outcome = sweep(
        std::mem::take(&mut state.star.beams),
        &state.planet,
        state.settings.corpse_duration(),
    );
    state.star.beams = outcome.survivors;
    state.corpses.extend(outcome.corpses);

    let score_delta = outcome.dodges as i64 * state.settings.dodge_bonus
        - outcome.hits as i64 * state.settings.hit_penalty;
    state.kill_count += outcome.hits as u64;
    state.score += score_delta;

    if outcome.hits > 0 {
        log::debug!(
            "Tick {}: {} hit(s), score={}, kills={}",
            state.time_ticks,
            outcome.hits,
            state.score,
            state.kill_count
        );
    }
    log::trace!(
        "Tick {}: beams={} corpses={} planet_speed={:.5}",
        state.time_ticks,
        state.star.beams.len(),
        state.corpses.len(),
        state.planet.speed()
    );

    TickReport {
        hits: outcome.hits,
        dodges: outcome.dodges,
        score_delta,
        spawned: star_report.spawned,
        expired: star_report.expired,
    }
}

/// Steer away from the most urgent incoming beam, or coast
pub fn autopilot_direction(state: &GameState) -> Direction {
    let planet = &state.planet;
    let orbit = planet.orbit_radius;
    let margin = angle_margin(orbit, planet.size);

    // Nearest beam still inside the orbit whose span covers the planet
    let threat = state
        .star
        .beams
        .iter()
        .filter(|beam| {
            let gap = orbit - beam.geometry.front_radius(planet.size);
            (-planet.size..AUTOPILOT_LOOKAHEAD).contains(&gap)
        })
        .map(|beam| {
            let diff = angle_diff(planet.angle(), beam.geometry.angle);
            let reach = beam.geometry.arc_range / 2.0 + margin + AUTOPILOT_CLEARANCE;
            (beam.radius(), diff, reach)
        })
        .filter(|(_, diff, reach)| diff.abs() < *reach)
        .max_by(|a, b| a.0.total_cmp(&b.0));

    match threat {
        // Increasing the planet angle increases the offset
        Some((_, diff, _)) if diff >= 0.0 => Direction::Positive,
        Some(_) => Direction::Negative,
        None => Direction::None,
    }
}
