//! Read-only view of a session for rendering and HUD collaborators
//!
//! Captured after a tick; everything a frontend needs to draw the frame
//! without touching simulation state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::sim::ArcStroke;
use crate::sim::state::GameState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetView {
    pub position: DVec2,
    pub size: f64,
    pub color: [u8; 3],
    /// Full trail history, oldest first
    pub trail: Vec<DVec2>,
    /// Portion of the trail to draw at the current speed, oldest first
    pub visible_trail: Vec<DVec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarView {
    pub center: DVec2,
    pub size: f64,
    pub angle: f64,
    pub arc_range: f64,
    pub cannon_radii: Vec<f64>,
    pub cannons: Vec<ArcStroke>,
}

/// A beam or corpse as drawn this frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcView {
    pub center: DVec2,
    pub angle: f64,
    pub arc_range: f64,
    pub radius: f64,
    pub width: f64,
    /// Brightness in [0, 1]
    pub intensity: f64,
    /// `None` when nothing would be visible
    pub stroke: Option<ArcStroke>,
}

/// Values shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub speed: f64,
    pub acceleration: f64,
    pub kill_count: u64,
    pub score: i64,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub planet: PlanetView,
    pub star: StarView,
    pub beams: Vec<ArcView>,
    pub corpses: Vec<ArcView>,
    pub telemetry: Telemetry,
    pub left_active: bool,
    pub right_active: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let planet = &state.planet;
        let star = &state.star;
        let orbit = planet.orbit_radius;
        let max_radius = state.settings.beam_max_radius;

        let beams = star
            .beams
            .iter()
            .map(|beam| {
                let g = &beam.geometry;
                ArcView {
                    center: g.center,
                    angle: g.angle,
                    arc_range: g.arc_range,
                    radius: g.radius,
                    width: g.width,
                    intensity: beam.intensity(orbit, max_radius),
                    stroke: beam.stroke(orbit, max_radius),
                }
            })
            .collect();

        let corpses = state
            .corpses
            .iter()
            .map(|corpse| {
                let g = &corpse.geometry;
                ArcView {
                    center: g.center,
                    angle: g.angle,
                    arc_range: g.arc_range,
                    radius: g.radius,
                    width: g.width,
                    intensity: corpse.intensity(),
                    stroke: corpse.stroke(),
                }
            })
            .collect();

        Self {
            tick: state.time_ticks,
            planet: PlanetView {
                position: planet.position,
                size: planet.size,
                color: planet.color,
                trail: planet.trail.iter().copied().collect(),
                visible_trail: planet.visible_trail(),
            },
            star: StarView {
                center: star.center,
                size: star.size,
                angle: star.angle(),
                arc_range: star.arc_range,
                cannon_radii: star.cannon_radii.to_vec(),
                cannons: star.cannon_strokes(),
            },
            beams,
            corpses,
            telemetry: Telemetry {
                speed: planet.speed(),
                acceleration: planet.last_acceleration_delta,
                kill_count: state.kill_count,
                score: state.score,
                elapsed_secs: state.elapsed_secs(),
            },
            left_active: state.left_active,
            right_active: state.right_active,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
