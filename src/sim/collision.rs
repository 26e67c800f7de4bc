//! Beam vs planet collision detection
//!
//! The planet is tested as a circle of radius `size` sitting on its orbit.
//! A beam hits when the planet overlaps the beam's radial band and the
//! planet's angle falls inside the beam's angular span widened by the
//! planet's own angular half-size.

use std::f64::consts::PI;

use super::arc::ArcGeometry;
use super::beam::{Beam, BeamCorpse};
use super::planet::Planet;
use crate::normalize_angle;

/// Result of sweeping the live beams against the planet for one tick
#[derive(Debug, Clone, Default)]
pub struct SweepOutcome {
    /// Beams that did not hit, in their original order
    pub survivors: Vec<Beam>,
    /// One corpse per beam that hit this tick
    pub corpses: Vec<BeamCorpse>,
    pub hits: u32,
    pub dodges: u32,
}

/// Angular half-size of the planet as seen from the center.
///
/// A planet larger than its own orbit is treated as covering every angle.
pub fn angle_margin(orbit_radius: f64, size: f64) -> f64 {
    if orbit_radius > size {
        (size / orbit_radius).clamp(-1.0, 1.0).asin()
    } else {
        PI
    }
}

/// Signed angular offset between the planet and a beam's center line.
///
/// Beam angles are stored in the star's frame, which runs opposite to the
/// planet's, hence the sum plus a half turn.
#[inline]
pub fn angle_diff(planet_angle: f64, beam_angle: f64) -> f64 {
    normalize_angle(planet_angle + beam_angle + PI)
}

/// Whether an angular offset lies inside a beam's span plus `margin`
#[inline]
pub fn within_arc(angle_diff: f64, arc_range: f64, margin: f64) -> bool {
    angle_diff.abs() < arc_range / 2.0 + margin
}

/// Full hit test of one beam against a planet at (`orbit_radius`, `planet_angle`)
pub fn beam_hits_planet(
    beam: &ArcGeometry,
    planet_angle: f64,
    orbit_radius: f64,
    planet_size: f64,
) -> bool {
    if !beam.overlaps_radially(orbit_radius, planet_size) {
        return false;
    }
    let margin = angle_margin(orbit_radius, planet_size);
    within_arc(angle_diff(planet_angle, beam.angle), beam.arc_range, margin)
}

/// Test every beam against the planet.
///
/// Hits become corpses and are dropped from the survivors. A beam whose
/// band has fully cleared the orbit without hitting is marked dodged, once.
pub fn sweep(beams: Vec<Beam>, planet: &Planet, corpse_duration: i32) -> SweepOutcome {
    let orbit_radius = planet.orbit_radius;
    let mut outcome = SweepOutcome {
        survivors: Vec::with_capacity(beams.len()),
        ..Default::default()
    };

    for mut beam in beams {
        if beam_hits_planet(&beam.geometry, planet.angle(), orbit_radius, planet.size) {
            log::debug!(
                "Beam at angle {:.3} hit planet at radius {:.1}",
                beam.geometry.angle,
                beam.radius()
            );
            outcome.hits += 1;
            outcome
                .corpses
                .push(BeamCorpse::from_beam(&beam, corpse_duration));
            continue;
        }

        let cleared = !beam.geometry.overlaps_radially(orbit_radius, planet.size)
            && beam.radius() > orbit_radius;
        if cleared && !beam.dodged {
            beam.dodged = true;
            outcome.dodges += 1;
            log::debug!("Beam at angle {:.3} dodged", beam.geometry.angle);
        }
        outcome.survivors.push(beam);
    }

    outcome
}

/// Age every corpse by one tick and drop the expired ones
pub fn age_corpses(corpses: Vec<BeamCorpse>) -> Vec<BeamCorpse> {
    corpses
        .into_iter()
        .filter_map(|mut corpse| {
            corpse.update();
            corpse.is_alive().then_some(corpse)
        })
        .collect()
}
