//! Beams fired by the star and the corpses they leave on impact

use serde::{Deserialize, Serialize};

use super::arc::{
    ArcGeometry, ArcStroke, beam_intensity, beam_stroke_width, corpse_intensity,
};
use crate::consts::{RED, WHITE};

/// An expanding arc projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub geometry: ArcGeometry,
    /// Set once the beam passes the orbit without hitting; never reset
    pub dodged: bool,
}

impl Beam {
    pub fn new(geometry: ArcGeometry) -> Self {
        Self {
            geometry,
            dodged: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.geometry.radius
    }

    /// Grow outward by one tick
    pub fn advance(&mut self, speed: f64) {
        self.geometry.radius += speed;
    }

    pub fn is_alive(&self, max_radius: f64) -> bool {
        self.geometry.radius < max_radius
    }

    /// Brightness: fades out between the orbit and `max_radius`
    pub fn intensity(&self, orbit_radius: f64, max_radius: f64) -> f64 {
        beam_intensity(self.geometry.radius, orbit_radius, max_radius)
    }

    pub fn stroke(&self, orbit_radius: f64, max_radius: f64) -> Option<ArcStroke> {
        let width = beam_stroke_width(self.geometry.width, self.geometry.radius);
        self.geometry
            .stroke(WHITE, self.intensity(orbit_radius, max_radius), width)
    }
}

/// Fade-out marker left where a beam struck the planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamCorpse {
    pub geometry: ArcGeometry,
    /// Remaining ticks
    pub life: i32,
    /// Initial life, for the fade ratio
    pub duration: i32,
}

impl BeamCorpse {
    /// Freeze a beam's geometry at the moment of impact
    pub fn from_beam(beam: &Beam, duration: i32) -> Self {
        Self {
            geometry: beam.geometry,
            life: duration,
            duration,
        }
    }

    pub fn update(&mut self) {
        self.life -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn intensity(&self) -> f64 {
        corpse_intensity(self.life, self.duration)
    }

    pub fn stroke(&self) -> Option<ArcStroke> {
        if !self.is_alive() {
            return None;
        }
        self.geometry
            .stroke(RED, self.intensity(), self.geometry.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn beam(radius: f64) -> Beam {
        Beam::new(ArcGeometry::new(DVec2::ZERO, 0.0, PI / 6.0, radius, 10.0))
    }

    #[test]
    fn test_beam_expires_at_max_radius() {
        let mut b = beam(446.0);
        assert!(b.is_alive(450.0));
        b.advance(2.0);
        assert!(b.is_alive(450.0));
        b.advance(2.0);
        assert!(!b.is_alive(450.0));
    }

    #[test]
    fn test_corpse_lifecycle() {
        let b = beam(225.0);
        let mut corpse = BeamCorpse::from_beam(&b, 30);
        assert_eq!(corpse.geometry, b.geometry);
        for _ in 0..29 {
            corpse.update();
            assert!(corpse.is_alive());
        }
        corpse.update();
        assert_eq!(corpse.life, 0);
        assert!(!corpse.is_alive());
        assert!(corpse.stroke().is_none());
    }

    #[test]
    fn test_corpse_fades_red() {
        let mut corpse = BeamCorpse::from_beam(&beam(225.0), 30);
        let fresh = corpse.stroke().unwrap();
        assert_eq!(fresh.color, [255, 0, 0]);
        for _ in 0..15 {
            corpse.update();
        }
        let half = corpse.stroke().unwrap();
        assert_eq!(half.color, [127, 0, 0]);
        assert_eq!(half.stroke_width, 10.0);
    }

    #[test]
    fn test_beam_stroke_thickens() {
        let thin = beam(3.2).stroke(225.0, 450.0).unwrap();
        assert_eq!(thin.stroke_width, 3.0);
        assert_eq!(thin.color, [255, 255, 255]);
        assert!(beam(0.4).stroke(225.0, 450.0).is_none());
    }

    proptest! {
        #[test]
        fn prop_radius_strictly_increases(start in 1.0f64..400.0, speed in 0.1f64..10.0) {
            let mut b = beam(start);
            let mut prev = b.radius();
            while b.is_alive(450.0) {
                b.advance(speed);
                prop_assert!(b.radius() > prev);
                prev = b.radius();
            }
            prop_assert!(b.radius() >= 450.0);
        }
    }
}
