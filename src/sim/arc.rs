//! Arc geometry shared by beams and beam corpses
//!
//! An arc is a circular band centered on the star:
//! - radius: distance of the band's centerline from the center
//! - width: radial half-thickness used for collision and stroke width
//! - angle, arc_range: angular center and full angular span
//!
//! The fade and stroke helpers are pure functions of `(radius, width, life)`
//! so presentation can be reproduced exactly in tests.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geometry common to every arc-shaped entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    /// Center the arc expands from
    pub center: DVec2,
    /// Angular center (radians)
    pub angle: f64,
    /// Full angular span (radians)
    pub arc_range: f64,
    /// Current centerline radius
    pub radius: f64,
    pub width: f64,
}

impl ArcGeometry {
    pub fn new(center: DVec2, angle: f64, arc_range: f64, radius: f64, width: f64) -> Self {
        Self {
            center,
            angle,
            arc_range,
            radius,
            width,
        }
    }

    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.angle - self.arc_range / 2.0
    }

    #[inline]
    pub fn end_angle(&self) -> f64 {
        self.angle + self.arc_range / 2.0
    }

    /// Outer edge of the band grown by `margin` (e.g. a body's radius)
    #[inline]
    pub fn front_radius(&self, margin: f64) -> f64 {
        self.radius + self.width + margin
    }

    /// Inner edge of the band shrunk by `margin`, never below zero
    #[inline]
    pub fn back_radius(&self, margin: f64) -> f64 {
        (self.radius - self.width - margin).max(0.0)
    }

    /// Whether a circle at `distance` from the center with radius `margin`
    /// overlaps the band radially (strict on both sides)
    #[inline]
    pub fn overlaps_radially(&self, distance: f64, margin: f64) -> bool {
        self.back_radius(margin) < distance && distance < self.front_radius(margin)
    }

    /// Axis-aligned bounds of the full circle: [x, y, w, h]
    pub fn bounding_rect(&self) -> [f64; 4] {
        [
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        ]
    }

    /// Build a draw instruction, or `None` if the stroke would be invisible
    pub fn stroke(&self, color: [u8; 3], intensity: f64, stroke_width: f64) -> Option<ArcStroke> {
        if stroke_width <= 0.0 {
            return None;
        }
        Some(ArcStroke {
            rect: self.bounding_rect(),
            start_angle: self.start_angle(),
            end_angle: self.end_angle(),
            stroke_width,
            color: scale_color(color, intensity),
            intensity,
        })
    }
}

/// One arc to draw, already resolved to screen terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcStroke {
    pub rect: [f64; 4],
    pub start_angle: f64,
    pub end_angle: f64,
    pub stroke_width: f64,
    pub color: [u8; 3],
    pub intensity: f64,
}

/// How far a beam has faded: 0 at `fade_start`, 1 at `max_radius`.
///
/// A non-positive fade distance counts as fully faded.
pub fn beam_fade_progress(radius: f64, fade_start: f64, max_radius: f64) -> f64 {
    let fade_distance = max_radius - fade_start;
    if fade_distance > 0.0 {
        (radius - fade_start).max(0.0) / fade_distance
    } else {
        1.0
    }
}

/// Beam brightness in [0, 1]: full until `fade_start`, then linear to zero
pub fn beam_intensity(radius: f64, fade_start: f64, max_radius: f64) -> f64 {
    1.0 - beam_fade_progress(radius, fade_start, max_radius).min(1.0)
}

/// Beams start as points and thicken until they reach their full width
pub fn beam_stroke_width(width: f64, radius: f64) -> f64 {
    width.min(radius.floor())
}

/// Corpse brightness in [0, 1] over its countdown
pub fn corpse_intensity(life: i32, duration: i32) -> f64 {
    if duration <= 0 {
        return 0.0;
    }
    (life.max(0) as f64 / duration as f64).min(1.0)
}

/// Scale each channel by `ratio`, truncating like an integer cast
pub fn scale_color(color: [u8; 3], ratio: f64) -> [u8; 3] {
    let ratio = ratio.clamp(0.0, 1.0);
    color.map(|c| (c as f64 * ratio) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn arc(radius: f64, width: f64) -> ArcGeometry {
        ArcGeometry::new(DVec2::new(600.0, 400.0), PI, PI / 6.0, radius, width)
    }

    #[test]
    fn test_band_edges() {
        let a = arc(225.0, 5.0);
        assert_eq!(a.front_radius(12.0), 242.0);
        assert_eq!(a.back_radius(12.0), 208.0);
        assert!(a.overlaps_radially(225.0, 12.0));
        assert!(!a.overlaps_radially(242.0, 12.0));
        assert!(!a.overlaps_radially(208.0, 12.0));
    }

    #[test]
    fn test_back_radius_clamped() {
        let a = arc(10.0, 5.0);
        assert_eq!(a.back_radius(12.0), 0.0);
    }

    #[test]
    fn test_angular_extent() {
        let a = arc(100.0, 5.0);
        assert!((a.start_angle() - (PI - PI / 12.0)).abs() < 1e-12);
        assert!((a.end_angle() - (PI + PI / 12.0)).abs() < 1e-12);
        assert_eq!(a.bounding_rect(), [500.0, 300.0, 200.0, 200.0]);
    }

    #[test]
    fn test_beam_fade() {
        // Full intensity until the orbit, zero at max radius
        assert_eq!(beam_intensity(100.0, 225.0, 450.0), 1.0);
        assert_eq!(beam_intensity(225.0, 225.0, 450.0), 1.0);
        assert!((beam_intensity(337.5, 225.0, 450.0) - 0.5).abs() < 1e-12);
        assert_eq!(beam_intensity(450.0, 225.0, 450.0), 0.0);
        assert_eq!(beam_intensity(500.0, 225.0, 450.0), 0.0);
    }

    #[test]
    fn test_beam_fade_zero_distance() {
        assert_eq!(beam_fade_progress(100.0, 300.0, 300.0), 1.0);
        assert_eq!(beam_intensity(100.0, 300.0, 200.0), 0.0);
    }

    #[test]
    fn test_stroke_width_grows() {
        assert_eq!(beam_stroke_width(10.0, 0.5), 0.0);
        assert_eq!(beam_stroke_width(10.0, 4.7), 4.0);
        assert_eq!(beam_stroke_width(10.0, 42.0), 10.0);
        assert!(arc(0.5, 10.0).stroke([255; 3], 1.0, 0.0).is_none());
    }

    #[test]
    fn test_corpse_intensity() {
        assert_eq!(corpse_intensity(30, 30), 1.0);
        assert_eq!(corpse_intensity(15, 30), 0.5);
        assert_eq!(corpse_intensity(0, 30), 0.0);
        assert_eq!(corpse_intensity(5, 0), 0.0);
    }

    #[test]
    fn test_scale_color_truncates() {
        assert_eq!(scale_color([255, 0, 0], 0.5), [127, 0, 0]);
        assert_eq!(scale_color([51, 153, 204], 1.0), [51, 153, 204]);
        assert_eq!(scale_color([51, 153, 204], 2.0), [51, 153, 204]);
    }
}
