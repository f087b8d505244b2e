//! Gear profile types and the source seam.
//!
//! A [`ProfileSource`] builds a [`GearProfile`]; everything downstream
//! (SVG export, the terminal viewer) only reads it.

pub mod geometry;
pub mod involute;

pub use geometry::{Bounds, Point};
pub use involute::InvoluteSource;

use crate::constants;
use crate::error::GearError;

/// Parameters of a meshing gear pair.
#[derive(Clone, Debug, PartialEq)]
pub struct GearParams {
    /// Module (tooth size unit).
    pub module: f64,
    /// Tooth count of the large gear.
    pub teeth1: u32,
    /// Tooth count of the small gear.
    pub teeth2: u32,
    /// Pressure angle in degrees.
    pub pressure_angle: f64,
    /// Clearance coefficient (root depth beyond one module).
    pub clearance: f64,
    /// Backlash, subtracted from the tooth thickness on the pitch circle.
    pub backlash: f64,
    /// Samples per tooth flank.
    pub frame_count: u32,
}

impl Default for GearParams {
    fn default() -> Self {
        Self {
            module: constants::DEFAULT_MODULE,
            teeth1: constants::DEFAULT_TEETH_LARGE,
            teeth2: constants::DEFAULT_TEETH_SMALL,
            pressure_angle: constants::DEFAULT_PRESSURE_ANGLE,
            clearance: constants::DEFAULT_CLEARANCE,
            backlash: constants::DEFAULT_BACKLASH,
            frame_count: constants::DEFAULT_FRAME_COUNT,
        }
    }
}

/// Fill shade of a gear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// A single gear positioned in the drawing.
#[derive(Clone, Debug)]
pub struct PlacedGear {
    /// Number of teeth.
    pub teeth: u32,
    /// Closed outline around the gear's own center, counter-clockwise.
    /// The first point is not repeated at the end.
    pub outline: Vec<Point>,
    /// Center of the gear in the drawing.
    pub center: Point,
    /// Rotation applied to the outline before translating to `center`.
    pub rotation: f64,
    pub pitch_radius: f64,
    pub root_radius: f64,
    pub tip_radius: f64,
    pub hole_radius: f64,
    pub shade: Shade,
}

impl PlacedGear {
    /// Outline in drawing coordinates, with `extra` radians of rotation.
    #[must_use]
    pub fn world_outline(&self, extra: f64) -> Vec<Point> {
        let angle = self.rotation + extra;
        self.outline
            .iter()
            .map(|p| p.place(angle, self.center))
            .collect()
    }

    /// Center hole in drawing coordinates.
    #[must_use]
    pub fn world_hole(&self) -> Vec<Point> {
        geometry::circle(self.center, self.hole_radius, constants::HOLE_SEGMENTS)
    }
}

/// A meshing gear layout, ready to be drawn or exported.
#[derive(Clone, Debug)]
pub struct GearProfile {
    /// Gears in drawing order; the driving gear comes first.
    pub gears: Vec<PlacedGear>,
    /// Theoretical center distance between the first two gears.
    pub center_distance: f64,
    /// Pressure angle in degrees, kept for labelling.
    pub pressure_angle: f64,
}

impl GearProfile {
    /// Region that frames every pitch circle with the standard margin,
    /// widened where a tip circle reaches past it.
    #[must_use]
    pub fn frame(&self) -> Bounds {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for gear in &self.gears {
            let r = (gear.pitch_radius * constants::VIEW_MARGIN).max(gear.tip_radius);
            min.x = min.x.min(gear.center.x - r);
            min.y = min.y.min(gear.center.y - r);
            max.x = max.x.max(gear.center.x + r);
            max.y = max.y.max(gear.center.y + r);
        }
        if self.gears.is_empty() {
            return Bounds {
                min: Point::default(),
                max: Point::default(),
            };
        }
        Bounds { min, max }
    }

    /// Angular speed of gear `index` relative to the first gear.
    ///
    /// Meshing gears turn in opposite directions at the inverse ratio of
    /// their tooth counts.
    #[must_use]
    pub fn speed_ratio(&self, index: usize) -> f64 {
        let Some(first) = self.gears.first() else {
            return 0.0;
        };
        let Some(gear) = self.gears.get(index) else {
            return 0.0;
        };
        let ratio = f64::from(first.teeth) / f64::from(gear.teeth);
        if index % 2 == 0 {
            ratio
        } else {
            -ratio
        }
    }
}

/// Something that can produce a gear profile.
pub trait ProfileSource {
    /// Builds the profile.
    ///
    /// # Errors
    ///
    /// Returns [`GearError::ProfileGeneration`] if the parameters cannot
    /// describe a valid gear.
    fn generate(&self) -> Result<GearProfile, GearError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_classic_pair() {
        let p = GearParams::default();
        assert_eq!(p.teeth1, 30);
        assert_eq!(p.teeth2, 15);
        assert!((p.pressure_angle - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_covers_both_gears() {
        let profile = InvoluteSource::new(GearParams::default())
            .generate()
            .unwrap();
        let frame = profile.frame();
        // r1 = 15, r2 = 7.5, center distance 22.5
        assert!((frame.min.x + 18.0).abs() < 1e-9);
        assert!((frame.max.x - 31.5).abs() < 1e-9);
        assert!((frame.max.y - 18.0).abs() < 1e-9);
        assert!((frame.min.y + 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_contains_tips_of_small_gears() {
        let profile = InvoluteSource::new(GearParams {
            teeth2: 8,
            ..GearParams::default()
        })
        .generate()
        .unwrap();
        let frame = profile.frame();
        for gear in &profile.gears {
            for p in gear.world_outline(0.0) {
                assert!(p.x >= frame.min.x - 1e-9 && p.x <= frame.max.x + 1e-9);
                assert!(p.y >= frame.min.y - 1e-9 && p.y <= frame.max.y + 1e-9);
            }
        }
        // r2 = 4, tip 5 > 4.8; center distance 19
        assert!((frame.max.x - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_ratio_alternates_direction() {
        let profile = InvoluteSource::new(GearParams::default())
            .generate()
            .unwrap();
        assert!((profile.speed_ratio(0) - 1.0).abs() < 1e-12);
        assert!((profile.speed_ratio(1) + 2.0).abs() < 1e-12);
        assert!(profile.speed_ratio(5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_world_outline_is_translated() {
        let profile = InvoluteSource::new(GearParams::default())
            .generate()
            .unwrap();
        let small = &profile.gears[1];
        let world = small.world_outline(0.0);
        for p in world {
            let local = Point::new(p.x - small.center.x, p.y - small.center.y);
            assert!(local.norm() <= small.tip_radius + 1e-9);
        }
    }
}
