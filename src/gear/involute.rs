//! Involute spur gear outlines.
//!
//! Each tooth is built from two involute flanks unwound from the base
//! circle, joined by an arc on the tip circle. Adjacent teeth are joined by
//! an arc on the root circle. When the root circle lies inside the base
//! circle the flank continues radially down to the root.

use std::f64::consts::{PI, TAU};

use tracing::debug;

use super::{GearParams, GearProfile, PlacedGear, Point, ProfileSource, Shade};
use crate::constants;
use crate::error::GearError;

/// Involute function `tan(a) - a`.
fn inv(angle: f64) -> f64 {
    angle.tan() - angle
}

/// Characteristic radii and angles of a single gear.
#[derive(Clone, Copy, Debug)]
struct ToothGeometry {
    teeth: u32,
    pitch: f64,
    base: f64,
    tip: f64,
    root: f64,
    /// Half tooth angle on the base circle.
    base_half_angle: f64,
}

impl ToothGeometry {
    fn new(params: &GearParams, teeth: u32) -> Result<Self, GearError> {
        let m = params.module;
        let alpha = params.pressure_angle.to_radians();
        let pitch = m * f64::from(teeth) / 2.0;
        let base = pitch * alpha.cos();
        let tip = pitch + m;
        let root = pitch - (1.0 + params.clearance) * m;

        if ![pitch, base, tip, root].into_iter().all(f64::is_finite) {
            return Err(GearError::profile(format!(
                "radii overflow for module {m} and {teeth} teeth"
            )));
        }
        if root <= 0.0 {
            return Err(GearError::profile(format!(
                "root radius {root:.3} is not positive for {teeth} teeth"
            )));
        }

        let thickness = PI * m / 2.0 - params.backlash;
        if thickness <= 0.0 {
            return Err(GearError::profile(format!(
                "backlash {} leaves no tooth thickness",
                params.backlash
            )));
        }

        let geometry = Self {
            teeth,
            pitch,
            base,
            tip,
            root,
            base_half_angle: thickness / (2.0 * pitch) + inv(alpha),
        };
        if !geometry.base_half_angle.is_finite() {
            return Err(GearError::profile(format!(
                "tooth angle is undefined for {teeth} teeth"
            )));
        }

        if geometry.half_angle(tip) <= 0.0 {
            return Err(GearError::profile(format!(
                "teeth become pointed before the tip circle with {teeth} teeth"
            )));
        }
        if geometry.pitch_angle() - 2.0 * geometry.half_angle(geometry.root) <= 0.0 {
            return Err(GearError::profile(format!(
                "root gap closes with {teeth} teeth"
            )));
        }

        Ok(geometry)
    }

    fn pitch_angle(&self) -> f64 {
        TAU / f64::from(self.teeth)
    }

    /// Half tooth angle at `radius`, measured from the tooth center line.
    fn half_angle(&self, radius: f64) -> f64 {
        if radius <= self.base {
            return self.base_half_angle;
        }
        self.base_half_angle - inv((self.base / radius).acos())
    }

    /// Radius where the involute flank starts.
    fn flank_start(&self) -> f64 {
        self.base.max(self.root)
    }

    /// Builds the closed outline, starting at the root of tooth 0.
    fn outline(&self, frame_count: u32) -> Vec<Point> {
        let n = frame_count as usize;
        let arc_segments = (n / 4).max(2);

        let start = self.flank_start();
        let radii: Vec<f64> = (0..n)
            .map(|k| {
                #[allow(clippy::cast_precision_loss)]
                let t = k as f64 / (n - 1) as f64;
                start + (self.tip - start) * t
            })
            .collect();
        let has_radial = self.root < self.base;
        let root_half = self.half_angle(self.root);
        let tip_half = self.half_angle(self.tip);

        let mut points = Vec::with_capacity(self.teeth as usize * (2 * n + 2 * arc_segments + 2));
        for i in 0..self.teeth {
            let center = self.pitch_angle() * f64::from(i);

            // rising flank
            if has_radial {
                points.push(Point::polar(self.root, center - root_half));
            }
            for &r in &radii {
                points.push(Point::polar(r, center - self.half_angle(r)));
            }

            // tip land
            arc_between(
                &mut points,
                self.tip,
                center - tip_half,
                center + tip_half,
                arc_segments,
            );

            // falling flank
            for &r in radii.iter().rev() {
                points.push(Point::polar(r, center + self.half_angle(r)));
            }
            if has_radial {
                points.push(Point::polar(self.root, center + root_half));
            }

            // root gap up to the next tooth
            arc_between(
                &mut points,
                self.root,
                center + root_half,
                center + self.pitch_angle() - root_half,
                arc_segments,
            );
        }
        points
    }
}

/// Pushes the interior points of an arc, excluding both end points.
fn arc_between(points: &mut Vec<Point>, radius: f64, from: f64, to: f64, segments: usize) {
    for s in 1..segments {
        #[allow(clippy::cast_precision_loss)]
        let t = s as f64 / segments as f64;
        points.push(Point::polar(radius, from + (to - from) * t));
    }
}

fn validate(params: &GearParams) -> Result<(), GearError> {
    if !params.module.is_finite() || params.module <= 0.0 {
        return Err(GearError::profile(format!(
            "module must be positive and finite, got {}",
            params.module
        )));
    }
    if params.module > constants::MAX_MODULE {
        return Err(GearError::profile(format!(
            "module must be at most {}, got {}",
            constants::MAX_MODULE,
            params.module
        )));
    }
    for teeth in [params.teeth1, params.teeth2] {
        if teeth < constants::MIN_TEETH {
            return Err(GearError::profile(format!(
                "a gear needs at least {} teeth, got {teeth}",
                constants::MIN_TEETH
            )));
        }
        if teeth > constants::MAX_TEETH {
            return Err(GearError::profile(format!(
                "a gear may have at most {} teeth, got {teeth}",
                constants::MAX_TEETH
            )));
        }
    }
    if !(params.pressure_angle > 0.0 && params.pressure_angle < constants::MAX_PRESSURE_ANGLE) {
        return Err(GearError::profile(format!(
            "pressure angle must be between 0 and {} degrees, got {}",
            constants::MAX_PRESSURE_ANGLE,
            params.pressure_angle
        )));
    }
    if !params.clearance.is_finite() || params.clearance < 0.0 {
        return Err(GearError::profile(format!(
            "clearance must be finite and not negative, got {}",
            params.clearance
        )));
    }
    if !params.backlash.is_finite() || params.backlash < 0.0 {
        return Err(GearError::profile(format!(
            "backlash must be finite and not negative, got {}",
            params.backlash
        )));
    }
    let frame_range = constants::MIN_FRAME_COUNT..=constants::MAX_FRAME_COUNT;
    if !frame_range.contains(&params.frame_count) {
        return Err(GearError::profile(format!(
            "frame count must be between {} and {}, got {}",
            constants::MIN_FRAME_COUNT,
            constants::MAX_FRAME_COUNT,
            params.frame_count
        )));
    }
    Ok(())
}

/// Builds a meshing pair of involute spur gears.
#[derive(Clone, Debug, Default)]
pub struct InvoluteSource {
    params: GearParams,
}

impl InvoluteSource {
    #[must_use]
    pub fn new(params: GearParams) -> Self {
        Self { params }
    }

    fn place(&self, teeth: u32, hole_factor: f64, shade: Shade) -> Result<PlacedGear, GearError> {
        let geometry = ToothGeometry::new(&self.params, teeth)?;
        let hole_radius = (hole_factor * self.params.module)
            .min(geometry.root * constants::HOLE_ROOT_FRACTION);
        Ok(PlacedGear {
            teeth,
            outline: geometry.outline(self.params.frame_count),
            center: Point::default(),
            rotation: 0.0,
            pitch_radius: geometry.pitch,
            root_radius: geometry.root,
            tip_radius: geometry.tip,
            hole_radius,
            shade,
        })
    }
}

impl ProfileSource for InvoluteSource {
    fn generate(&self) -> Result<GearProfile, GearError> {
        validate(&self.params)?;

        let large = self.place(
            self.params.teeth1,
            constants::HOLE_RADIUS_LARGE,
            Shade::Light,
        )?;
        let mut small = self.place(
            self.params.teeth2,
            constants::HOLE_RADIUS_SMALL,
            Shade::Dark,
        )?;

        let center_distance = large.pitch_radius + small.pitch_radius;
        if !center_distance.is_finite() {
            return Err(GearError::profile("center distance overflows"));
        }
        small.center = Point::new(center_distance, 0.0);
        // half a tooth pitch so the small gear's teeth sit in the large gear's gaps
        small.rotation = PI / f64::from(small.teeth);

        debug!(
            teeth1 = large.teeth,
            teeth2 = small.teeth,
            points1 = large.outline.len(),
            points2 = small.outline.len(),
            center_distance,
            "generated gear profile"
        );

        Ok(GearProfile {
            gears: vec![large, small],
            center_distance,
            pressure_angle: self.params.pressure_angle,
        })
    }
}
