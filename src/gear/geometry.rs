//! Minimal 2D geometry used by the gear outlines.

/// A point in gear units (same unit as the module).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` and `angle` (radians) from the origin.
    #[must_use]
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    /// Distance from the origin.
    #[cfg(test)]
    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotate about the origin, then translate by `offset`.
    #[must_use]
    pub fn place(self, angle: f64, offset: Point) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos - self.y * sin + offset.x,
            self.x * sin + self.y * cos + offset.y,
        )
    }
}

/// Axis-aligned rectangle, `min` inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Same center, both extents multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.scaled_xy(factor, factor)
    }

    /// Same center, extents multiplied per axis.
    #[must_use]
    pub fn scaled_xy(&self, fx: f64, fy: f64) -> Self {
        let c = self.center();
        let hw = self.width() * fx / 2.0;
        let hh = self.height() * fy / 2.0;
        Self {
            min: Point::new(c.x - hw, c.y - hh),
            max: Point::new(c.x + hw, c.y + hh),
        }
    }

    /// Shifted by `(dx, dy)`.
    #[must_use]
    pub fn shifted(&self, dx: f64, dy: f64) -> Self {
        Self {
            min: Point::new(self.min.x + dx, self.min.y + dy),
            max: Point::new(self.max.x + dx, self.max.y + dy),
        }
    }
}

/// `count` evenly spaced points on a circle, starting at angle 0.
#[must_use]
pub fn circle(center: Point, radius: f64, count: usize) -> Vec<Point> {
    #[allow(clippy::cast_precision_loss)]
    let step = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * i as f64;
            Point::polar(radius, angle).place(0.0, center)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_place_rotates_then_translates() {
        let p = Point::new(1.0, 0.0).place(FRAC_PI_2, Point::new(10.0, 0.0));
        assert!(close(p.x, 10.0));
        assert!(close(p.y, 1.0));
    }

    #[test]
    fn test_bounds_scaled_keeps_center() {
        let b = Bounds {
            min: Point::new(-2.0, -1.0),
            max: Point::new(4.0, 1.0),
        };
        let s = b.scaled(2.0);
        assert!(close(s.center().x, 1.0));
        assert!(close(s.width(), 12.0));
        assert!(close(s.height(), 4.0));
    }

    #[test]
    fn test_circle_points_on_radius() {
        let pts = circle(Point::new(1.0, 1.0), 2.0, 8);
        assert_eq!(pts.len(), 8);
        for p in pts {
            assert!(close(Point::new(p.x - 1.0, p.y - 1.0).norm(), 2.0));
        }
    }
}
