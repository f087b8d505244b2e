//! SVG serialization of gear profiles.
//!
//! Coordinates are written in gear units with the y axis flipped, so one
//! unit of module maps to one millimetre and the drawing keeps its
//! mathematical orientation.

use std::fmt::Write as _;

use crate::constants;
use crate::gear::{Bounds, GearProfile, PlacedGear, Point, Shade};

/// Rendering switches for the SVG document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SvgOptions {
    /// Draw pitch circles, center axes, a title, and labels.
    pub guides: bool,
}

/// Serializes `profile` to a complete SVG document.
#[must_use]
pub fn render(profile: &GearProfile, options: SvgOptions) -> String {
    let frame = profile.frame();
    let stroke = frame.width() / 500.0;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}mm" height="{h}mm" viewBox="{x} {y} {w} {h}">"#,
        x = num(frame.min.x),
        y = num(-frame.max.y),
        w = num(frame.width()),
        h = num(frame.height()),
    );

    if options.guides {
        write_axes(&mut out, profile, &frame, stroke);
    }

    for gear in &profile.gears {
        write_gear(&mut out, gear, stroke);
    }

    if options.guides {
        write_pitch_circles(&mut out, profile, stroke);
        write_labels(&mut out, profile, &frame);
    }

    out.push_str("</svg>\n");
    out
}

fn write_gear(out: &mut String, gear: &PlacedGear, stroke: f64) {
    let fill = match gear.shade {
        Shade::Light => constants::SVG_FILL_LIGHT,
        Shade::Dark => constants::SVG_FILL_DARK,
    };
    let mut d = String::new();
    push_subpath(&mut d, &gear.world_outline(0.0));
    d.push(' ');
    push_subpath(&mut d, &gear.world_hole());

    let _ = writeln!(
        out,
        r#"  <path d="{d}" fill="{fill}" fill-rule="evenodd" stroke="{stroke_color}" stroke-width="{sw}" stroke-linejoin="round"/>"#,
        stroke_color = constants::SVG_STROKE,
        sw = num(stroke),
    );
}

fn push_subpath(d: &mut String, points: &[Point]) {
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{cmd}{} {}", num(p.x), num(-p.y));
    }
    d.push_str(" Z");
}

fn write_axes(out: &mut String, profile: &GearProfile, frame: &Bounds, stroke: f64) {
    let style = format!(
        r#"stroke="black" stroke-opacity="0.3" stroke-width="{}""#,
        num(stroke)
    );
    let _ = writeln!(
        out,
        r#"  <line x1="{}" y1="0" x2="{}" y2="0" {style}/>"#,
        num(frame.min.x),
        num(frame.max.x),
    );
    for gear in &profile.gears {
        let _ = writeln!(
            out,
            r#"  <line x1="{x}" y1="{}" x2="{x}" y2="{}" {style}/>"#,
            num(-frame.max.y),
            num(-frame.min.y),
            x = num(gear.center.x),
        );
    }
}

fn write_pitch_circles(out: &mut String, profile: &GearProfile, stroke: f64) {
    for gear in &profile.gears {
        let _ = writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-opacity="0.7" stroke-width="{}" stroke-dasharray="{} {}"/>"#,
            num(gear.center.x),
            num(-gear.center.y),
            num(gear.pitch_radius),
            constants::SVG_GUIDE_COLOR,
            num(stroke),
            num(stroke * 6.0),
            num(stroke * 3.0),
        );
    }
}

fn write_labels(out: &mut String, profile: &GearProfile, frame: &Bounds) {
    let size = frame.height() * 0.035;
    let mut text = |x: f64, y: f64, size: f64, body: &str| {
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle">{body}</text>"#,
            num(x),
            num(-y),
            num(size),
        );
    };

    text(
        frame.center().x,
        frame.max.y - size * 1.5,
        size * 1.3,
        constants::SVG_TITLE,
    );

    let names = ["Large Gear", "Small Gear"];
    for (gear, name) in profile.gears.iter().zip(names) {
        text(
            gear.center.x,
            gear.center.y - gear.pitch_radius * 1.1,
            size,
            &format!("{name}: {} teeth", gear.teeth),
        );
    }

    if let Some(first) = profile.gears.first() {
        text(
            profile.center_distance / 2.0,
            first.pitch_radius * 1.1,
            size,
            &format!("Pressure Angle: {}°", profile.pressure_angle),
        );
    }
}

/// Fixed-precision number with trailing zeros trimmed.
fn num(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{GearParams, InvoluteSource, ProfileSource};

    fn profile() -> GearProfile {
        InvoluteSource::new(GearParams::default()).generate().unwrap()
    }

    #[test]
    fn test_num_trims_zeros() {
        assert_eq!(num(1.5), "1.5");
        assert_eq!(num(2.0), "2");
        assert_eq!(num(-0.00001), "0");
        assert_eq!(num(0.12346), "0.1235");
    }

    #[test]
    fn test_document_header() {
        let svg = render(&profile(), SvgOptions::default());
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="-18 -18 49.5 36""#));
    }

    #[test]
    fn test_gears_only_by_default() {
        let svg = render(&profile(), SvgOptions::default());
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(constants::SVG_FILL_LIGHT));
        assert!(svg.contains(constants::SVG_FILL_DARK));
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_each_gear_has_outline_and_hole() {
        let svg = render(&profile(), SvgOptions::default());
        for line in svg.lines().filter(|l| l.contains("<path ")) {
            assert_eq!(line.matches('M').count(), 2);
            assert_eq!(line.matches('Z').count(), 2);
            assert!(line.contains(r#"fill-rule="evenodd""#));
        }
    }

    #[test]
    fn test_guides_add_reference_elements() {
        let svg = render(&profile(), SvgOptions { guides: true });
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("Large Gear: 30 teeth"));
        assert!(svg.contains("Small Gear: 15 teeth"));
        assert!(svg.contains("Pressure Angle: 20°"));
        assert!(svg.contains(constants::SVG_TITLE));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render(&profile(), SvgOptions { guides: true });
        let b = render(&profile(), SvgOptions { guides: true });
        assert_eq!(a, b);
    }
}
