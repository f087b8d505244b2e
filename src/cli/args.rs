//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::gear::GearParams;

/// gearview - involute gear profile generator
///
/// Without --save the gears are shown full screen in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Write the gears as an SVG document to this path instead of showing them
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Module (tooth size unit)
    #[arg(long)]
    pub module: Option<f64>,

    /// Number of teeth for the large gear
    #[arg(long)]
    pub teeth1: Option<u32>,

    /// Number of teeth for the small gear
    #[arg(long)]
    pub teeth2: Option<u32>,

    /// Pressure angle in degrees
    #[arg(long)]
    pub pressure_angle: Option<f64>,

    /// Backlash
    #[arg(long)]
    pub backlash: Option<f64>,

    /// Clearance coefficient
    #[arg(long)]
    pub clearance: Option<f64>,

    /// Number of points per tooth flank (curve smoothness)
    #[arg(long)]
    pub frame_count: Option<u32>,

    /// Include pitch circles, axes, and labels in the SVG
    #[arg(long)]
    pub guides: bool,

    /// Open the saved SVG in the system's default viewer
    #[arg(long, requires = "save")]
    pub open: bool,

    /// Config file (defaults to <config dir>/gearview/config.toml)
    #[arg(long, value_name = "PATH", env = "GEARVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Writes every flag that was given over `params`.
    pub fn apply(&self, params: &mut GearParams) {
        if let Some(v) = self.module {
            params.module = v;
        }
        if let Some(v) = self.teeth1 {
            params.teeth1 = v;
        }
        if let Some(v) = self.teeth2 {
            params.teeth2 = v;
        }
        if let Some(v) = self.pressure_angle {
            params.pressure_angle = v;
        }
        if let Some(v) = self.backlash {
            params.backlash = v;
        }
        if let Some(v) = self.clearance {
            params.clearance = v;
        }
        if let Some(v) = self.frame_count {
            params.frame_count = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_flags_means_display() {
        let args = Args::try_parse_from(["gearview"]).unwrap();
        assert!(args.save.is_none());
        assert!(!args.guides);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_save_and_overrides() {
        let args = Args::try_parse_from([
            "gearview",
            "--save",
            "out.svg",
            "--teeth1",
            "40",
            "--pressure-angle",
            "14.5",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.save, Some(PathBuf::from("out.svg")));
        assert_eq!(args.verbose, 2);

        let mut params = GearParams::default();
        args.apply(&mut params);
        assert_eq!(params.teeth1, 40);
        assert!((params.pressure_angle - 14.5).abs() < f64::EPSILON);
        assert_eq!(params.teeth2, crate::constants::DEFAULT_TEETH_SMALL);
    }

    #[test]
    fn test_open_requires_save() {
        assert!(Args::try_parse_from(["gearview", "--open"]).is_err());
        assert!(Args::try_parse_from(["gearview", "--save", "a.svg", "--open"]).is_ok());
    }

    #[test]
    fn test_save_requires_value() {
        assert!(Args::try_parse_from(["gearview", "--save"]).is_err());
    }
}
