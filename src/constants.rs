//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout gearview,
//! including gear defaults, layout factors, file paths, and user messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Gear Defaults ===

/// Default module (pitch diameter per tooth).
pub const DEFAULT_MODULE: f64 = 1.0;
/// Default tooth count of the large gear.
pub const DEFAULT_TEETH_LARGE: u32 = 30;
/// Default tooth count of the small gear.
pub const DEFAULT_TEETH_SMALL: u32 = 15;
/// Default pressure angle in degrees.
pub const DEFAULT_PRESSURE_ANGLE: f64 = 20.0;
/// Default clearance coefficient.
pub const DEFAULT_CLEARANCE: f64 = 0.25;
/// Default backlash.
pub const DEFAULT_BACKLASH: f64 = 0.0;
/// Default number of samples per tooth flank.
pub const DEFAULT_FRAME_COUNT: u32 = 32;

/// Fewest teeth a gear may have.
pub const MIN_TEETH: u32 = 3;
/// Largest module accepted; keeps every radius and extent finite.
pub const MAX_MODULE: f64 = 1.0e6;
/// Most teeth a gear may have.
pub const MAX_TEETH: u32 = 10_000;
/// Fewest samples per flank.
pub const MIN_FRAME_COUNT: u32 = 2;
/// Most samples per flank.
pub const MAX_FRAME_COUNT: u32 = 1_000;
/// Pressure angle must stay strictly below this (degrees).
pub const MAX_PRESSURE_ANGLE: f64 = 45.0;

// === Layout ===

/// Center hole radius of the large gear, per unit of module.
pub const HOLE_RADIUS_LARGE: f64 = 3.0;
/// Center hole radius of the small gear, per unit of module.
pub const HOLE_RADIUS_SMALL: f64 = 1.5;
/// Hole radius never exceeds this fraction of the root radius.
pub const HOLE_ROOT_FRACTION: f64 = 0.8;
/// Points used to approximate the center hole circle.
pub const HOLE_SEGMENTS: usize = 50;
/// Margin factor applied around the pitch circles when framing the view.
pub const VIEW_MARGIN: f64 = 1.2;

// === Path Configuration ===

/// Name of the config subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "gearview";
/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === SVG Styling ===

/// Fill of the large gear.
pub const SVG_FILL_LIGHT: &str = "lightgray";
/// Fill of the small gear.
pub const SVG_FILL_DARK: &str = "darkgray";
/// Outline color of both gears.
pub const SVG_STROKE: &str = "black";
/// Color of pitch circles in guide mode.
pub const SVG_GUIDE_COLOR: &str = "red";
/// Title printed above the gears in guide mode.
pub const SVG_TITLE: &str = "Involute Gear Meshing Design";

// === Viewer ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 50;
/// Large gear rotation per tick while spinning (radians).
pub const SPIN_STEP: f64 = 0.02;
/// Zoom multiplier per key press.
pub const ZOOM_STEP: f64 = 1.25;
/// Pan distance per key press, as a fraction of the visible width.
pub const PAN_FRACTION: f64 = 0.1;
/// Viewer block title.
pub const TITLE_VIEWER: &str = " Involute Gear Meshing ";

// === Messages: CLI Output ===

pub const CLI_MSG_SAVED: &str = "Gears exported to ";
pub const CLI_MSG_OPEN_FAILED: &str = "Could not open viewer: ";

// === Error Messages ===

pub const ERR_DISPLAY_NOT_TTY: &str = "stdout is not a terminal";
pub const ERR_DISPLAY_DUMB_TERM: &str = "TERM is set to 'dumb'";
pub const HINT_USE_SAVE: &str = "use --save <path> to export an SVG instead";
