//! Nordic Frost color theme for the terminal viewer.
//!
//! Colors follow the Nord palette with semantic aliases for the drawing.

use ratatui::style::Color;

// === Nord Polar Night (Dark backgrounds) ===

/// Medium polar night shade.
pub const NORD_POLAR_NIGHT_3: Color = Color::Rgb(67, 76, 94);
/// Lightest polar night shade.
pub const NORD_POLAR_NIGHT_4: Color = Color::Rgb(76, 86, 106);

// === Nord Snow Storm (Light text) ===

/// Primary snow storm shade.
pub const NORD_SNOW_STORM_1: Color = Color::Rgb(216, 222, 233);

// === Nord Frost (Accent blues/cyans) ===

/// Frost accent 2 - cyan (primary accent).
pub const NORD_FROST_2: Color = Color::Rgb(136, 192, 208);
/// Frost accent 4 - deep blue.
pub const NORD_FROST_4: Color = Color::Rgb(94, 129, 172);

// === Nord Aurora (Status colors) ===

/// Aurora red - pitch circles.
pub const NORD_RED: Color = Color::Rgb(191, 97, 106);
/// Aurora yellow - labels.
pub const NORD_YELLOW: Color = Color::Rgb(235, 203, 139);
/// Aurora green - active toggles.
pub const NORD_GREEN: Color = Color::Rgb(163, 190, 140);

// === Semantic Color Aliases ===

/// Secondary/muted text color.
pub const TEXT_SECONDARY: Color = NORD_POLAR_NIGHT_4;
/// Active toggle color.
pub const SUCCESS: Color = NORD_GREEN;

// === Drawing Colors ===

/// Outline of the large (light) gear.
pub const GEAR_LIGHT: Color = NORD_SNOW_STORM_1;
/// Outline of the small (dark) gear.
pub const GEAR_DARK: Color = NORD_FROST_2;
/// Center holes.
pub const GEAR_HOLE: Color = NORD_FROST_4;
/// Pitch circles.
pub const GUIDE_PITCH: Color = NORD_RED;
/// Center axes, tip and root circles.
pub const GUIDE_AXIS: Color = NORD_POLAR_NIGHT_3;
/// Guide labels.
pub const GUIDE_LABEL: Color = NORD_YELLOW;

// === UI Element Colors ===

/// Canvas border color.
pub const BORDER_FOCUSED: Color = NORD_FROST_2;
/// Footer separator color.
pub const SEPARATOR: Color = Color::Rgb(50, 50, 50);
