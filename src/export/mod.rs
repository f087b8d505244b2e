//! Output sinks for a generated profile.

pub mod svg;

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

pub use svg::SvgOptions;

use crate::error::GearError;
use crate::gear::GearProfile;

/// Where a profile ends up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Interactive terminal view; blocks until dismissed.
    Window,
    /// SVG document written to this path.
    File(PathBuf),
}

/// Sends `profile` to `sink`.
///
/// # Errors
///
/// Returns [`GearError::Io`] if the SVG cannot be written and
/// [`GearError::DisplayUnavailable`] if the window sink has no terminal.
pub fn export(profile: &GearProfile, sink: &Sink, options: SvgOptions) -> Result<(), GearError> {
    match sink {
        Sink::Window => crate::ui::show(profile),
        Sink::File(path) => {
            let is_svg = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
            if !is_svg {
                warn!(path = %path.display(), "output path has no .svg extension, writing SVG anyway");
            }

            let document = svg::render(profile, options);
            // Missing parent directories are an error, never created.
            fs::write(path, document.as_bytes()).map_err(|e| GearError::io(path, e))?;
            info!(path = %path.display(), bytes = document.len(), "wrote svg");
            Ok(())
        }
    }
}
