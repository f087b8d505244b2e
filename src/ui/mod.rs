//! Terminal viewer: display checks, event loop, and rendering.

mod viewer;
mod widgets;

use std::io::IsTerminal;

use ratatui::{
    layout::{Constraint, Layout},
    DefaultTerminal, Frame,
};
use tracing::{debug, info};

use crate::app::App;
use crate::constants;
use crate::error::GearError;
use crate::event::{Event, EventHandler};
use crate::gear::GearProfile;

/// Main render function - canvas on top, key hints below
pub fn render(frame: &mut Frame, app: &App) {
    let [canvas, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    viewer::render(frame, app, canvas);
    widgets::footer::render(frame, app, footer);
}

/// Checks that there is a terminal to draw on.
///
/// # Errors
///
/// Returns [`GearError::DisplayUnavailable`] when stdout is redirected or
/// the terminal is declared dumb.
pub fn ensure_display() -> Result<(), GearError> {
    let term = std::env::var("TERM").ok();
    check_display(std::io::stdout().is_terminal(), term.as_deref())
}

fn check_display(stdout_is_tty: bool, term: Option<&str>) -> Result<(), GearError> {
    if !stdout_is_tty {
        return Err(GearError::display(constants::ERR_DISPLAY_NOT_TTY));
    }
    if term == Some("dumb") {
        return Err(GearError::display(constants::ERR_DISPLAY_DUMB_TERM));
    }
    Ok(())
}

/// Shows `profile` full screen and blocks until the user quits.
///
/// # Errors
///
/// Returns [`GearError::DisplayUnavailable`] if there is no usable terminal
/// or drawing fails.
pub fn show(profile: &GearProfile) -> Result<(), GearError> {
    ensure_display()?;

    let mut terminal = ratatui::try_init().map_err(|e| GearError::display(e.to_string()))?;
    info!("viewer started");
    let result = run(&mut terminal, profile);
    ratatui::restore();
    info!("viewer closed");
    result
}

fn run(terminal: &mut DefaultTerminal, profile: &GearProfile) -> Result<(), GearError> {
    let events = EventHandler::new(constants::DEFAULT_TICK_RATE);
    let mut app = App::new(profile);

    while app.running {
        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| GearError::display(e.to_string()))?;

        match events.next() {
            Ok(Event::Key(key)) => app.handle_key(key),
            Ok(Event::Resize(w, h)) => debug!(w, h, "terminal resized"),
            Ok(Event::Tick) => app.tick(),
            Err(_) => return Err(GearError::display("terminal input closed")),
        }
    }
    Ok(())
}
