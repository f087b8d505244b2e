//! Viewer state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants;
use crate::gear::{Bounds, GearProfile};

/// State of the interactive gear viewer.
pub struct App<'a> {
    /// Profile being shown.
    pub profile: &'a GearProfile,
    /// Cleared when the user asks to quit.
    pub running: bool,
    /// Whether the gears turn on each tick.
    pub spinning: bool,
    /// Pitch circles, axes, and labels.
    pub show_guides: bool,
    /// Accumulated rotation of the first gear (radians).
    pub angle: f64,
    /// Values above 1 zoom in.
    pub zoom: f64,
    /// Pan offset in gear units.
    pub pan: (f64, f64),
}

impl<'a> App<'a> {
    pub fn new(profile: &'a GearProfile) -> Self {
        Self {
            profile,
            running: true,
            spinning: false,
            show_guides: true,
            angle: 0.0,
            zoom: 1.0,
            pan: (0.0, 0.0),
        }
    }

    /// Advances the animation by one tick.
    pub fn tick(&mut self) {
        if self.spinning {
            self.angle = (self.angle + constants::SPIN_STEP) % std::f64::consts::TAU;
        }
    }

    /// Extra rotation of gear `index` for the current animation angle.
    #[must_use]
    pub fn gear_angle(&self, index: usize) -> f64 {
        self.angle * self.profile.speed_ratio(index)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let step = self.visible().width() * constants::PAN_FRACTION;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char(' ') => self.spinning = !self.spinning,
            KeyCode::Char('g') => self.show_guides = !self.show_guides,
            KeyCode::Char('+' | '=') => self.zoom *= constants::ZOOM_STEP,
            KeyCode::Char('-') => self.zoom /= constants::ZOOM_STEP,
            KeyCode::Left => self.pan.0 -= step,
            KeyCode::Right => self.pan.0 += step,
            KeyCode::Up => self.pan.1 += step,
            KeyCode::Down => self.pan.1 -= step,
            KeyCode::Char('r') => {
                self.zoom = 1.0;
                self.pan = (0.0, 0.0);
                self.angle = 0.0;
            }
            _ => {}
        }
    }

    /// Visible region before aspect correction.
    #[must_use]
    pub fn visible(&self) -> Bounds {
        self.profile
            .frame()
            .scaled(1.0 / self.zoom)
            .shifted(self.pan.0, self.pan.1)
    }

    /// Visible region widened so gear units stay square on a terminal of
    /// `cols` x `rows` cells (cells are about twice as tall as wide).
    #[must_use]
    pub fn view_bounds(&self, cols: u16, rows: u16) -> Bounds {
        fit_aspect(self.visible(), cols, rows)
    }
}

fn fit_aspect(bounds: Bounds, cols: u16, rows: u16) -> Bounds {
    if cols == 0 || rows == 0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return bounds;
    }
    let screen = f64::from(cols) / (2.0 * f64::from(rows));
    let world = bounds.width() / bounds.height();
    if world < screen {
        bounds.scaled_xy(screen / world, 1.0)
    } else {
        bounds.scaled_xy(1.0, world / screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{GearParams, InvoluteSource, ProfileSource};

    fn profile() -> GearProfile {
        InvoluteSource::new(GearParams::default()).generate().unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let p = profile();
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = App::new(&p);
            app.handle_key(key(code));
            assert!(!app.running);
        }
        let mut app = App::new(&p);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_spin_only_when_enabled() {
        let p = profile();
        let mut app = App::new(&p);
        app.tick();
        assert!(app.angle.abs() < f64::EPSILON);
        app.handle_key(key(KeyCode::Char(' ')));
        app.tick();
        assert!(app.angle > 0.0);
        // small gear turns twice as fast the other way
        assert!((app.gear_angle(1) + 2.0 * app.angle).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_and_reset() {
        let p = profile();
        let mut app = App::new(&p);
        let full = app.visible().width();
        app.handle_key(key(KeyCode::Char('+')));
        assert!(app.visible().width() < full);
        app.handle_key(key(KeyCode::Right));
        assert!(app.pan.0 > 0.0);
        app.handle_key(key(KeyCode::Char('r')));
        assert!((app.visible().width() - full).abs() < 1e-9);
        assert_eq!(app.pan, (0.0, 0.0));
    }

    #[test]
    fn test_guides_toggle() {
        let p = profile();
        let mut app = App::new(&p);
        assert!(app.show_guides);
        app.handle_key(key(KeyCode::Char('g')));
        assert!(!app.show_guides);
    }

    #[test]
    fn test_view_bounds_keep_square_units() {
        let p = profile();
        let app = App::new(&p);
        let view = app.view_bounds(100, 30);
        let per_col = view.width() / 100.0;
        let per_row = view.height() / 30.0;
        assert!((per_row / per_col - 2.0).abs() < 1e-9);
        // never crops the frame
        let frame = p.frame();
        assert!(view.width() >= frame.width() - 1e-9);
        assert!(view.height() >= frame.height() - 1e-9);
    }
}
