//! Footer widget with state-aware keybinding hints

use crate::app::App;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render viewer footer; toggles show their current state
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = hints(app);
    render_hints(frame, area, &hints);
}

fn hints(app: &App) -> Vec<(&'static str, &'static str, bool)> {
    vec![
        ("Space", if app.spinning { "Pause" } else { "Spin" }, app.spinning),
        ("g", "Guides", app.show_guides),
        ("+/-", "Zoom", false),
        ("←↑↓→", "Pan", false),
        ("r", "Reset", false),
        ("q", "Quit", false),
    ]
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str, bool)]) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Hints (left)
            Constraint::Length(20), // Branding (right)
        ])
        .split(area);

    // 1. Render hints on the left
    let mut hint_spans = Vec::new();
    let mut current_width = 0;
    let max_width = chunks[0].width as usize;

    hint_spans.push(Span::raw(" "));
    current_width += 1;

    for (i, (key, action, active)) in hints.iter().enumerate() {
        // "key" + " " + "action", plus " │ " before every item but the first
        let sep_width = if i > 0 { 3 } else { 0 };
        let item_width = key.chars().count() + 1 + action.len() + sep_width;

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(" │ ", Style::default().fg(theme::SEPARATOR)));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        let action_color = if *active {
            theme::SUCCESS
        } else {
            Color::DarkGray
        };
        hint_spans.push(Span::styled(*action, Style::default().fg(action_color)));

        current_width += item_width;
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), chunks[0]);

    // 2. Render branding on the right
    let branding = Line::from(vec![Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(theme::TEXT_SECONDARY),
    )]);
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        chunks[1],
    );
}
