//! Gear canvas

use crate::app::App;
use crate::constants;
use crate::gear::{PlacedGear, Point, Shade};
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Context, Line},
        Block, Borders,
    },
    Frame,
};

/// Render the gear drawing into `area`
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(constants::TITLE_VIEWER);

    let inner = block.inner(area);
    let view = app.view_bounds(inner.width, inner.height);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([view.min.x, view.max.x])
        .y_bounds([view.min.y, view.max.y])
        .paint(|ctx| {
            if app.show_guides {
                draw_axes(ctx, app, view.min, view.max);
            }
            for (index, gear) in app.profile.gears.iter().enumerate() {
                draw_gear(ctx, gear, app.gear_angle(index));
            }
            if app.show_guides {
                ctx.layer();
                draw_guides(ctx, app);
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_gear(ctx: &mut Context, gear: &PlacedGear, angle: f64) {
    let color = match gear.shade {
        Shade::Light => theme::GEAR_LIGHT,
        Shade::Dark => theme::GEAR_DARK,
    };
    let outline = gear.world_outline(angle);
    for (i, a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];
        ctx.draw(&Line::new(a.x, a.y, b.x, b.y, color));
    }
    ctx.draw(&Circle {
        x: gear.center.x,
        y: gear.center.y,
        radius: gear.hole_radius,
        color: theme::GEAR_HOLE,
    });
}

fn draw_axes(ctx: &mut Context, app: &App, min: Point, max: Point) {
    ctx.draw(&Line::new(min.x, 0.0, max.x, 0.0, theme::GUIDE_AXIS));
    for gear in &app.profile.gears {
        ctx.draw(&Line::new(
            gear.center.x,
            min.y,
            gear.center.x,
            max.y,
            theme::GUIDE_AXIS,
        ));
    }
}

fn draw_guides(ctx: &mut Context, app: &App) {
    let label = |text: String| Span::styled(text, Style::default().fg(theme::GUIDE_LABEL));
    for gear in &app.profile.gears {
        for radius in [gear.root_radius, gear.tip_radius] {
            ctx.draw(&Circle {
                x: gear.center.x,
                y: gear.center.y,
                radius,
                color: theme::GUIDE_AXIS,
            });
        }
        ctx.draw(&Circle {
            x: gear.center.x,
            y: gear.center.y,
            radius: gear.pitch_radius,
            color: theme::GUIDE_PITCH,
        });
        ctx.print(
            gear.center.x - gear.pitch_radius * 0.3,
            gear.center.y - gear.pitch_radius * 1.1,
            label(format!("{} teeth", gear.teeth)),
        );
    }
    if let Some(first) = app.profile.gears.first() {
        ctx.print(
            app.profile.center_distance / 2.0 - first.pitch_radius * 0.3,
            first.pitch_radius * 1.1,
            Span::styled(
                format!("Pressure Angle: {}°", app.profile.pressure_angle),
                Style::default().fg(Color::Gray),
            ),
        );
    }
}
