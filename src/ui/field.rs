// Particle field rendering
//
// Paints one frame: proximity lines first, then the particle dots on a
// separate layer so dots always sit on top of the lines crossing them.

use crate::app::AppState;
use crate::theme::palette;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, BorderType, Borders,
    },
    Frame,
};

pub fn render_field(f: &mut Frame, area: Rect, app: &mut AppState) {
    // Palette is looked up per frame, never cached, so a theme toggle
    // recolors the next frame without touching the simulation
    let palette = palette(app.theme);

    let links = if app.links_reduced {
        Vec::new()
    } else {
        app.field.links()
    };
    app.link_count = links.len();

    let field = &app.field;
    let height = field.height();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.dot_color()))
                .title(" constel "),
        )
        .background_color(palette.background_color())
        .marker(Marker::Braille)
        .x_bounds([0.0, field.width()])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            // Simulation y grows downward, canvas y grows upward
            for link in &links {
                ctx.draw(&CanvasLine {
                    x1: link.from.0,
                    y1: height - link.from.1,
                    x2: link.to.0,
                    y2: height - link.to.1,
                    color: palette.line_color(link.opacity as f32),
                });
            }

            ctx.layer();

            for p in field.particles() {
                ctx.draw(&Circle {
                    x: p.x,
                    y: height - p.y,
                    radius: p.size,
                    color: palette.dot_color(),
                });
            }
        });

    f.render_widget(canvas, area);
}
