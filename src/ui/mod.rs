// UI rendering module
//
// The main draw() function lays out the particle canvas over a one-line
// status bar.

mod field;
mod status_bar;

use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use field::render_field;
use status_bar::render_status_bar;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Particle canvas
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_field(f, chunks[0], app);
    render_status_bar(f, chunks[1], app);
}
