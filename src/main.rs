// constel - an animated, mouse-reactive particle constellation for the
// terminal

mod app;
mod field;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{
    event::{handle_key_event, handle_mouse_event},
    AppState, Settings,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    // Load the saved theme preference; a broken settings file degrades to
    // defaults rather than blocking startup
    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load settings, using defaults");
        Settings::default()
    });

    // Setup terminal. Failure here is fatal: without a drawing surface
    // there is nothing to animate and nothing transient to retry.
    enable_raw_mode().context("terminal does not support raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("could not create drawing surface")?;

    // Run app
    let res = run_app(&mut terminal, settings);

    // Restore terminal before reporting anything, then let the error (if
    // any) propagate so the process exits non-zero
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    settings: Settings,
) -> Result<()> {
    let size = terminal.size().context("drawing surface unavailable")?;
    let mut app = AppState::new(settings, size.width, size.height);

    loop {
        // Only simulation and drawing count toward frame time; the idle
        // poll wait below is pacing, not work
        let frame_start = Instant::now();
        app.on_tick();
        terminal.draw(|f| ui::draw(f, &mut app))?;
        app.observe_frame_time(frame_start.elapsed());

        if !app.running {
            return Ok(());
        }

        // Block for at most one frame interval, then drain whatever input
        // queued up so a burst of pointer moves lands within one frame
        if event::poll(app.frame_config.interval())? {
            loop {
                match event::read()? {
                    Event::Key(key) => {
                        handle_key_event(&mut app, key.code);
                    }
                    Event::Mouse(mouse) => handle_mouse_event(&mut app, mouse),
                    Event::Resize(cols, rows) => app.on_resize(cols, rows),
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}
