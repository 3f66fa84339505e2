// Input event handling
//
// Keyboard and mouse handlers that translate crossterm events into state
// mutations. Handlers run between frames; the next tick picks the new state
// up.

use super::AppState;
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q`, `Esc` - Quit
/// - `t`, `T` - Toggle light/dark theme (persisted)
/// - `Space` - Scatter burst (same effect as a scroll event)
/// - `r`, `R` - Respawn the field and re-enable proximity lines
/// - `+`, `=` - Faster animation (shorter frame interval)
/// - `-`, `_` - Slower animation (longer frame interval)
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
            false
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            true
        }
        KeyCode::Char(' ') => {
            app.on_scroll();
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            let (width, height) = (app.field.width(), app.field.height());
            app.field.initialize(width, height);
            app.reset_link_reduction();
            true
        }
        // + = faster animation (decrease interval)
        // - = slower animation (increase interval)
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.increase_frame_rate();
            true
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.decrease_frame_rate();
            true
        }
        _ => true,
    }
}

/// Handle mouse events: movement drives the interaction radius, scroll
/// scatters the field
///
/// Coordinates arrive in terminal cells and are converted to virtual pixels
/// without compensating for the canvas border, matching the
/// viewport-coordinate behavior of the original effect.
pub fn handle_mouse_event(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.on_pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            app.on_scroll();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{MAX_FRAME_MS, MIN_FRAME_MS};
    use crate::app::Settings;
    use crate::theme::Theme;
    use crossterm::event::KeyModifiers;

    fn test_app() -> AppState {
        AppState::new(Settings::default(), 80, 24)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();

        assert!(app.running);
        let result = handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Char('Q'));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Esc);
        assert!(!result);
        assert!(!app.running);
    }

    #[test]
    fn test_theme_toggle_key() {
        let mut app = test_app();
        assert_eq!(app.theme, Theme::Dark);

        handle_key_event(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Light);

        handle_key_event(&mut app, KeyCode::Char('T'));
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn test_respawn_key_rebuilds_field() {
        let mut app = test_app();
        app.links_reduced = true;
        let count = app.field.len();

        handle_key_event(&mut app, KeyCode::Char('r'));
        // Same viewport, same density
        assert_eq!(app.field.len(), count);
        assert!(!app.links_reduced);
    }

    #[test]
    fn test_frame_rate_keys_clamp() {
        let mut app = test_app();

        for _ in 0..100 {
            handle_key_event(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.frame_config.frame_ms, MIN_FRAME_MS);

        for _ in 0..100 {
            handle_key_event(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.frame_config.frame_ms, MAX_FRAME_MS);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = test_app();
        let theme = app.theme;
        assert!(handle_key_event(&mut app, KeyCode::Char('z')));
        assert!(app.running);
        assert_eq!(app.theme, theme);
    }

    #[test]
    fn test_mouse_move_sets_pointer() {
        let mut app = test_app();
        assert_eq!(app.pointer, None);

        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 40, 12));
        assert_eq!(app.pointer, Some((400.0, 240.0)));

        // Later movements overwrite, no smoothing
        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 0, 0));
        assert_eq!(app.pointer, Some((0.0, 0.0)));
    }

    #[test]
    fn test_scroll_scatters_field() {
        let mut app = test_app();
        let before: Vec<f64> = app.field.particles().iter().map(|p| p.vx).collect();

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0, 0));
        let changed = app
            .field
            .particles()
            .iter()
            .zip(&before)
            .filter(|(p, vx)| p.vx != **vx)
            .count();
        assert!(changed > 30);
    }

    #[test]
    fn test_clicks_do_not_disturb_state() {
        use crossterm::event::MouseButton;
        let mut app = test_app();
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 10, 10),
        );
        assert_eq!(app.pointer, None);
    }
}
