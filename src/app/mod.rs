// Application state management
//
// This module contains the AppState struct that owns the whole simulation
// context: the particle field, the pointer, the theme flag, and frame
// pacing. Input handlers mutate it between frames; the tick reads and
// mutates it exactly once per frame.

pub mod config;
pub mod event;

pub use config::{FrameConfig, Settings};

use crate::field::ParticleField;
use crate::theme::Theme;
use config::{
    CELL_HEIGHT_PX, CELL_WIDTH_PX, FRAME_STEP_MS, FRAME_TIME_THRESHOLD_MS, MAX_FRAME_MS,
    MIN_FRAME_MS, SLOW_FRAME_COUNT_THRESHOLD,
};
use std::time::Instant;

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Active visual theme, consulted fresh on every draw
    pub theme: Theme,

    /// The particle collection and simulation viewport
    pub field: ParticleField,

    /// Last known pointer position in virtual pixels, None until the first
    /// mouse movement
    pub pointer: Option<(f64, f64)>,

    /// Frame interval configuration
    pub frame_config: FrameConfig,

    /// Frames rendered since startup
    pub frame_count: u64,

    /// Links drawn in the most recent frame (status bar display)
    pub link_count: usize,

    /// Counter for consecutive slow frames
    slow_frame_count: u32,

    /// Whether the link pass has been switched off because frames were
    /// consistently slow; the dots keep animating
    pub links_reduced: bool,
}

impl AppState {
    /// Create the application state for a terminal of the given cell size
    pub fn new(settings: Settings, cols: u16, rows: u16) -> Self {
        let (width, height) = viewport_px(cols, rows);
        Self {
            running: true,
            theme: settings.theme,
            field: ParticleField::new(width, height),
            pointer: None,
            frame_config: FrameConfig::new(),
            frame_count: 0,
            link_count: 0,
            slow_frame_count: 0,
            links_reduced: false,
        }
    }

    /// Advance the simulation one frame
    pub fn on_tick(&mut self) {
        self.field.step(self.pointer);
        self.frame_count += 1;
    }

    /// Record a pointer position given in terminal cell coordinates
    pub fn on_pointer_moved(&mut self, column: u16, row: u16) {
        self.pointer = Some((
            column as f64 * CELL_WIDTH_PX,
            row as f64 * CELL_HEIGHT_PX,
        ));
    }

    /// Scroll perturbation: one burst per event, bursts compound
    pub fn on_scroll(&mut self) {
        self.field.scatter();
    }

    /// Rebuild the field for a resized terminal, keeping density constant
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let (width, height) = viewport_px(cols, rows);
        self.field.resize(width, height);
    }

    /// Flip the theme and persist the choice
    ///
    /// Persistence failure is logged and otherwise ignored: losing the saved
    /// preference must not take the animation down.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        let settings = Settings { theme: self.theme };
        if let Err(e) = settings.save() {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
    }

    /// Speed the animation up one step (shorter frame interval)
    pub fn increase_frame_rate(&mut self) {
        let new_interval = self.frame_config.frame_ms.saturating_sub(FRAME_STEP_MS);
        self.frame_config.frame_ms = new_interval.max(MIN_FRAME_MS);
        self.frame_config.last_change = Some(Instant::now());
    }

    /// Slow the animation down one step (longer frame interval)
    pub fn decrease_frame_rate(&mut self) {
        let new_interval = self.frame_config.frame_ms.saturating_add(FRAME_STEP_MS);
        self.frame_config.frame_ms = new_interval.min(MAX_FRAME_MS);
        self.frame_config.last_change = Some(Instant::now());
    }

    /// Track per-frame work time and drop the link pass if frames are
    /// consistently slow
    ///
    /// `work` is the time spent simulating and drawing one frame, measured
    /// by the caller around `on_tick` plus the terminal draw. It must not
    /// include the idle event-poll wait, or slow pacing chosen with `-`
    /// would read as slow rendering. The O(n^2) proximity pass dominates
    /// frame cost on very large terminals; after enough consecutive slow
    /// frames the pass is disabled until the user respawns the field.
    pub fn observe_frame_time(&mut self, work: std::time::Duration) {
        let frame_time = work.as_millis();

        if frame_time > FRAME_TIME_THRESHOLD_MS {
            self.slow_frame_count += 1;
            if self.slow_frame_count >= SLOW_FRAME_COUNT_THRESHOLD && !self.links_reduced {
                self.links_reduced = true;
                tracing::info!(
                    frame_time_ms = frame_time,
                    slow_frame_count = self.slow_frame_count,
                    "disabling proximity lines due to slow frame times"
                );
            }
        } else if !self.links_reduced {
            self.slow_frame_count = 0;
        }
    }

    /// Re-enable the link pass and restart the slow-frame count
    pub fn reset_link_reduction(&mut self) {
        self.links_reduced = false;
        self.slow_frame_count = 0;
    }
}

/// Convert a terminal size in cells to the simulation viewport in virtual
/// pixels
fn viewport_px(cols: u16, rows: u16) -> (f64, f64) {
    (
        cols as f64 * CELL_WIDTH_PX,
        rows as f64 * CELL_HEIGHT_PX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> AppState {
        // 80x24 cells -> 800x480 px -> 38 particles
        AppState::new(Settings::default(), 80, 24)
    }

    #[test]
    fn test_new_sizes_field_from_terminal() {
        let app = test_app();
        assert_eq!(app.field.width(), 800.0);
        assert_eq!(app.field.height(), 480.0);
        assert_eq!(app.field.len(), 38);
        assert!(app.running);
        assert_eq!(app.pointer, None);
    }

    #[test]
    fn test_pointer_conversion_to_virtual_px() {
        let mut app = test_app();
        app.on_pointer_moved(10, 5);
        assert_eq!(app.pointer, Some((100.0, 100.0)));
    }

    #[test]
    fn test_tick_advances_frame_count() {
        let mut app = test_app();
        for _ in 0..5 {
            app.on_tick();
        }
        assert_eq!(app.frame_count, 5);
    }

    #[test]
    fn test_resize_keeps_density_constant() {
        let mut app = test_app();
        app.on_resize(160, 48);
        assert_eq!(app.field.width(), 1600.0);
        assert_eq!(app.field.height(), 480.0 * 2.0);
        // 1600 * 960 / 10_000 = 153
        assert_eq!(app.field.len(), 153);
    }

    #[test]
    fn test_theme_toggle_is_immediate_and_persists_across_ticks() {
        let mut app = test_app();
        assert_eq!(app.theme, Theme::Dark);

        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);

        // Theme survives frame updates without reinitializing the field
        let count_before = app.field.len();
        for _ in 0..10 {
            app.on_tick();
        }
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.field.len(), count_before);

        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn test_frame_rate_clamps() {
        let mut app = test_app();

        for _ in 0..100 {
            app.increase_frame_rate();
        }
        assert_eq!(app.frame_config.frame_ms, MIN_FRAME_MS);

        for _ in 0..100 {
            app.decrease_frame_rate();
        }
        assert_eq!(app.frame_config.frame_ms, MAX_FRAME_MS);
        assert!(app.frame_config.last_change.is_some());
    }

    #[test]
    fn test_slow_pacing_never_disables_links() {
        // A user slowing the animation with '-' makes wall-clock frame
        // gaps long, but the work per frame stays small; quick frames must
        // never latch links_reduced no matter how many elapse
        let mut app = test_app();
        for _ in 0..100 {
            app.decrease_frame_rate();
        }
        assert!(app.frame_config.frame_ms > FRAME_TIME_THRESHOLD_MS as u64);

        for _ in 0..20 {
            app.observe_frame_time(std::time::Duration::from_millis(5));
        }
        assert!(!app.links_reduced);
        assert_eq!(app.slow_frame_count, 0);
    }

    #[test]
    fn test_slow_work_disables_links_after_threshold() {
        let mut app = test_app();
        let slow = std::time::Duration::from_millis(FRAME_TIME_THRESHOLD_MS as u64 + 50);

        for _ in 0..SLOW_FRAME_COUNT_THRESHOLD - 1 {
            app.observe_frame_time(slow);
        }
        assert!(!app.links_reduced);

        app.observe_frame_time(slow);
        assert!(app.links_reduced);

        // One fast frame does not re-enable the pass; that takes an
        // explicit respawn
        app.observe_frame_time(std::time::Duration::from_millis(5));
        assert!(app.links_reduced);
    }

    #[test]
    fn test_fast_frame_resets_slow_streak() {
        let mut app = test_app();
        let slow = std::time::Duration::from_millis(FRAME_TIME_THRESHOLD_MS as u64 + 50);

        for _ in 0..SLOW_FRAME_COUNT_THRESHOLD - 1 {
            app.observe_frame_time(slow);
        }
        app.observe_frame_time(std::time::Duration::from_millis(5));
        assert_eq!(app.slow_frame_count, 0);
        assert!(!app.links_reduced);
    }

    #[test]
    fn test_link_reduction_reset() {
        let mut app = test_app();
        app.links_reduced = true;
        app.slow_frame_count = 99;
        app.reset_link_reduction();
        assert!(!app.links_reduced);
        assert_eq!(app.slow_frame_count, 0);
    }

    #[test]
    fn test_simulation_settles_with_no_input() {
        // With no pointer and no scroll the whole field converges toward
        // its rest state
        let mut app = test_app();
        app.field.scatter();
        for _ in 0..1000 {
            app.on_tick();
        }
        for p in app.field.particles() {
            assert!(p.size >= p.base_size);
            // The burst (up to 5 px/frame per axis) has decayed away; what
            // remains is rest drift, possibly sign-flipped by a recent wall
            // bounce
            assert!((p.vx - p.base_vx).abs() < 1.0);
            assert!((p.vy - p.base_vy).abs() < 1.0);
        }
    }
}
