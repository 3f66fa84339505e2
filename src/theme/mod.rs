// Theme module - palettes and color math for the particle field
//
// The field is recolored per frame from the active `Theme` flag, so a toggle
// takes effect on the very next draw without touching the simulation.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Dark-mode dot color, a pale lavender
/// RGB: (223, 196, 255)
pub const DARK_DOT: (u8, u8, u8) = (223, 196, 255);

/// Dark-mode line color, a muted grey-violet
/// RGB: (194, 182, 209)
pub const DARK_LINE: (u8, u8, u8) = (194, 182, 209);

/// Dark-mode canvas background
/// RGB: (26, 27, 38)
pub const DARK_BACKGROUND: (u8, u8, u8) = (26, 27, 38);

/// Light-mode dot color, a deep plum
/// RGB: (69, 50, 92)
pub const LIGHT_DOT: (u8, u8, u8) = (69, 50, 92);

/// Light-mode line color, a near-black violet
/// RGB: (43, 25, 66)
pub const LIGHT_LINE: (u8, u8, u8) = (43, 25, 66);

/// Light-mode canvas background
/// RGB: (236, 233, 244)
pub const LIGHT_BACKGROUND: (u8, u8, u8) = (236, 233, 244);

/// Visual theme flag
///
/// Persisted across runs in the settings file. Dark is the default when no
/// saved preference exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Flip between dark and light
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Color set for one theme: particle dots, proximity lines, and the canvas
/// background the lines fade into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dot: (u8, u8, u8),
    pub line: (u8, u8, u8),
    pub background: (u8, u8, u8),
}

impl Palette {
    pub fn dot_color(&self) -> Color {
        let (r, g, b) = self.dot;
        Color::Rgb(r, g, b)
    }

    pub fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::Rgb(r, g, b)
    }

    /// Line color at the given opacity
    ///
    /// Terminal cells have no alpha channel, so opacity is simulated by
    /// blending the line color toward the canvas background. Opacity 0.0
    /// yields the background itself (an invisible line), 1.0 the full line
    /// color.
    pub fn line_color(&self, opacity: f32) -> Color {
        interpolate_color(self.background, self.line, opacity)
    }
}

/// Look up the palette for a theme
///
/// Called fresh on every frame rather than cached, so a mid-animation theme
/// switch recolors the field within one frame.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            dot: DARK_DOT,
            line: DARK_LINE,
            background: DARK_BACKGROUND,
        },
        Theme::Light => Palette {
            dot: LIGHT_DOT,
            line: LIGHT_LINE,
            background: LIGHT_BACKGROUND,
        },
    }
}

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}
