// Application configuration
//
// This module contains:
// - Simulation tuning constants (shared by the field and the input handlers)
// - Frame pacing configuration
// - Persisted settings (theme preference) with TOML load/save

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;

// ============================================================================
// Simulation constants (virtual pixels unless noted)
// ============================================================================

/// Virtual pixels per terminal cell, horizontally
pub const CELL_WIDTH_PX: f64 = 10.0;

/// Virtual pixels per terminal cell, vertically
/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_HEIGHT_PX: f64 = 20.0;

/// Viewport area covered by one particle; population = floor(area / this)
/// An 80x24 terminal (800x480 px) yields 38 particles
pub const AREA_PER_PARTICLE: f64 = 10_000.0;

/// Maximum distance at which two particles are joined by a line
pub const MAX_LINK_DISTANCE: f64 = 100.0;

/// Peak opacity of a proximity line (at distance 0); fades linearly to zero
/// at MAX_LINK_DISTANCE
pub const LINK_OPACITY_CEILING: f64 = 0.2;

/// Radius within which the pointer inflates and repels a particle
pub const INTERACTION_RADIUS: f64 = 100.0;

/// Particle size when the pointer sits directly on it
pub const MAX_ZOOM_SIZE: f64 = 5.0;

/// Floor for the pointer distance used in the repulsion force term
/// The force is 1/d, so an unclamped d near zero would launch the particle
/// off-screen in a single frame
pub const MIN_POINTER_DISTANCE: f64 = 1.0;

/// Scale applied to the repulsion impulse per frame
pub const REPEL_STRENGTH: f64 = 0.05;

/// Fraction of the current size retained per frame while settling back to
/// base size (time constant ~10 frames)
pub const SIZE_DECAY: f64 = 0.9;

/// Fraction of the current velocity retained per frame while drifting back
/// to base velocity (time constant ~100 frames, deliberately slower than
/// size recovery)
pub const VELOCITY_DECAY: f64 = 0.99;

/// Half-width of the uniform random velocity burst applied by a scroll
/// event, per axis
pub const SCATTER_IMPULSE: f64 = 5.0;

// ============================================================================
// Frame pacing constants
// ============================================================================

/// Minimum frame interval in milliseconds (~60 fps)
pub const MIN_FRAME_MS: u64 = 16;

/// Maximum frame interval in milliseconds (4 fps, still animated)
pub const MAX_FRAME_MS: u64 = 250;

/// Frame interval adjustment step in milliseconds
pub const FRAME_STEP_MS: u64 = 16;

/// Default frame interval in milliseconds (~30 fps)
pub const DEFAULT_FRAME_MS: u64 = 33;

/// Frame time above which a frame counts as slow (the O(n^2) link pass is
/// the usual culprit on very large terminals)
pub const FRAME_TIME_THRESHOLD_MS: u128 = 100;

/// Number of consecutive slow frames before the link pass is switched off
pub const SLOW_FRAME_COUNT_THRESHOLD: u32 = 5;

// ============================================================================
// Frame pacing configuration
// ============================================================================

/// Configuration for the animation frame interval
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Frame interval in milliseconds (MIN_FRAME_MS..=MAX_FRAME_MS)
    pub frame_ms: u64,

    /// Timestamp of last interval change (for status bar feedback)
    pub last_change: Option<Instant>,
}

impl FrameConfig {
    pub fn new() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            last_change: None,
        }
    }

    /// Frame interval as a Duration, used as the event poll timeout
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Persisted settings
// ============================================================================

/// Settings persisted across runs
///
/// Stored at `<config_dir>/constel/config.toml`. Currently a single key: the
/// theme preference, read once at startup and written on every toggle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

/// Errors from loading or saving the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
}

impl Settings {
    /// Path of the settings file: `<config_dir>/constel/config.toml`
    pub fn path() -> Result<PathBuf, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(dir.join("constel").join("config.toml"))
    }

    /// Load settings from disk
    ///
    /// A missing file is not an error and yields defaults; any other failure
    /// (unreadable file, bad TOML) is reported so the caller can warn and
    /// fall back.
    pub fn load() -> Result<Self, SettingsError> {
        let path = Self::path()?;
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(SettingsError::Read { path, source: e }),
        };
        toml::from_str(&raw).map_err(|e| SettingsError::Parse { path, source: e })
    }

    /// Write settings to disk, creating the config directory if needed
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Write {
                path: path.clone(),
                source: e,
            })?;
        }
        std::fs::write(&path, raw).map_err(|e| SettingsError::Write { path, source: e })
    }
}
