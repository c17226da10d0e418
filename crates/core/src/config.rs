//! Tuning tables for the mini-games.
//!
//! Defaults are the calibrated values the games ship with. A TOML file can
//! override any subset of them; missing fields keep their defaults.
//!
//! ```
//! use pixel_arcade_core::ArcadeConfig;
//!
//! let cfg = ArcadeConfig::from_toml_str("[runner]\nthresholds = [3, 6, 9]\n").unwrap();
//! assert_eq!(cfg.runner.thresholds, [3, 6, 9]);
//! assert_eq!(cfg.dodger, ArcadeConfig::default().dodger);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::types::{
    BRIGHTNESS_LEVELS, DEFAULT_BRIGHTNESS, DIFFICULTY_LEVELS, DIFFICULTY_THRESHOLDS,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Complete tuning for every variant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub runner: RunnerTuning,
    pub dodger: DodgerTuning,
    pub stacker: StackerTuning,
    pub calibrator: CalibratorTuning,
}

/// Runner: per-level scroll speed, wall spacing and wall height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerTuning {
    pub thresholds: [u32; DIFFICULTY_THRESHOLDS],
    /// Pixels per tick
    pub speed: [f32; DIFFICULTY_LEVELS],
    pub min_spacing: [i32; DIFFICULTY_LEVELS],
    pub max_spacing: [i32; DIFFICULTY_LEVELS],
    pub max_wall_height: [i32; DIFFICULTY_LEVELS],
}

impl Default for RunnerTuning {
    fn default() -> Self {
        Self {
            thresholds: [5, 15, 30],
            speed: [0.30, 0.35, 0.40, 0.50],
            min_spacing: [12, 11, 10, 9],
            max_spacing: [20, 18, 16, 14],
            max_wall_height: [4, 5, 6, 7],
        }
    }
}

/// Dodger: per-level fall speed and wall spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgerTuning {
    pub thresholds: [u32; DIFFICULTY_THRESHOLDS],
    /// Rows per tick
    pub speed: [f32; DIFFICULTY_LEVELS],
    pub spacing: [f32; DIFFICULTY_LEVELS],
}

impl Default for DodgerTuning {
    fn default() -> Self {
        Self {
            thresholds: [5, 15, 30],
            speed: [0.20, 0.25, 0.30, 0.35],
            spacing: [12.0, 11.0, 10.0, 9.0],
        }
    }
}

/// Stacker: per-level shift cadence, player cadence and gaps per new row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackerTuning {
    pub thresholds: [u32; DIFFICULTY_THRESHOLDS],
    /// Ticks between playfield shifts
    pub shift_interval: [u32; DIFFICULTY_LEVELS],
    /// Ticks between player steps
    pub player_interval: [u32; DIFFICULTY_LEVELS],
    pub gaps_per_row: [u32; DIFFICULTY_LEVELS],
}

impl Default for StackerTuning {
    fn default() -> Self {
        Self {
            thresholds: [3, 8, 15],
            shift_interval: [400, 320, 260, 200],
            player_interval: [20, 16, 12, 10],
            gaps_per_row: [1, 2, 2, 3],
        }
    }
}

/// Calibrator: brightness ladder and power-on level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibratorTuning {
    pub levels: [u8; 8],
    pub initial_brightness: u8,
}

impl Default for CalibratorTuning {
    fn default() -> Self {
        Self {
            levels: BRIGHTNESS_LEVELS,
            initial_brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl ArcadeConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: ArcadeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded arcade config");
        Ok(config)
    }

    /// Render as TOML (useful as a starting point for a custom file)
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every table for values the simulations cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        check_thresholds("runner.thresholds", &self.runner.thresholds)?;
        check_thresholds("dodger.thresholds", &self.dodger.thresholds)?;
        check_thresholds("stacker.thresholds", &self.stacker.thresholds)?;

        let r = &self.runner;
        if r.speed.iter().any(|&s| !(s > 0.0 && s.is_finite())) {
            return Err(ConfigError::invalid("runner.speed", "speeds must be positive"));
        }
        for level in 0..DIFFICULTY_LEVELS {
            if r.min_spacing[level] < 2 {
                return Err(ConfigError::invalid(
                    "runner.min_spacing",
                    "spacing must leave room for the wall width",
                ));
            }
            if r.min_spacing[level] > r.max_spacing[level] {
                return Err(ConfigError::invalid(
                    "runner.max_spacing",
                    format!("level {} max spacing is below min spacing", level),
                ));
            }
            if !(2..SCREEN_HEIGHT).contains(&r.max_wall_height[level]) {
                return Err(ConfigError::invalid(
                    "runner.max_wall_height",
                    format!("wall height must be in 2..={}", SCREEN_HEIGHT - 1),
                ));
            }
        }

        let d = &self.dodger;
        if d.speed.iter().any(|&s| !(s > 0.0 && s.is_finite())) {
            return Err(ConfigError::invalid("dodger.speed", "speeds must be positive"));
        }
        if d.spacing.iter().any(|&s| !(s >= 1.0 && s.is_finite())) {
            return Err(ConfigError::invalid("dodger.spacing", "spacing must be at least 1"));
        }

        let s = &self.stacker;
        if s.shift_interval.contains(&0) {
            return Err(ConfigError::invalid("stacker.shift_interval", "must be positive"));
        }
        if s.player_interval.contains(&0) {
            return Err(ConfigError::invalid("stacker.player_interval", "must be positive"));
        }
        if s
            .gaps_per_row
            .iter()
            .any(|&g| g == 0 || g >= SCREEN_WIDTH as u32)
        {
            return Err(ConfigError::invalid(
                "stacker.gaps_per_row",
                format!("gaps must be in 1..={}", SCREEN_WIDTH - 1),
            ));
        }

        let c = &self.calibrator;
        if !c.levels.windows(2).all(|w| w[0] < w[1]) {
            return Err(ConfigError::invalid(
                "calibrator.levels",
                "levels must be strictly ascending",
            ));
        }
        if !c.levels.contains(&c.initial_brightness) {
            return Err(ConfigError::invalid(
                "calibrator.initial_brightness",
                "initial brightness must be one of the levels",
            ));
        }

        Ok(())
    }
}

fn check_thresholds(field: &'static str, thresholds: &[u32]) -> ConfigResult<()> {
    if thresholds.first() == Some(&0) {
        return Err(ConfigError::invalid(field, "first threshold must be above zero"));
    }
    if !thresholds.windows(2).all(|w| w[0] < w[1]) {
        return Err(ConfigError::invalid(field, "thresholds must be strictly ascending"));
    }
    Ok(())
}
