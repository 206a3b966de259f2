//! Runtime configuration read from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use crate::term::ScreenMode;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_EDGE, MIN_BOARD_EDGE};

/// Where commands come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// One command per line on stdin.
    #[default]
    Line,
    /// Single key presses in raw mode.
    Keys,
}

impl InputMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "line" | "lines" => Some(InputMode::Line),
            "key" | "keys" => Some(InputMode::Keys),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
    pub input: InputMode,
    pub screen: ScreenMode,
    /// Deliver unrecognized lines as an idle tick instead of skipping them.
    pub idle_ticks: bool,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: 1,
            input: InputMode::Line,
            screen: ScreenMode::Plain,
            idle_ticks: false,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup("TETRIS_BOARD_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = lookup("TETRIS_BOARD_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);

        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let input = lookup("TETRIS_INPUT")
            .and_then(|s| InputMode::from_str(&s))
            .unwrap_or(defaults.input);
        let screen = lookup("TETRIS_SCREEN")
            .and_then(|s| ScreenMode::from_str(&s))
            .unwrap_or(defaults.screen);

        let idle_ticks = lookup("TETRIS_IDLE_TICKS")
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.idle_ticks);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            seed,
            input,
            screen,
            idle_ticks,
            log_path,
        }
    }

    /// Reject boards too small to hold every shape in every orientation, or
    /// too large to lay out in a terminal frame.
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_BOARD_EDGE || self.height < MIN_BOARD_EDGE {
            bail!(
                "board {}x{} is too small, both edges must be at least {}",
                self.width,
                self.height,
                MIN_BOARD_EDGE
            );
        }
        if self.width > MAX_BOARD_EDGE || self.height > MAX_BOARD_EDGE {
            bail!(
                "board {}x{} is too large, both edges must be at most {}",
                self.width,
                self.height,
                MAX_BOARD_EDGE
            );
        }
        Ok(())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[("TETRIS_SEED", "7")]);
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.seed, 7);
        assert_eq!(config.input, InputMode::Line);
        assert_eq!(config.screen, ScreenMode::Plain);
        assert!(!config.idle_ticks);
        assert_eq!(config.log_path, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("TETRIS_BOARD_WIDTH", "12"),
            ("TETRIS_BOARD_HEIGHT", " 8 "),
            ("TETRIS_SEED", "42"),
            ("TETRIS_INPUT", "keys"),
            ("TETRIS_SCREEN", "screen"),
            ("TETRIS_IDLE_TICKS", "true"),
            ("TETRIS_LOG_PATH", "/tmp/ticks.jsonl"),
        ]);
        assert_eq!((config.width, config.height), (12, 8));
        assert_eq!(config.seed, 42);
        assert_eq!(config.input, InputMode::Keys);
        assert_eq!(config.screen, ScreenMode::Screen);
        assert!(config.idle_ticks);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/ticks.jsonl"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("TETRIS_BOARD_WIDTH", "wide"),
            ("TETRIS_INPUT", "mouse"),
            ("TETRIS_LOG_PATH", "   "),
        ]);
        assert_eq!(config.width, 10);
        assert_eq!(config.input, InputMode::Line);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn validate_rejects_small_boards() {
        let config = config_from(&[("TETRIS_BOARD_WIDTH", "3")]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("3x20"));

        let config = config_from(&[("TETRIS_BOARD_HEIGHT", "4"), ("TETRIS_BOARD_WIDTH", "4")]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_huge_boards() {
        let config = config_from(&[
            ("TETRIS_BOARD_WIDTH", "65535"),
            ("TETRIS_BOARD_HEIGHT", "4"),
        ]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("too large"));

        let config = config_from(&[("TETRIS_BOARD_HEIGHT", "1025")]);
        assert!(config.validate().is_err());

        let config = config_from(&[
            ("TETRIS_BOARD_WIDTH", "1024"),
            ("TETRIS_BOARD_HEIGHT", "1024"),
        ]);
        assert!(config.validate().is_ok());
    }
}
