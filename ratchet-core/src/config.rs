//! Controller configuration
//!
//! There is no configuration file: the defaults below are the shipped
//! values, and boards may override individual fields at composition time.

use crate::input::Level;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum time a raw level must hold before it is accepted
pub const DEBOUNCE_WINDOW_MS: u32 = 50;

/// Nominal delay between poll cycles
pub const POLL_INTERVAL_MS: u32 = 10;

/// Number of advance presses that complete a workflow
pub const PROGRESS_TARGET: u8 = 5;

/// Upper bound accepted for `progress_target`
pub const MAX_PROGRESS_TARGET: u8 = 32;

/// Electrical level that means "actuated"
///
/// Buttons idle pulled up and short to ground when pressed.
pub const PRESSED_LEVEL: Level = Level::Low;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce window of zero would accept every bounce
    ZeroDebounceWindow,
    /// Poll interval is zero or longer than the debounce window
    PollInterval,
    /// Progress target outside 1..=MAX_PROGRESS_TARGET
    ProgressTarget,
}

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Debounce window in milliseconds
    pub debounce_ms: u32,
    /// Delay between poll cycles in milliseconds
    pub poll_interval_ms: u32,
    /// Presses needed to complete the workflow
    pub progress_target: u8,
    /// Level reported by a pressed button
    pub pressed_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_WINDOW_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            progress_target: PROGRESS_TARGET,
            pressed_level: PRESSED_LEVEL,
        }
    }
}

impl Config {
    /// Check the configuration for values the controller cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounceWindow);
        }
        if self.poll_interval_ms == 0 || self.poll_interval_ms > self.debounce_ms {
            return Err(ConfigError::PollInterval);
        }
        if self.progress_target == 0 || self.progress_target > MAX_PROGRESS_TARGET {
            return Err(ConfigError::ProgressTarget);
        }
        Ok(())
    }

    /// Level reported by a released button
    pub fn released_level(&self) -> Level {
        !self.pressed_level
    }
}
