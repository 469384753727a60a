//! Debounced button inputs
//!
//! Each physical button gets its own [`InputChannel`], which turns noisy
//! raw samples into at most one [`PressEdge`] per actuation.

pub mod channel;

pub use channel::{InputChannel, PressEdge};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Electrical level of a digital input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Self::Output {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}
