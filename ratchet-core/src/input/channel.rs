//! Debounced input channel
//!
//! Converts raw samples of a bouncing contact into a clean press edge.
//! A raw level is accepted once it has been observed unchanged for longer
//! than the debounce window; only the transition into the pressed level
//! produces an edge.

use embedded_hal::digital::InputPin;

use super::Level;
use crate::config::Config;

/// One-shot event for a released -> pressed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEdge {
    /// Timestamp of the sample that accepted the press (ms)
    pub at_ms: u32,
}

/// Debounce state for a single button
#[derive(Debug, Clone)]
pub struct InputChannel {
    /// Last raw reading, `None` while the pin reads unresolved
    last_raw: Option<Level>,
    /// Accepted (debounced) level
    stable: Level,
    /// Time of the last observed raw change (ms)
    last_change_ms: u32,
    /// Debounce window (ms)
    window_ms: u32,
    /// Level that means "pressed"
    pressed: Level,
}

impl InputChannel {
    /// Create a channel that starts released
    pub fn new(window_ms: u32, pressed: Level) -> Self {
        let released = !pressed;
        Self {
            last_raw: Some(released),
            stable: released,
            last_change_ms: 0,
            window_ms,
            pressed,
        }
    }

    /// Create a channel from the controller configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.debounce_ms, config.pressed_level)
    }

    /// Debounced level
    pub fn stable_level(&self) -> Level {
        self.stable
    }

    /// Whether the debounced level is the pressed level
    pub fn is_pressed(&self) -> bool {
        self.stable == self.pressed
    }

    /// Feed one raw sample
    ///
    /// Returns a [`PressEdge`] when this sample accepts the pressed level.
    pub fn sample(&mut self, level: Level, now_ms: u32) -> Option<PressEdge> {
        self.observe(Some(level), now_ms)
    }

    /// Feed a sample whose level could not be determined
    ///
    /// Counts as a raw change, so the debounce clock restarts once the
    /// level resolves again.
    pub fn sample_unresolved(&mut self, now_ms: u32) {
        let _ = self.observe(None, now_ms);
    }

    /// Read a pin and feed the result
    ///
    /// A failed read is treated as unresolved.
    pub fn sample_pin<P: InputPin>(&mut self, pin: &mut P, now_ms: u32) -> Option<PressEdge> {
        let reading = pin.is_high().ok().map(Level::from);
        self.observe(reading, now_ms)
    }

    fn observe(&mut self, reading: Option<Level>, now_ms: u32) -> Option<PressEdge> {
        if reading != self.last_raw {
            self.last_change_ms = now_ms;
        }
        self.last_raw = reading;

        let level = reading?;
        // Wrapping difference keeps working across the u32 millisecond rollover
        let held_ms = now_ms.wrapping_sub(self.last_change_ms);
        if held_ms <= self.window_ms || level == self.stable {
            return None;
        }

        self.stable = level;
        (level == self.pressed).then_some(PressEdge { at_ms: now_ms })
    }
}
