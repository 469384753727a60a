//! Servo latch driver
//!
//! Drives a hobby servo between two positions with a standard 50 Hz
//! pulse train. The pulse width is converted into a duty cycle for any
//! `embedded-hal` PWM channel.
//!
//! # Usage
//!
//! ```ignore
//! let latch = ServoLatch::new(pwm_channel, ServoConfig::default())?;
//! latch.set_position(LatchPosition::Closed)?;
//! ```

use embedded_hal::pwm::SetDutyCycle;
use ratchet_core::traits::{Latch, LatchPosition};

/// Servo latch errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchError {
    /// Configured pulse lies outside the servo's safe band or period
    InvalidPulse,
    /// PWM channel rejected the duty cycle
    Pwm,
}

/// Servo timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    /// PWM period in microseconds
    pub period_us: u32,
    /// Pulse width for the open position
    pub open_pulse_us: u16,
    /// Pulse width for the closed position
    pub closed_pulse_us: u16,
    /// Shortest pulse the servo accepts
    pub min_pulse_us: u16,
    /// Longest pulse the servo accepts
    pub max_pulse_us: u16,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            period_us: 20_000,
            open_pulse_us: 1_000,
            closed_pulse_us: 2_000,
            min_pulse_us: 500,
            max_pulse_us: 2_500,
        }
    }
}

impl ServoConfig {
    /// Pulse width for a position
    pub fn pulse_us(&self, position: LatchPosition) -> u16 {
        match position {
            LatchPosition::Open => self.open_pulse_us,
            LatchPosition::Closed => self.closed_pulse_us,
        }
    }

    fn validate(&self) -> Result<(), LatchError> {
        let band = self.min_pulse_us..=self.max_pulse_us;
        if !band.contains(&self.open_pulse_us) || !band.contains(&self.closed_pulse_us) {
            return Err(LatchError::InvalidPulse);
        }
        if self.max_pulse_us as u32 >= self.period_us {
            return Err(LatchError::InvalidPulse);
        }
        Ok(())
    }
}

/// Two-position latch on a servo
pub struct ServoLatch<P> {
    pwm: P,
    config: ServoConfig,
    /// Last position driven, `None` before the first move
    position: Option<LatchPosition>,
}

impl<P: SetDutyCycle> ServoLatch<P> {
    /// Create a servo latch
    ///
    /// The servo is not driven until the first `set_position`.
    pub fn new(pwm: P, config: ServoConfig) -> Result<Self, LatchError> {
        config.validate()?;
        Ok(Self {
            pwm,
            config,
            position: None,
        })
    }

    /// Last position driven
    pub fn position(&self) -> Option<LatchPosition> {
        self.position
    }

    /// Duty cycle that produces `pulse_us` on this channel
    pub fn duty_for(&self, pulse_us: u16) -> u16 {
        let max = self.pwm.max_duty_cycle() as u32;
        let duty = pulse_us as u32 * max / self.config.period_us;
        duty.min(max) as u16
    }
}

impl<P: SetDutyCycle> Latch for ServoLatch<P> {
    type Error = LatchError;

    fn set_position(&mut self, position: LatchPosition) -> Result<(), Self::Error> {
        if self.position == Some(position) {
            return Ok(());
        }

        let duty = self.duty_for(self.config.pulse_us(position));
        self.pwm.set_duty_cycle(duty).map_err(|_| LatchError::Pwm)?;
        self.position = Some(position);
        Ok(())
    }
}
