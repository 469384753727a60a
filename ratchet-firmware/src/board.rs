//! Board wiring and tuning
//!
//! Raspberry Pi Pico with:
//! - Reset button: GPIO2 to GND, internal pull-up
//! - Advance button: GPIO3 to GND, internal pull-up
//! - Diagnostic UART0: TX on GPIO0, 115200 baud
//! - ILI9341 TFT on SPI0: SCK GPIO18, MOSI GPIO19, CS GPIO17, DC GPIO20, RST GPIO21
//! - Latch servo signal on GPIO4 (PWM slice 2, channel A)

use ratchet_core::Config;
use ratchet_drivers::latch::ServoConfig;

/// Diagnostic serial baud rate
pub const LOG_BAUDRATE: u32 = 115_200;

/// TFT panel size in landscape orientation
pub const PANEL_WIDTH: u16 = 320;
pub const PANEL_HEIGHT: u16 = 240;

/// TFT SPI clock
pub const PANEL_SPI_HZ: u32 = 32_000_000;

/// PWM divider giving 1 MHz counter ticks from the 125 MHz system clock
pub const SERVO_PWM_DIVIDER: u8 = 125;

/// PWM top for a 20 ms period at 1 MHz
pub const SERVO_PWM_TOP: u16 = 19_999;

/// Servo pulse widths for this latch
pub const SERVO: ServoConfig = ServoConfig {
    period_us: 20_000,
    open_pulse_us: 1_000,
    closed_pulse_us: 2_000,
    min_pulse_us: 500,
    max_pulse_us: 2_500,
};

/// Controller settings for this board
pub fn controller_config() -> Config {
    Config::default()
}
