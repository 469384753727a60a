//! Ratchet - Two-Button Progress Controller Firmware
//!
//! Main firmware binary for RP2040 boards. A reset button toggles
//! between Idle and Active, an advance button counts work steps while
//! Active. State is shown on an optional TFT panel and servo latch and
//! every transition is logged over UART.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Blocking, Config as UartConfig, UartTx};
use {defmt_rtt as _, panic_probe as _};

use ratchet_core::presenter::Composite;
use ratchet_core::{Config, Controller};
use ratchet_drivers::log::LineSink;

mod board;
#[cfg(feature = "panel")]
mod panel;
mod tasks;

#[cfg(feature = "panel")]
type BoardSurface = ratchet_display::ProgressView<panel::Ili9341>;
#[cfg(not(feature = "panel"))]
type BoardSurface = ();

#[cfg(feature = "latch")]
type BoardLatch = ratchet_drivers::latch::ServoLatch<embassy_rp::pwm::PwmOutput<'static>>;
#[cfg(not(feature = "latch"))]
type BoardLatch = ();

/// Diagnostic line log on UART0
type SerialLog = LineSink<UartTx<'static, UART0, Blocking>>;

/// Presenter wired for this board's feature set
pub type BoardPresenter = Composite<BoardSurface, BoardLatch, SerialLog>;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ratchet firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = board::controller_config();
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            error!("Invalid controller config ({}), using defaults", e);
            Config::default()
        }
    };
    info!(
        "Config: debounce={}ms poll={}ms target={}",
        config.debounce_ms, config.poll_interval_ms, config.progress_target
    );

    // Buttons close to ground
    let reset = Input::new(p.PIN_2, Pull::Up);
    let advance = Input::new(p.PIN_3, Pull::Up);

    // Diagnostic UART (TX only)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::LOG_BAUDRATE;
    let uart = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);
    let log = LineSink::new(uart);
    info!("UART log initialized");

    #[cfg(feature = "panel")]
    let surface = {
        use embassy_rp::gpio::{Level, Output};
        use embassy_rp::spi::{Config as SpiConfig, Spi};

        let mut spi_config = SpiConfig::default();
        spi_config.frequency = board::PANEL_SPI_HZ;
        let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
        let cs = Output::new(p.PIN_17, Level::High);
        let dc = Output::new(p.PIN_20, Level::Low);
        let mut rst = Output::new(p.PIN_21, Level::High);

        let mut tft = panel::Ili9341::new(spi, dc, cs, board::PANEL_WIDTH, board::PANEL_HEIGHT);
        match tft.init(&mut rst).await {
            Ok(()) => info!("Panel initialized"),
            // Keep going; draw failures are counted by the presenter
            Err(e) => error!("Panel init failed: {}", e),
        }
        ratchet_display::ProgressView::new(tft)
    };
    #[cfg(not(feature = "panel"))]
    let surface = ();

    #[cfg(feature = "latch")]
    let latch = {
        use embassy_rp::pwm::{Config as PwmConfig, Pwm};
        use ratchet_drivers::latch::ServoLatch;

        let mut pwm_config = PwmConfig::default();
        pwm_config.divider = board::SERVO_PWM_DIVIDER.into();
        pwm_config.top = board::SERVO_PWM_TOP;
        let (servo, _) = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, pwm_config).split();
        let servo = unwrap!(servo);
        let latch = unwrap!(ServoLatch::new(servo, board::SERVO));
        info!("Servo latch initialized");
        latch
    };
    #[cfg(not(feature = "latch"))]
    let latch = ();

    let presenter: BoardPresenter = Composite::new(surface, latch, log);
    let controller = Controller::new(&config, presenter);

    spawner
        .spawn(tasks::poll_task(reset, advance, controller, config.poll_interval_ms))
        .unwrap();

    info!("All tasks spawned");
}
