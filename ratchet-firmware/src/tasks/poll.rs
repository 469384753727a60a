//! Button poll task
//!
//! Samples both buttons on a fixed ticker and feeds them to the
//! controller. All rendering and logging happens inside the controller's
//! presenter, so this loop never blocks on anything but the ticker.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};

use ratchet_core::Controller;

use crate::BoardPresenter;

/// Cycles between heartbeat traces
const HEARTBEAT_CYCLES: u32 = 1000;

/// Poll task - runs the controller forever
#[embassy_executor::task]
pub async fn poll_task(
    mut reset: Input<'static>,
    mut advance: Input<'static>,
    mut controller: Controller<BoardPresenter>,
    interval_ms: u32,
) {
    info!("Poll task started ({}ms)", interval_ms);

    controller.boot();

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));
    let start = Instant::now();
    let mut faults = 0;
    let mut cycles: u32 = 0;

    loop {
        ticker.next().await;

        // Wraps after ~49 days; the debouncer uses wrapping arithmetic
        let now_ms = start.elapsed().as_millis() as u32;

        let cycle = controller.poll_pins(&mut reset, &mut advance, now_ms);
        if let Some(outcome) = cycle.reset {
            debug!("Reset press: {}", outcome);
        }
        if let Some(outcome) = cycle.advance {
            debug!("Advance press: {}", outcome);
        }
        if !cycle.is_quiet() {
            info!("Phase {} progress {}", controller.phase(), controller.progress());
        }

        cycles = cycles.wrapping_add(1);
        if cycles % HEARTBEAT_CYCLES == 0 {
            trace!("Heartbeat at {}ms, phase {}", now_ms, controller.phase());
        }

        let now_faults = controller.presenter().fault_count();
        if now_faults != faults {
            warn!("Presentation faults: {}", now_faults);
            faults = now_faults;
        }
    }
}
