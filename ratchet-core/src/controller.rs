//! Poll-cycle controller
//!
//! Owns the two input channels, the workflow and the presenter. The
//! firmware calls [`Controller::poll`] once per cycle with fresh samples;
//! nothing here sleeps or reads a clock.

use embedded_hal::digital::InputPin;

use crate::config::Config;
use crate::input::{InputChannel, Level, PressEdge};
use crate::traits::Presenter;
use crate::workflow::{Outcome, Phase, Progress, Workflow};

/// What happened during one poll cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cycle {
    /// Outcome of a reset press accepted this cycle
    pub reset: Option<Outcome>,
    /// Outcome of an advance press accepted this cycle
    pub advance: Option<Outcome>,
}

impl Cycle {
    /// Check if no press was accepted
    pub fn is_quiet(&self) -> bool {
        self.reset.is_none() && self.advance.is_none()
    }
}

/// Controller state for the poll loop
pub struct Controller<P> {
    reset: InputChannel,
    advance: InputChannel,
    workflow: Workflow,
    presenter: P,
}

impl<P: Presenter> Controller<P> {
    /// Create a controller in the Idle phase
    pub fn new(config: &Config, presenter: P) -> Self {
        Self {
            reset: InputChannel::from_config(config),
            advance: InputChannel::from_config(config),
            workflow: Workflow::from_config(config),
            presenter,
        }
    }

    /// Draw the initial idle view
    pub fn boot(&mut self) {
        self.presenter.render_idle();
    }

    /// Run one cycle with raw levels sampled at `now_ms`
    ///
    /// The advance level is only fed to its channel while Active.
    pub fn poll(&mut self, reset: Level, advance: Level, now_ms: u32) -> Cycle {
        let edge = self.reset.sample(reset, now_ms);
        let reset = self.on_reset(edge);
        let advance = if self.advance_armed() {
            let edge = self.advance.sample(advance, now_ms);
            self.on_advance(edge)
        } else {
            None
        };
        Cycle { reset, advance }
    }

    /// Run one cycle reading the button pins directly
    ///
    /// The advance pin is not read at all while Idle.
    pub fn poll_pins<R: InputPin, A: InputPin>(
        &mut self,
        reset: &mut R,
        advance: &mut A,
        now_ms: u32,
    ) -> Cycle {
        let edge = self.reset.sample_pin(reset, now_ms);
        let reset = self.on_reset(edge);
        let advance = if self.advance_armed() {
            let edge = self.advance.sample_pin(advance, now_ms);
            self.on_advance(edge)
        } else {
            None
        };
        Cycle { reset, advance }
    }

    fn on_reset(&mut self, edge: Option<PressEdge>) -> Option<Outcome> {
        edge.map(|_| self.workflow.on_reset_press(&mut self.presenter))
    }

    fn on_advance(&mut self, edge: Option<PressEdge>) -> Option<Outcome> {
        edge.map(|_| self.workflow.on_advance_press(&mut self.presenter))
    }

    /// Advance is checked after reset, against the phase reset left behind
    fn advance_armed(&self) -> bool {
        self.workflow.phase() == Phase::Active
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.workflow.phase()
    }

    /// Current progress
    pub fn progress(&self) -> Progress {
        self.workflow.progress()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Notice;

    const STEP_MS: u32 = 10;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Idle,
        Active(u8),
        Log(Notice),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Presenter for Recorder {
        fn render_idle(&mut self) {
            self.calls.push(Call::Idle);
        }

        fn render_active(&mut self, progress: Progress) {
            self.calls.push(Call::Active(progress.value));
        }

        fn log_event(&mut self, notice: Notice) {
            self.calls.push(Call::Log(notice));
        }
    }

    /// Drives a controller with simulated buttons on a 10 ms tick
    struct Bench {
        ctl: Controller<Recorder>,
        now: u32,
    }

    impl Bench {
        fn new() -> Self {
            Self {
                ctl: Controller::new(&Config::default(), Recorder::default()),
                now: 0,
            }
        }

        /// Hold the given levels for `ms`, collecting non-quiet cycles
        fn hold(&mut self, reset: Level, advance: Level, ms: u32) -> Vec<Cycle> {
            let mut cycles = Vec::new();
            let end = self.now + ms;
            while self.now < end {
                let cycle = self.ctl.poll(reset, advance, self.now);
                if !cycle.is_quiet() {
                    cycles.push(cycle);
                }
                self.now += STEP_MS;
            }
            cycles
        }

        fn press_reset(&mut self) -> Vec<Cycle> {
            let mut cycles = self.hold(Level::Low, Level::High, 100);
            cycles.extend(self.hold(Level::High, Level::High, 100));
            cycles
        }

        fn press_advance(&mut self) -> Vec<Cycle> {
            let mut cycles = self.hold(Level::High, Level::Low, 100);
            cycles.extend(self.hold(Level::High, Level::High, 100));
            cycles
        }

        fn renders(&self) -> Vec<Call> {
            self.ctl
                .presenter()
                .calls
                .iter()
                .copied()
                .filter(|c| !matches!(c, Call::Log(_)))
                .collect()
        }
    }

    #[test]
    fn test_boot_renders_idle() {
        let mut bench = Bench::new();
        bench.ctl.boot();
        assert_eq!(bench.ctl.presenter().calls, [Call::Idle]);
        assert_eq!(bench.ctl.phase(), Phase::Idle);
    }

    #[test]
    fn test_released_buttons_are_quiet() {
        let mut bench = Bench::new();
        assert!(bench.hold(Level::High, Level::High, 1000).is_empty());
        assert!(bench.ctl.presenter().calls.is_empty());
    }

    #[test]
    fn test_full_scenario() {
        let mut bench = Bench::new();

        let cycles = bench.press_reset();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].reset, Some(Outcome::Started));
        assert_eq!(bench.ctl.phase(), Phase::Active);

        for n in 1..=4 {
            let cycles = bench.press_advance();
            assert_eq!(cycles.len(), 1);
            assert_eq!(cycles[0].advance, Some(Outcome::Advanced(n)));
        }
        assert_eq!(bench.ctl.phase(), Phase::Active);

        let cycles = bench.press_advance();
        assert_eq!(cycles[0].advance, Some(Outcome::Completed));
        assert_eq!(bench.ctl.phase(), Phase::Idle);
        assert_eq!(bench.ctl.progress().value, 0);

        assert_eq!(
            bench.renders(),
            [
                Call::Active(0),
                Call::Active(1),
                Call::Active(2),
                Call::Active(3),
                Call::Active(4),
                Call::Active(5),
                Call::Idle,
            ]
        );
        assert_eq!(bench.ctl.presenter().calls.last(), Some(&Call::Log(Notice::Completed)));
    }

    #[test]
    fn test_bouncy_press_counts_once() {
        let mut bench = Bench::new();
        bench.press_reset();

        // Contact chatter on every other sample for 40 ms, then a solid press
        let mut cycles = Vec::new();
        for i in 0..4 {
            let level = if i % 2 == 0 { Level::Low } else { Level::High };
            cycles.extend(bench.hold(Level::High, level, STEP_MS));
        }
        cycles.extend(bench.press_advance());

        assert_eq!(cycles.len(), 1);
        assert_eq!(bench.ctl.progress().value, 1);
    }

    #[test]
    fn test_advance_while_idle_is_dropped() {
        let mut bench = Bench::new();
        let cycles = bench.press_advance();

        assert!(cycles.is_empty());
        assert_eq!(bench.ctl.phase(), Phase::Idle);
        assert!(bench.ctl.presenter().calls.is_empty());
    }

    #[test]
    fn test_advance_held_across_reset_counts_once() {
        let mut bench = Bench::new();

        bench.hold(Level::High, Level::Low, 200);
        let cycles = bench.hold(Level::Low, Level::Low, 200);
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].reset, Some(Outcome::Started));
        assert_eq!(cycles[0].advance, None);
        // Debounce starts over once Active
        assert_eq!(cycles[1].advance, Some(Outcome::Advanced(1)));

        assert!(bench.hold(Level::High, Level::Low, 200).is_empty());
        assert_eq!(bench.ctl.phase(), Phase::Active);
        assert_eq!(bench.ctl.progress().value, 1);
    }

    #[test]
    fn test_reset_dispatched_before_advance() {
        let mut bench = Bench::new();
        bench.press_reset();
        bench.press_advance();

        // Both buttons settle in the same cycle: the abort disarms advance
        let cycles = bench.hold(Level::Low, Level::Low, 100);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].reset, Some(Outcome::Aborted));
        assert_eq!(cycles[0].advance, None);
        assert_eq!(bench.ctl.phase(), Phase::Idle);
        assert_eq!(bench.ctl.progress().value, 0);
    }

    #[derive(Debug)]
    struct Floating;

    impl embedded_hal::digital::Error for Floating {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    /// Button pin counting its reads
    struct Button {
        high: bool,
        broken: bool,
        reads: u32,
    }

    impl Button {
        fn released() -> Self {
            Self {
                high: true,
                broken: false,
                reads: 0,
            }
        }
    }

    impl embedded_hal::digital::ErrorType for Button {
        type Error = Floating;
    }

    impl InputPin for Button {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.reads += 1;
            if self.broken {
                Err(Floating)
            } else {
                Ok(self.high)
            }
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn test_poll_pins() {
        let mut ctl = Controller::new(&Config::default(), Recorder::default());
        let mut reset = Button::released();
        let mut advance = Button::released();
        let mut now = 0;
        let mut run = |ctl: &mut Controller<Recorder>, reset: &mut Button, advance: &mut Button, ms: u32| {
            let mut cycles = Vec::new();
            let end = now + ms;
            while now < end {
                let cycle = ctl.poll_pins(reset, advance, now);
                if !cycle.is_quiet() {
                    cycles.push(cycle);
                }
                now += STEP_MS;
            }
            cycles
        };

        // Idle: advance pin untouched
        advance.high = false;
        assert!(run(&mut ctl, &mut reset, &mut advance, 200).is_empty());
        assert_eq!(advance.reads, 0);
        advance.high = true;

        reset.high = false;
        let cycles = run(&mut ctl, &mut reset, &mut advance, 100);
        assert_eq!(cycles[0].reset, Some(Outcome::Started));
        reset.high = true;
        run(&mut ctl, &mut reset, &mut advance, 100);
        assert!(advance.reads > 0);

        // Failing reads while held never count
        advance.high = false;
        advance.broken = true;
        assert!(run(&mut ctl, &mut reset, &mut advance, 300).is_empty());
        assert_eq!(ctl.progress().value, 0);

        advance.broken = false;
        let cycles = run(&mut ctl, &mut reset, &mut advance, 100);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].advance, Some(Outcome::Advanced(1)));
        assert_eq!(ctl.phase(), Phase::Active);
    }

    #[test]
    fn test_abort_mid_run() {
        let mut bench = Bench::new();
        bench.press_reset();
        for _ in 0..3 {
            bench.press_advance();
        }
        assert_eq!(bench.ctl.progress().value, 3);

        let cycles = bench.press_reset();
        assert_eq!(cycles[0].reset, Some(Outcome::Aborted));
        assert_eq!(bench.ctl.phase(), Phase::Idle);
        assert_eq!(bench.ctl.progress().value, 0);
        assert_eq!(bench.renders().last(), Some(&Call::Idle));
    }
}
