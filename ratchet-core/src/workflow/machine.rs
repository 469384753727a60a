//! State machine definition
//!
//! All rendering and logging is a function of the current phase and a
//! press. Progress is cleared on every phase change and never rests at its
//! target: the press that reaches it completes the workflow in the same
//! update.

use super::events::{Notice, Press};
use crate::config::Config;
use crate::traits::Presenter;

/// Workflow phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for a reset press to start
    Idle,
    /// Counting advance presses
    Active,
}

/// Progress counter paired with its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress {
    /// Completed increments
    pub value: u8,
    /// Increments needed to complete
    pub target: u8,
}

impl Progress {
    pub const fn new(value: u8, target: u8) -> Self {
        Self { value, target }
    }

    /// Check if the counter has reached its target
    pub fn is_complete(&self) -> bool {
        self.value >= self.target
    }

    /// Scale `full` by `value / target`, clamped to `full`
    ///
    /// Used to size progress indicators.
    pub fn scale(&self, full: u16) -> u16 {
        let target = self.target.max(1) as u32;
        let value = self.value.min(self.target) as u32;
        (full as u32 * value / target) as u16
    }
}

/// Result of handling one press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Idle -> Active
    Started,
    /// Active -> Idle by reset, progress discarded
    Aborted,
    /// Progress counted, still Active
    Advanced(u8),
    /// Progress reached the target, Active -> Idle
    Completed,
    /// Press has no effect in the current phase
    Ignored,
}

impl Outcome {
    /// Check if the press changed phase
    pub fn changed_phase(&self) -> bool {
        matches!(self, Outcome::Started | Outcome::Aborted | Outcome::Completed)
    }
}

/// Workflow state, owned by the poll loop
#[derive(Debug, Clone)]
pub struct Workflow {
    phase: Phase,
    count: u8,
    target: u8,
}

impl Workflow {
    /// Create an idle workflow
    ///
    /// A target of zero is raised to one.
    pub fn new(target: u8) -> Self {
        Self {
            phase: Phase::Idle,
            count: 0,
            target: target.max(1),
        }
    }

    /// Create a workflow from the controller configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.progress_target)
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current progress
    pub fn progress(&self) -> Progress {
        Progress::new(self.count, self.target)
    }

    /// Process a press, notify the presenter, and report what happened
    pub fn handle<P: Presenter>(&mut self, press: Press, out: &mut P) -> Outcome {
        match (self.phase, press) {
            (Phase::Idle, Press::Reset) => {
                self.enter(Phase::Active);
                out.render_active(self.progress());
                out.log_event(Notice::EnteredActive);
                Outcome::Started
            }
            (Phase::Active, Press::Reset) => {
                self.enter(Phase::Idle);
                out.render_idle();
                out.log_event(Notice::ReturnedIdle);
                Outcome::Aborted
            }
            (Phase::Idle, Press::Advance) => Outcome::Ignored,
            (Phase::Active, Press::Advance) => {
                self.count = self.count.saturating_add(1);
                let progress = self.progress();
                out.render_active(progress);
                out.log_event(Notice::Progress(progress.value));

                if !progress.is_complete() {
                    return Outcome::Advanced(progress.value);
                }

                // The full bar is never the last frame
                self.enter(Phase::Idle);
                out.render_idle();
                out.log_event(Notice::Completed);
                Outcome::Completed
            }
        }
    }

    /// Handle a press of the reset button
    pub fn on_reset_press<P: Presenter>(&mut self, out: &mut P) -> Outcome {
        self.handle(Press::Reset, out)
    }

    /// Handle a press of the advance button
    pub fn on_advance_press<P: Presenter>(&mut self, out: &mut P) -> Outcome {
        self.handle(Press::Advance, out)
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.count = 0;
    }
}
