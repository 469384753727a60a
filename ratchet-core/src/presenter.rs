//! Composite presenter
//!
//! Builds a [`Presenter`] from the capabilities a board actually has.
//! Collaborator failures are counted and otherwise ignored so they never
//! reach the workflow.
//!
//! ```ignore
//! // Log only
//! let presenter = Composite::headless(serial);
//! // Panel and log
//! let presenter = Composite::display_only(panel, serial);
//! // Panel, servo latch and log
//! let presenter = Composite::new(panel, servo, serial);
//! ```

use crate::traits::{EventSink, Latch, LatchPosition, Presenter, Surface};
use crate::workflow::{Notice, Progress};

/// Presenter assembled from a surface, a latch and an event sink
pub struct Composite<S, L, E> {
    surface: S,
    latch: L,
    sink: E,
    /// Number of collaborator calls that returned an error
    faults: u32,
}

/// Log-only presenter
pub type Headless<E> = Composite<(), (), E>;

/// Display and log, no latch
pub type DisplayOnly<S, E> = Composite<S, (), E>;

impl<E> Composite<(), (), E> {
    /// Create a presenter that only logs
    pub fn headless(sink: E) -> Self {
        Self::new((), (), sink)
    }
}

impl<S, E> Composite<S, (), E> {
    /// Create a presenter with a display but no latch
    pub fn display_only(surface: S, sink: E) -> Self {
        Self::new(surface, (), sink)
    }
}

impl<S, L, E> Composite<S, L, E> {
    /// Create a presenter with every capability
    pub fn new(surface: S, latch: L, sink: E) -> Self {
        Self {
            surface,
            latch,
            sink,
            faults: 0,
        }
    }

    /// Number of failed collaborator calls since creation
    pub fn fault_count(&self) -> u32 {
        self.faults
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn latch(&self) -> &L {
        &self.latch
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    fn tally<T, X>(&mut self, result: Result<T, X>) {
        if result.is_err() {
            self.faults = self.faults.saturating_add(1);
        }
    }
}

impl<S: Surface, L: Latch, E: EventSink> Presenter for Composite<S, L, E> {
    fn render_idle(&mut self) {
        let drawn = self.surface.show_idle();
        self.tally(drawn);
        let moved = self.latch.set_position(LatchPosition::Open);
        self.tally(moved);
    }

    fn render_active(&mut self, progress: Progress) {
        let drawn = self.surface.show_active(progress);
        self.tally(drawn);
        let moved = self.latch.set_position(LatchPosition::Closed);
        self.tally(moved);
    }

    fn log_event(&mut self, notice: Notice) {
        let written = self.sink.record(notice);
        self.tally(written);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Workflow;

    #[derive(Default)]
    struct MockSurface {
        frames: Vec<Option<u8>>,
        fail: bool,
    }

    impl Surface for MockSurface {
        type Error = ();

        fn show_idle(&mut self) -> Result<(), ()> {
            self.frames.push(None);
            if self.fail {
                Err(())
            } else {
                Ok(())
            }
        }

        fn show_active(&mut self, progress: Progress) -> Result<(), ()> {
            self.frames.push(Some(progress.value));
            if self.fail {
                Err(())
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockLatch {
        moves: Vec<LatchPosition>,
    }

    impl Latch for MockLatch {
        type Error = ();

        fn set_position(&mut self, position: LatchPosition) -> Result<(), ()> {
            self.moves.push(position);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockSink {
        lines: Vec<Notice>,
    }

    impl EventSink for MockSink {
        type Error = ();

        fn record(&mut self, notice: Notice) -> Result<(), ()> {
            self.lines.push(notice);
            Ok(())
        }
    }

    #[test]
    fn test_latch_mirrors_phase() {
        let mut out = Composite::new(MockSurface::default(), MockLatch::default(), MockSink::default());
        let mut wf = Workflow::new(2);

        wf.on_reset_press(&mut out);
        wf.on_advance_press(&mut out);
        wf.on_advance_press(&mut out);

        assert_eq!(out.surface().frames, [Some(0), Some(1), Some(2), None]);
        assert_eq!(
            out.latch().moves,
            [
                LatchPosition::Closed,
                LatchPosition::Closed,
                LatchPosition::Closed,
                LatchPosition::Open,
            ]
        );
        assert_eq!(
            out.sink().lines,
            [
                Notice::EnteredActive,
                Notice::Progress(1),
                Notice::Progress(2),
                Notice::Completed,
            ]
        );
        assert_eq!(out.fault_count(), 0);
    }

    #[test]
    fn test_headless_logs_only() {
        let mut out = Composite::headless(MockSink::default());
        let mut wf = Workflow::new(5);

        wf.on_reset_press(&mut out);
        wf.on_reset_press(&mut out);

        assert_eq!(out.sink().lines, [Notice::EnteredActive, Notice::ReturnedIdle]);
    }

    #[test]
    fn test_surface_failure_does_not_stop_workflow() {
        let surface = MockSurface {
            fail: true,
            ..Default::default()
        };
        let mut out = Composite::display_only(surface, MockSink::default());
        let mut wf = Workflow::new(5);

        wf.on_reset_press(&mut out);
        wf.on_advance_press(&mut out);

        assert_eq!(wf.progress().value, 1);
        assert_eq!(out.fault_count(), 2);
        assert_eq!(out.sink().lines, [Notice::EnteredActive, Notice::Progress(1)]);
    }
}
