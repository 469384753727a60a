//! Presentation contract and its capabilities
//!
//! The workflow only ever talks to a [`Presenter`]. Boards build one out
//! of capabilities: a [`Surface`] to draw on, a [`Latch`] to move, and an
//! [`EventSink`] for the diagnostic log. `()` stands in for a capability
//! the board does not have.

use core::convert::Infallible;

use crate::workflow::{Notice, Progress};

/// Receiver of workflow notifications
///
/// Calls are fire-and-forget: implementations must absorb their own
/// failures.
pub trait Presenter {
    /// Show the idle view and open the latch
    fn render_idle(&mut self);

    /// Show the active view with the given progress and close the latch
    fn render_active(&mut self, progress: Progress);

    /// Append a line to the diagnostic log
    fn log_event(&mut self, notice: Notice);
}

/// Something that can draw the two workflow views
pub trait Surface {
    type Error;

    /// Draw the idle view
    fn show_idle(&mut self) -> Result<(), Self::Error>;

    /// Draw the active view
    fn show_active(&mut self, progress: Progress) -> Result<(), Self::Error>;
}

/// Physical latch position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchPosition {
    /// Released, mirrors Idle
    Open,
    /// Engaged, mirrors Active
    Closed,
}

/// Two-position actuator
pub trait Latch {
    type Error;

    /// Move the actuator
    fn set_position(&mut self, position: LatchPosition) -> Result<(), Self::Error>;
}

/// Line-oriented diagnostic output
pub trait EventSink {
    type Error;

    /// Write one notice as a line
    fn record(&mut self, notice: Notice) -> Result<(), Self::Error>;
}

impl Surface for () {
    type Error = Infallible;

    fn show_idle(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn show_active(&mut self, _progress: Progress) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Latch for () {
    type Error = Infallible;

    fn set_position(&mut self, _position: LatchPosition) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl EventSink for () {
    type Error = Infallible;

    fn record(&mut self, _notice: Notice) -> Result<(), Self::Error> {
        Ok(())
    }
}
