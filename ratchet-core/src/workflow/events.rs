//! Inputs to and notices from the workflow

use core::fmt;

/// Button presses that drive the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Toggle between Idle and Active, discarding progress
    Reset,
    /// Count one unit of progress (Active only)
    Advance,
}

/// Trace notices emitted for the diagnostic log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// Workflow started
    EnteredActive,
    /// Workflow abandoned by a reset press
    ReturnedIdle,
    /// Progress counter after an advance press
    Progress(u8),
    /// Progress reached its target, back to Idle
    Completed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EnteredActive => f.write_str("-> ENTERED ACTIVE"),
            Notice::ReturnedIdle => f.write_str("-> RETURNED IDLE"),
            Notice::Progress(n) => write!(f, "Progress: {}", n),
            Notice::Completed => f.write_str("*** WORK COMPLETE ***"),
        }
    }
}
