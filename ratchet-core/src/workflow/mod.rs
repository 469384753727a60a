//! Workflow state machine
//!
//! Two phases, Idle and Active, with a bounded progress counter that
//! completes the workflow when it reaches its target. The machine is
//! explicit and deterministic; every transition reports to a presenter.

pub mod events;
pub mod machine;

pub use events::{Notice, Press};
pub use machine::{Outcome, Phase, Progress, Workflow};
