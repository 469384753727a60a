//! Board-agnostic core logic for the Ratchet controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Debounced input channels (raw pin level -> press edges)
//! - Workflow state machine (Idle / Active with bounded progress)
//! - Presentation traits and the composite presenter
//! - The poll-cycle controller tying the pieces together
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod presenter;
pub mod traits;
pub mod workflow;

pub use config::{Config, ConfigError};
pub use controller::{Controller, Cycle};
pub use input::{InputChannel, Level, PressEdge};
pub use workflow::{Notice, Outcome, Phase, Press, Progress, Workflow};
