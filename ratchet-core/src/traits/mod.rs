//! Presentation traits
//!
//! These traits define the interface between the workflow and the
//! hardware that shows its state.

pub mod presentation;

pub use presentation::{EventSink, Latch, LatchPosition, Presenter, Surface};
