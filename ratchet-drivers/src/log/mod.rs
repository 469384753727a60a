//! Diagnostic log sinks

pub mod line;

pub use line::{LineSink, SinkError};
