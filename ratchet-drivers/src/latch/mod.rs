//! Latch actuator drivers

pub mod servo;

pub use servo::{LatchError, ServoConfig, ServoLatch};
