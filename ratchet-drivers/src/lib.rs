//! Collaborator driver implementations
//!
//! This crate provides concrete implementations of the presentation
//! capabilities defined in ratchet-core:
//!
//! - Latch actuators (hobby servo on a PWM channel)
//! - Event sinks (line-oriented serial log)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod latch;
pub mod log;
