//! Display abstraction and workflow views for Ratchet
//!
//! This crate provides:
//! - `DisplayBackend` trait for pixel displays (TFT, OLED)
//! - `Layout` with the geometry of the two workflow views
//! - `ProgressView`, which draws the views and acts as the core `Surface`
//!
//! # Architecture
//!
//! The firmware implements `DisplayBackend` for its panel and hands a
//! `ProgressView` to the presenter. Layout math stays here so it can be
//! tested on the host.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod layout;
pub mod view;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, Rect, TextSize, Tone};
pub use layout::Layout;
pub use view::{ProgressView, ACTIVE_TITLE, IDLE_LABEL};
