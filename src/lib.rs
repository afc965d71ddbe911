//! ink-frame library crate.
//!
//! Adapts an RGB frame source to a monochrome e-ink framebuffer and queues
//! the device's key input for the frame source to consume.

pub mod cli;
pub mod compose;
pub mod config;
pub mod display;
pub mod host;
pub mod input;
pub mod queue;
pub mod raster;
pub mod session;
