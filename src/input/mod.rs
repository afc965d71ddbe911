//! Raw key input and its translation into logical key events.
//!
//! # Structure
//!
//! - [`keymap`] - Device key codes and the logical keys they map to
//! - [`mapper`] - Raw record type, source trait and the draining mapper
//! - [`evdev`] - Linux evdev device source (Linux only)
//! - [`error`] - Device setup errors

mod error;
#[cfg(target_os = "linux")]
mod evdev;
mod keymap;
mod mapper;

pub use error::InputError;
#[cfg(target_os = "linux")]
pub use evdev::EvdevInput;
pub use keymap::{KeyMap, LogicalKey, KEY_DOWN, KEY_F24, KEY_LEFT, KEY_RIGHT, KEY_UP};
pub use mapper::{InputMapper, RawInputSource, RawKeyEvent, KEY_VALUE_PRESS};
