//! Translation of raw device key records into queued logical key events.

use std::collections::VecDeque;

use super::keymap::KeyMap;
use crate::queue::{EventQueue, KeyEvent};

/// Key record value for a press. Release is 0 and autorepeat is 2.
pub const KEY_VALUE_PRESS: i32 = 1;

/// A key record read from the raw input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// Device key code
    pub code: u16,
    /// 0 = release, 1 = press, 2 = repeat
    pub value: i32,
}

impl RawKeyEvent {
    pub fn new(code: u16, value: i32) -> Self {
        Self { code, value }
    }

    /// Only an explicit press counts as pressed; repeats are treated as releases.
    pub fn is_press(&self) -> bool {
        self.value == KEY_VALUE_PRESS
    }
}

/// Non-blocking source of raw key records.
pub trait RawInputSource {
    /// Next pending key record, or `None` once nothing more is available right now.
    fn poll_key(&mut self) -> Option<RawKeyEvent>;
}

impl RawInputSource for VecDeque<RawKeyEvent> {
    fn poll_key(&mut self) -> Option<RawKeyEvent> {
        self.pop_front()
    }
}

/// Drains raw input into an [`EventQueue`] through a [`KeyMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InputMapper {
    keymap: KeyMap,
}

impl InputMapper {
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }

    /// Map one raw record. Unrecognized codes yield `None`.
    pub fn map(&self, raw: RawKeyEvent) -> Option<KeyEvent> {
        self.keymap
            .lookup(raw.code)
            .map(|logical| KeyEvent::new(raw.is_press(), logical.code()))
    }

    /// Read every record currently available and queue the recognized ones.
    ///
    /// Returns the number of events pushed.
    pub fn drain(&self, source: &mut dyn RawInputSource, queue: &mut EventQueue) -> usize {
        let mut pushed = 0;
        while let Some(raw) = source.poll_key() {
            let Some(event) = self.map(raw) else {
                continue;
            };
            log::debug!(
                "key {} {}",
                raw.code,
                if event.pressed { "pressed" } else { "released" }
            );
            queue.push(event);
            pushed += 1;
        }
        pushed
    }
}
