//! Bounded, lossy key event queue.
//!
//! The input poll pushes events once per frame and the host drains them
//! afterwards. Both phases run on the same thread, so the queue is a plain
//! ring buffer with no synchronization.

/// Number of events the queue holds before it starts dropping the oldest.
pub const KEY_QUEUE_CAPACITY: usize = 16;

// One spare slot so a full queue is distinguishable from an empty one.
const SLOTS: usize = KEY_QUEUE_CAPACITY + 1;

/// A logical key transition handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// True for a press, false for a release
    pub pressed: bool,
    /// Logical key code understood by the host
    pub key: u8,
}

impl KeyEvent {
    pub fn new(pressed: bool, key: u8) -> Self {
        Self { pressed, key }
    }

    /// Pack into the queue word: press state in the high byte, key in the low byte.
    pub fn pack(self) -> u16 {
        ((self.pressed as u16) << 8) | self.key as u16
    }

    /// Inverse of [`KeyEvent::pack`].
    pub fn unpack(word: u16) -> Self {
        Self {
            pressed: (word >> 8) != 0,
            key: (word & 0xFF) as u8,
        }
    }
}

/// Fixed-capacity circular buffer of key events.
///
/// `push` never fails. Once [`KEY_QUEUE_CAPACITY`] events are waiting, each
/// further push overwrites the oldest unread event. Callers observe a gap in
/// the sequence, never an error.
#[derive(Debug, Clone)]
pub struct EventQueue {
    slots: [u16; SLOTS],
    read: usize,
    write: usize,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            slots: [0; SLOTS],
            read: 0,
            write: 0,
        }
    }

    /// Append an event, dropping the oldest one if the queue is full.
    pub fn push(&mut self, event: KeyEvent) {
        self.slots[self.write] = event.pack();
        self.write = (self.write + 1) % SLOTS;
        if self.write == self.read {
            log::trace!("key queue full, dropping oldest event");
            self.read = (self.read + 1) % SLOTS;
        }
    }

    /// Take the oldest unread event, or `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<KeyEvent> {
        if self.is_empty() {
            return None;
        }
        let word = self.slots[self.read];
        self.read = (self.read + 1) % SLOTS;
        Some(KeyEvent::unpack(word))
    }

    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Number of events waiting to be read.
    pub fn len(&self) -> usize {
        (self.write + SLOTS - self.read) % SLOTS
    }

    pub fn capacity(&self) -> usize {
        KEY_QUEUE_CAPACITY
    }
}
