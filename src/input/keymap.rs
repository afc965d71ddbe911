//! Device key codes and the logical keys they translate to.

/// Linux input key codes (from `linux/input-event-codes.h`).
pub const KEY_UP: u16 = 103;
pub const KEY_LEFT: u16 = 105;
pub const KEY_RIGHT: u16 = 106;
pub const KEY_DOWN: u16 = 108;
pub const KEY_F24: u16 = 194;

/// Key understood by the host engine, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    Fire,
}

impl LogicalKey {
    /// Byte code the host engine expects.
    pub fn code(self) -> u8 {
        match self {
            LogicalKey::LeftArrow => 0xAC,
            LogicalKey::UpArrow => 0xAD,
            LogicalKey::RightArrow => 0xAE,
            LogicalKey::DownArrow => 0xAF,
            LogicalKey::Fire => 0xA3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0xAC => Some(LogicalKey::LeftArrow),
            0xAD => Some(LogicalKey::UpArrow),
            0xAE => Some(LogicalKey::RightArrow),
            0xAF => Some(LogicalKey::DownArrow),
            0xA3 => Some(LogicalKey::Fire),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LogicalKey::LeftArrow => "left",
            LogicalKey::RightArrow => "right",
            LogicalKey::UpArrow => "up",
            LogicalKey::DownArrow => "down",
            LogicalKey::Fire => "fire",
        }
    }
}

/// Static table from device key code to logical key.
#[derive(Debug, Clone, Copy)]
pub struct KeyMap {
    entries: &'static [(u16, LogicalKey)],
}

const STANDARD_ENTRIES: &[(u16, LogicalKey)] = &[
    (KEY_LEFT, LogicalKey::LeftArrow),
    (KEY_RIGHT, LogicalKey::RightArrow),
    (KEY_UP, LogicalKey::UpArrow),
    (KEY_DOWN, LogicalKey::DownArrow),
    // The page-turn button reports F24; it doubles as the trigger.
    (KEY_F24, LogicalKey::Fire),
];

impl KeyMap {
    /// The directional pad plus the fire trigger.
    pub const fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES,
        }
    }

    pub fn lookup(&self, code: u16) -> Option<LogicalKey> {
        self.entries
            .iter()
            .find(|(device, _)| *device == code)
            .map(|(_, logical)| *logical)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::standard()
    }
}
