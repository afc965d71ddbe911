//! Linux evdev key source.
//!
//! Opens `/dev/input/eventN` non-blocking, optionally takes an exclusive grab
//! so the rest of the system does not also react to the buttons, and yields
//! `EV_KEY` records until the kernel has nothing more buffered.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

use super::error::InputError;
use super::mapper::{RawInputSource, RawKeyEvent};

/// `EV_KEY` event type.
const EV_KEY: u16 = 0x01;

/// `_IOW('E', 0x90, int)`
const EVIOCGRAB: u32 = 0x4004_4590;

const RECORD_SIZE: usize = std::mem::size_of::<libc::input_event>();

/// Raw key input read from an evdev character device.
pub struct EvdevInput {
    file: File,
    path: PathBuf,
    grabbed: bool,
}

impl EvdevInput {
    /// Open the device without blocking reads.
    ///
    /// A failed grab is logged and the device is used ungrabbed.
    pub fn open(path: &Path, grab: bool) -> Result<Self, InputError> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|source| InputError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let mut input = Self {
            file,
            path: path.to_path_buf(),
            grabbed: false,
        };

        if grab {
            if let Err(e) = input.grab() {
                log::warn!("{}", e);
            }
        }

        log::info!(
            "Input device {} opened{}",
            input.path.display(),
            if input.grabbed { " (grabbed)" } else { "" }
        );
        Ok(input)
    }

    /// Take exclusive access to the device.
    pub fn grab(&mut self) -> Result<(), InputError> {
        set_grab(&self.file, true).map_err(|source| InputError::Grab {
            path: self.path.clone(),
            source,
        })?;
        self.grabbed = true;
        Ok(())
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    fn read_record(&mut self) -> Option<[u8; RECORD_SIZE]> {
        let mut record = [0u8; RECORD_SIZE];
        match self.file.read(&mut record) {
            Ok(n) if n == RECORD_SIZE => Some(record),
            Ok(0) => None,
            Ok(n) => {
                log::debug!("Short input record ({} bytes) from {}", n, self.path.display());
                None
            }
            Err(e) if e.kind() == ErrorKind::WouldBlock => None,
            Err(e) => {
                log::debug!("Input read failed on {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl RawInputSource for EvdevInput {
    fn poll_key(&mut self) -> Option<RawKeyEvent> {
        loop {
            let record = self.read_record()?;
            if let Some(event) = decode_record(&record) {
                return Some(event);
            }
        }
    }
}

impl Drop for EvdevInput {
    fn drop(&mut self) {
        if self.grabbed {
            // Best-effort release; the fd closes right after anyway.
            let _ = set_grab(&self.file, false);
        }
    }
}

/// Decode an `input_event` record, keeping only key events.
///
/// The record ends with `type: u16`, `code: u16`, `value: i32` after a
/// timestamp whose width depends on the platform.
fn decode_record(record: &[u8]) -> Option<RawKeyEvent> {
    let tail = record.len().checked_sub(8)?;
    let kind = u16::from_ne_bytes([record[tail], record[tail + 1]]);
    if kind != EV_KEY {
        return None;
    }
    let code = u16::from_ne_bytes([record[tail + 2], record[tail + 3]]);
    let value = i32::from_ne_bytes([
        record[tail + 4],
        record[tail + 5],
        record[tail + 6],
        record[tail + 7],
    ]);
    Some(RawKeyEvent::new(code, value))
}

fn set_grab(file: &File, grab: bool) -> std::io::Result<()> {
    let flag: libc::c_int = grab as libc::c_int;
    // SAFETY: EVIOCGRAB takes an int argument by value and the fd is owned by `file`.
    let rc = unsafe { libc::ioctl(file.as_raw_fd(), EVIOCGRAB as _, flag) };
    if rc < 0 {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(())
    }
}
