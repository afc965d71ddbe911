//! E-ink framebuffer output.
//!
//! Frames are written to the framebuffer character device from offset 0.
//! The controller only redraws once `"1"` is written to its refresh control
//! file.

use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::error::DisplayError;
use super::DisplaySink;

pub const DEFAULT_FRAMEBUFFER_PATH: &str = "/dev/fb0";
pub const DEFAULT_REFRESH_PATH: &str = "/proc/eink_fb/update_display";

/// Framebuffer device plus its refresh control file.
pub struct FramebufferSink {
    device: File,
    device_path: PathBuf,
    refresh_path: PathBuf,
    frame_len: usize,
}

impl FramebufferSink {
    /// Open the framebuffer for `frame_len`-byte frames.
    pub fn open(device_path: &Path, refresh_path: &Path, frame_len: usize) -> Result<Self, DisplayError> {
        let device = OpenOptions::new()
            .read(true)
            .write(true)
            .open(device_path)
            .map_err(|source| DisplayError::Open {
                path: device_path.to_path_buf(),
                source,
            })?;

        log::info!(
            "Framebuffer {} opened ({} byte frames)",
            device_path.display(),
            frame_len
        );

        Ok(Self {
            device,
            device_path: device_path.to_path_buf(),
            refresh_path: refresh_path.to_path_buf(),
            frame_len,
        })
    }

    fn write_err(&self, source: std::io::Error) -> DisplayError {
        DisplayError::Write {
            path: self.device_path.clone(),
            source,
        }
    }
}

impl DisplaySink for FramebufferSink {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), DisplayError> {
        if frame.len() != self.frame_len {
            return Err(DisplayError::FrameSize {
                expected: self.frame_len,
                actual: frame.len(),
            });
        }
        self.device
            .seek(SeekFrom::Start(0))
            .map_err(|e| self.write_err(e))?;
        self.device.write_all(frame).map_err(|e| self.write_err(e))?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), DisplayError> {
        let refresh_err = |source: std::io::Error| DisplayError::Refresh {
            path: self.refresh_path.clone(),
            source,
        };
        let mut control = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.refresh_path)
            .map_err(refresh_err)?;
        control.write_all(b"1").map_err(refresh_err)?;
        Ok(())
    }
}
