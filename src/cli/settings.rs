//! Effective runtime settings: config file values overridden by CLI flags.

use std::path::PathBuf;

use super::args::Args;
use crate::config::{Config, ConfigError};
use crate::host::RunOptions;
use crate::raster::DisplayMode;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub mode: DisplayMode,
    pub framebuffer: PathBuf,
    pub refresh: PathBuf,
    pub width: usize,
    pub height: usize,
    /// `width * height`, checked
    pub frame_len: usize,
    pub input: PathBuf,
    pub grab: bool,
    pub fps: u32,
    pub max_frames: Option<u64>,
}

impl Settings {
    /// Merge `config` with `args`; flags win.
    ///
    /// The mode starts at the default, then the config file and then the flag
    /// may change it. An unrecognized name at either step is skipped.
    pub fn resolve(args: &Args, config: Config) -> Result<Self, ConfigError> {
        let frame_len = config.display.frame_len()?;
        let mode = DisplayMode::resolve(config.display.mode.as_deref(), DisplayMode::default());
        let mode = DisplayMode::resolve(args.mode.as_deref(), mode);

        Ok(Self {
            mode,
            framebuffer: args.framebuffer.clone().unwrap_or(config.display.framebuffer),
            refresh: args.refresh.clone().unwrap_or(config.display.refresh),
            width: config.display.width,
            height: config.display.height,
            frame_len,
            input: args.input.clone().unwrap_or(config.input.device),
            grab: config.input.grab && !args.no_grab,
            fps: args.fps,
            max_frames: (args.frames > 0).then_some(args.frames),
        })
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            max_frames: self.max_frames,
            ..RunOptions::with_fps(self.fps)
        }
    }
}
