//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use crate::host::DEFAULT_FPS;

/// Drive a monochrome e-ink framebuffer from an RGB frame source
#[derive(Parser, Debug)]
#[command(name = "ink-frame")]
#[command(version, about = "Monochrome e-ink frame pipeline", long_about = None)]
pub struct Args {
    /// Display mode: dithered, blackwhite or greyscale (unknown values are ignored)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Framebuffer device
    #[arg(long)]
    pub framebuffer: Option<PathBuf>,

    /// Refresh control file
    #[arg(long)]
    pub refresh: Option<PathBuf>,

    /// Input event device
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Do not take exclusive access to the input device
    #[arg(long)]
    pub no_grab: bool,

    /// Target frames per second (0 = unthrottled)
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Stop after this many frames (0 = run until Ctrl+C)
    #[arg(long, default_value = "0")]
    pub frames: u64,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
