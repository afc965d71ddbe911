//! Host engine seam and the frame loop that drives it.
//!
//! The engine that actually produces frames lives outside this crate. It is
//! reached through [`GameHost`]; [`run`] calls it once per logical frame:
//! advance, render through the session, then deliver every queued key.
//! A new window title from the host blanks the panel before the next render.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::display::DisplayError;
use crate::input::LogicalKey;
use crate::queue::KeyEvent;
use crate::raster::{pack_rgb, RasterError, SourceFrame};
use crate::session::Session;

/// Set by the Ctrl+C handler.
pub static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Install a Ctrl+C handler that asks [`run`] to stop after the current frame.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
        eprintln!("\nReceived Ctrl+C, shutting down...");
    })
}

/// The engine producing frames and consuming key events.
pub trait GameHost {
    /// Advance the engine by one logical frame.
    fn advance(&mut self);

    /// The raster for the current frame.
    fn frame(&self) -> Result<SourceFrame<'_>, RasterError>;

    /// Deliver one key transition.
    fn handle_key(&mut self, event: KeyEvent);

    /// A window title set since the last call, if any.
    ///
    /// The panel has no title bar; [`run`] clears the display instead.
    fn take_title(&mut self) -> Option<String> {
        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error("Host produced an invalid frame: {0}")]
    Raster(#[from] RasterError),
}

/// Frame loop settings.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Minimum time between frames; zero runs flat out
    pub frame_interval: Duration,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl RunOptions {
    pub fn with_fps(fps: u32) -> Self {
        let frame_interval = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / fps
        };
        Self {
            frame_interval,
            max_frames: None,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::with_fps(DEFAULT_FPS)
    }
}

/// E-ink panels cannot usefully refresh much faster.
pub const DEFAULT_FPS: u32 = 5;

/// Drive `host` until `shutdown` is set or `max_frames` is reached.
///
/// Returns the number of frames rendered. A display failure stops the loop
/// immediately.
pub fn run(
    session: &mut Session,
    host: &mut dyn GameHost,
    options: RunOptions,
    shutdown: &AtomicBool,
) -> Result<u64, HostError> {
    let mut rendered = 0u64;

    while !shutdown.load(Ordering::SeqCst) {
        if options.max_frames.is_some_and(|max| rendered >= max) {
            break;
        }
        let started = Instant::now();

        host.advance();
        if let Some(title) = host.take_title() {
            log::info!("Host title: {}", title);
            session.clear_display()?;
        }
        session.render_frame(&host.frame()?)?;
        while let Some(event) = session.next_key() {
            host.handle_key(event);
        }
        rendered += 1;

        let elapsed = started.elapsed();
        if elapsed < options.frame_interval {
            thread::sleep(options.frame_interval - elapsed);
        }
    }

    log::info!("Frame loop stopped after {} frames", rendered);
    Ok(rendered)
}

/// Resolution of the classic engine this pipeline was built around.
pub const PATTERN_WIDTH: usize = 640;
pub const PATTERN_HEIGHT: usize = 400;

const BLOCK_SIZE: usize = 48;
const BLOCK_STEP: usize = 8;

/// Built-in demo engine: a grey gradient with a block steered by the arrow keys.
///
/// Fire toggles the block between black and white.
pub struct PatternHost {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
    block_x: usize,
    block_y: usize,
    held: [bool; 4],
    block_white: bool,
    ticks: u64,
    title: Option<String>,
}

impl PatternHost {
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(BLOCK_SIZE);
        let height = height.max(BLOCK_SIZE);
        Self {
            pixels: vec![0; width * height],
            width,
            height,
            block_x: (width - BLOCK_SIZE) / 2,
            block_y: (height - BLOCK_SIZE) / 2,
            held: [false; 4],
            block_white: false,
            ticks: 0,
            title: Some(format!("ink-frame pattern {}x{}", width, height)),
        }
    }

    pub fn block_position(&self) -> (usize, usize) {
        (self.block_x, self.block_y)
    }

    pub fn block_is_white(&self) -> bool {
        self.block_white
    }

    fn redraw(&mut self) {
        let span = (self.width - 1).max(1);
        let block = if self.block_white { 255 } else { 0 };
        for y in 0..self.height {
            for x in 0..self.width {
                let in_block = (self.block_x..self.block_x + BLOCK_SIZE).contains(&x)
                    && (self.block_y..self.block_y + BLOCK_SIZE).contains(&y);
                let level = if in_block {
                    block
                } else {
                    (x * 255 / span) as u8
                };
                self.pixels[y * self.width + x] = pack_rgb(level, level, level);
            }
        }
    }
}

impl Default for PatternHost {
    fn default() -> Self {
        Self::new(PATTERN_WIDTH, PATTERN_HEIGHT)
    }
}

impl GameHost for PatternHost {
    fn advance(&mut self) {
        let [left, right, up, down] = self.held;
        let max_x = self.width - BLOCK_SIZE;
        let max_y = self.height - BLOCK_SIZE;
        if left {
            self.block_x = self.block_x.saturating_sub(BLOCK_STEP);
        }
        if right {
            self.block_x = (self.block_x + BLOCK_STEP).min(max_x);
        }
        if up {
            self.block_y = self.block_y.saturating_sub(BLOCK_STEP);
        }
        if down {
            self.block_y = (self.block_y + BLOCK_STEP).min(max_y);
        }
        self.ticks += 1;
        self.redraw();
    }

    fn frame(&self) -> Result<SourceFrame<'_>, RasterError> {
        SourceFrame::new(&self.pixels, self.width, self.height)
    }

    fn handle_key(&mut self, event: KeyEvent) {
        let Some(key) = LogicalKey::from_code(event.key) else {
            return;
        };
        log::debug!(
            "{} {} at tick {}",
            key.name(),
            if event.pressed { "down" } else { "up" },
            self.ticks
        );
        match key {
            LogicalKey::LeftArrow => self.held[0] = event.pressed,
            LogicalKey::RightArrow => self.held[1] = event.pressed,
            LogicalKey::UpArrow => self.held[2] = event.pressed,
            LogicalKey::DownArrow => self.held[3] = event.pressed,
            LogicalKey::Fire => {
                if event.pressed {
                    self.block_white = !self.block_white;
                }
            }
        }
    }

    fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }
}
