//! Display output: full-frame writes followed by a refresh command.
//!
//! - [`DisplaySink`] - what the session needs from a panel
//! - [`FramebufferSink`] - memory-mapped framebuffer device plus refresh control file

mod error;
mod framebuffer;

pub use error::DisplayError;
pub use framebuffer::{FramebufferSink, DEFAULT_FRAMEBUFFER_PATH, DEFAULT_REFRESH_PATH};

/// A panel that accepts whole frames and shows them on request.
pub trait DisplaySink {
    /// Replace the panel memory with `frame`, starting at offset 0.
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), DisplayError>;

    /// Make the last written frame visible.
    fn refresh(&mut self) -> Result<(), DisplayError>;
}
