//! Display error types

use std::path::PathBuf;

/// Failures talking to the panel. All of them end the program.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Failed to open framebuffer device '{path}': {source}", path = .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write frame to '{path}': {source}", path = .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to request refresh via '{path}': {source}", path = .path.display())]
    Refresh {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Frame of {actual} bytes does not fit a panel of {expected} bytes")]
    FrameSize { expected: usize, actual: usize },
}
