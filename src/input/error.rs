//! Input device error types

use std::path::PathBuf;

/// Errors raised while setting up the raw input device.
///
/// None of these are fatal; the session runs without input when they occur.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to open input device '{path}': {source}", path = .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to grab input device '{path}': {source}", path = .path.display())]
    Grab {
        path: PathBuf,
        source: std::io::Error,
    },
}
