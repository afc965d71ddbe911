//! Command-line interface definitions and helpers.

mod args;
mod settings;

pub use args::Args;
pub use settings::Settings;
