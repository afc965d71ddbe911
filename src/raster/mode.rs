//! Display mode selection.

use std::fmt;

/// How intensity values are reduced before reaching the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Floyd–Steinberg error diffusion to pure black and white
    #[default]
    Dithered,
    /// Hard threshold on luminance, no diffusion
    BlackWhite,
    /// Full 8-bit intensity passed through
    Greyscale,
}

impl DisplayMode {
    /// Parse a mode name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dithered" | "dither" => Some(DisplayMode::Dithered),
            "blackwhite" | "bw" => Some(DisplayMode::BlackWhite),
            "greyscale" | "grayscale" => Some(DisplayMode::Greyscale),
            _ => None,
        }
    }

    /// Resolve an optional configured name, keeping `fallback` when the name is
    /// missing or unrecognized.
    pub fn resolve(name: Option<&str>, fallback: DisplayMode) -> Self {
        match name {
            Some(name) => Self::from_name(name).unwrap_or_else(|| {
                log::debug!("Ignoring unknown display mode '{}'", name);
                fallback
            }),
            None => fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Dithered => "dithered",
            DisplayMode::BlackWhite => "blackwhite",
            DisplayMode::Greyscale => "greyscale",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
