//! Terminal status lines.

use std::fmt;

/// ANSI color codes for terminal output.
mod colors {
    pub const NOTE: &str = "\x1b[36m"; // Cyan
    pub const OK: &str = "\x1b[32m"; // Green
    pub const ERROR: &str = "\x1b[31m"; // Red
    pub const RESET: &str = "\x1b[0m";
}

pub const BANNER: &str = concat!("scrawl protocol validator ", env!("CARGO_PKG_VERSION"));

/// When to color output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Renders the validator's status lines, colored or plain.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    colors: bool,
}

impl Palette {
    pub fn new(mode: ColorMode, is_tty: bool) -> Self {
        Palette {
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn paint(self, color: &str, text: impl fmt::Display) -> String {
        if self.colors {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn banner(self) -> String {
        self.paint(colors::NOTE, BANNER)
    }

    pub fn passed(self) -> String {
        self.paint(colors::OK, "Validation passed")
    }

    pub fn error(self, error: impl fmt::Display) -> String {
        self.paint(colors::ERROR, format_args!("Error: {error}"))
    }
}
