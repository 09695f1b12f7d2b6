//! Diagnostic severity levels and terminal color selection.
//!
//! # Examples
//!
//! ```
//! use vlark_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(Level::Warning.to_string(), "warning");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Ordered from most to least severe for the user-facing levels; `Bug` sorts
/// last but still counts as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem in the source text that makes it invalid
    Error,
    /// Suspicious source text that is still accepted
    Warning,
    /// Additional context attached to another diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
    /// The front end itself hit an unexpected state
    Bug,
}

impl Level {
    /// Returns true if this level blocks further processing
    ///
    /// ```
    /// use vlark_util::diagnostic::Level;
    ///
    /// assert!(Level::Bug.is_error());
    /// assert!(!Level::Note.is_error());
    /// ```
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error | Level::Bug)
    }

    /// Returns true if this level is a warning
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Returns the name printed in rendered diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
            Level::Bug => "internal error",
        }
    }

    /// ANSI SGR color for this level
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",   // Red
            Level::Warning => "33", // Yellow
            Level::Note => "36",    // Cyan
            Level::Help => "32",    // Green
            Level::Bug => "35",     // Magenta
        }
    }

    /// Wrap `text` in this level's color escape sequence
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[1;{}m{}\x1b[0m", self.color_code(), text)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color output configuration for rendered diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorConfig {
    /// Color only when writing to a terminal
    #[default]
    Auto,
    /// Always color, even in pipes
    Always,
    /// Never color
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used for the given output
    ///
    /// ```
    /// use vlark_util::diagnostic::ColorConfig;
    ///
    /// assert!(ColorConfig::Auto.use_color(true));
    /// assert!(!ColorConfig::Auto.use_color(false));
    /// assert!(!ColorConfig::Never.use_color(true));
    /// ```
    pub const fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }
}
