//! Parse-time options and inline option flags.

use std::{fmt, str::FromStr};

/// The error type used when parsing [`Options`] from a string.
#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum OptionsError {
    #[error("unknown option letter '{0}'")]
    UnknownLetter(char),
}

/// The subset of regex engine options that changes how a pattern is read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Unescaped whitespace is skipped and `#` starts a comment.
    pub ignore_whitespace: bool,
    /// Unnamed parentheses are groups, not captures.
    pub explicit_capture: bool,
}

impl Options {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ignore_whitespace: false,
            explicit_capture: false,
        }
    }

    #[must_use]
    pub const fn with_ignore_whitespace(mut self, on: bool) -> Self {
        self.ignore_whitespace = on;
        self
    }

    #[must_use]
    pub const fn with_explicit_capture(mut self, on: bool) -> Self {
        self.explicit_capture = on;
        self
    }
}

/// Reads option letters as they appear in an inline options group, e.g.
/// `"xn"`. Letters the parser does not care about (`i`, `m`, `s`) are
/// accepted and ignored.
impl FromStr for Options {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Options::new();
        for c in s.chars() {
            match OptionFlag::from_letter(c) {
                Some(OptionFlag::IgnoreWhitespace) => options.ignore_whitespace = true,
                Some(OptionFlag::ExplicitCapture) => options.explicit_capture = true,
                Some(_) => {}
                None => return Err(OptionsError::UnknownLetter(c)),
            }
        }
        Ok(options)
    }
}

/// A single option letter usable inside `(?...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFlag {
    /// `i`
    IgnoreCase,
    /// `m`
    Multiline,
    /// `n`
    ExplicitCapture,
    /// `s`
    Singleline,
    /// `x`
    IgnoreWhitespace,
}

impl OptionFlag {
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'i' => Some(OptionFlag::IgnoreCase),
            'm' => Some(OptionFlag::Multiline),
            'n' => Some(OptionFlag::ExplicitCapture),
            's' => Some(OptionFlag::Singleline),
            'x' => Some(OptionFlag::IgnoreWhitespace),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OptionFlag::IgnoreCase => "Ignore Case",
            OptionFlag::Multiline => "Multiline",
            OptionFlag::ExplicitCapture => "Explicit Capture",
            OptionFlag::Singleline => "Singleline",
            OptionFlag::IgnoreWhitespace => "Ignore Whitespace",
        }
    }
}

/// An option letter from an inline options group, turned on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOption {
    pub flag: OptionFlag,
    pub enabled: bool,
}

impl InlineOption {
    #[must_use]
    pub const fn new(flag: OptionFlag, enabled: bool) -> Self {
        Self { flag, enabled }
    }
}

impl fmt::Display for InlineOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag.name())?;
        if !self.enabled {
            f.write_str(" Off")?;
        }
        Ok(())
    }
}
