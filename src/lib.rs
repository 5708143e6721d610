//! A .NET/PCRE-flavoured regular expression explainer.
//!
//! A pattern is parsed into a tree of [`Node`]s and rendered as indented,
//! plain-English text. Every parsed construct remembers the span of the
//! pattern it came from, so a caret position can be mapped back to the line
//! of the explanation that describes it (see [`lookup`]).

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::too_many_lines)]

pub mod ast;
pub mod cursor;
pub mod explain;
pub mod lexer;
pub mod location;
pub mod options;
pub mod parser;
pub mod render;

pub use self::{
    ast::{
        CharClass, Character, Conditional, Group, GroupKind, Node, NodeKind, Quantifier, Sequence,
    },
    cursor::{Cursor, LookupTable, SpanInfo},
    explain::{Explanation, interpret, lookup, parse},
    location::Location,
    options::{InlineOption, OptionFlag, Options, OptionsError},
    parser::Parser,
};

/// The line terminator used between rendered lines.
pub const NEWLINE: &str = "\r\n";

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The cursor was asked for a glyph past the end of the pattern.
    #[error("unexpected end of pattern at {pos}")]
    OutOfRange { pos: usize },

    /// A `(?` opener that is none of the recognised group forms.
    #[error("unrecognized grouping construct at {pos}")]
    UnrecognizedCapture { pos: usize },

    /// The pattern ended before the group opened at `pos` was closed.
    #[error("missing ')' for group opened at {pos}")]
    UnterminatedGroup { pos: usize },

    /// Something other than `)` was found where a group had to close.
    #[error("expected ')' at {pos}")]
    UnterminatedClosure { pos: usize },

    /// The yes/no part of a conditional has more than one top-level `|`.
    #[error("too many '|' in conditional subexpression at {pos}")]
    MultipleAlternatesInConditional { pos: usize },

    /// A `)` with no open group.
    #[error("too many ')'s at {pos}")]
    UnmatchedClosure { pos: usize },
}

impl Error {
    /// The span of the pattern to highlight for this error.
    #[must_use]
    pub const fn location(&self) -> Location {
        match *self {
            Error::OutOfRange { pos } => Location::new(pos, 0),
            Error::UnrecognizedCapture { pos } => Location::new(pos, 2),
            Error::UnterminatedGroup { pos }
            | Error::UnterminatedClosure { pos }
            | Error::MultipleAlternatesInConditional { pos }
            | Error::UnmatchedClosure { pos } => Location::new(pos, 1),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
