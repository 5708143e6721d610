use super::{
    Options, Result,
    ast::Sequence,
    cursor::{LookupTable, SpanInfo},
    parser::parse_pattern,
};

/// A parsed pattern together with its offset index.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    sequence: Sequence,
    table: LookupTable,
}

impl Explanation {
    #[must_use]
    pub fn new(sequence: Sequence, table: LookupTable) -> Self {
        Self { sequence, table }
    }

    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    #[must_use]
    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// See [`lookup`].
    #[must_use]
    pub fn lookup(&self, offset: usize) -> Option<&SpanInfo> {
        self.table.lookup(offset)
    }

    /// The full description, one construct per line.
    #[must_use]
    pub fn render(&self) -> String {
        self.sequence.render(0)
    }

    #[must_use]
    pub fn into_parts(self) -> (Sequence, LookupTable) {
        (self.sequence, self.table)
    }
}

/// Describes `pattern` in plain English.
///
/// # Errors
///
/// If the pattern is malformed, an [`Error`](crate::Error) is returned whose
/// [`location`](crate::Error::location) points at the offending glyphs.
pub fn interpret(pattern: &str, options: Options) -> Result<String> {
    parse(pattern, options).map(|explanation| explanation.render())
}

/// Parses `pattern`, keeping the tree and the offset index for interactive
/// use.
///
/// # Errors
///
/// If the pattern is malformed, an [`Error`](crate::Error) is returned.
pub fn parse(pattern: &str, options: Options) -> Result<Explanation> {
    let (sequence, table) = parse_pattern(pattern, options)?;
    Ok(Explanation::new(sequence, table))
}

/// Maps a glyph offset in the pattern to the smallest construct that
/// consumed it, or `None` if no construct did (skipped whitespace,
/// comments, or an offset past the end).
#[must_use]
pub fn lookup(table: &LookupTable, offset: usize) -> Option<&SpanInfo> {
    table.lookup(offset)
}
