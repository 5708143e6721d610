use super::{Error, Location, Options, Result, ast::NodeKind};

pub mod lookup;

pub use lookup::{LookupTable, SpanInfo};

/// The read position over a pattern, plus everything the parser records as
/// a side effect of reading it.
///
/// Offsets count glyphs (Unicode scalar values), not bytes.
#[derive(Debug)]
pub struct Cursor {
    glyphs: Vec<char>,
    offset: usize,
    options: Options,
    error: Option<Location>,
    table: LookupTable,
}

impl Cursor {
    #[must_use]
    pub fn new(pattern: &str, options: Options) -> Self {
        Self {
            glyphs: pattern.chars().collect(),
            offset: 0,
            options,
            error: None,
            table: LookupTable::new(),
        }
    }

    /// Returns the glyph at the read offset.
    ///
    /// # Errors
    ///
    /// If the cursor is at the end of the pattern, [`Error::OutOfRange`] is
    /// returned.
    #[inline]
    pub fn current(&self) -> Result<char> {
        self.peek().ok_or(Error::OutOfRange { pos: self.offset })
    }

    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.glyphs.get(self.offset).copied()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    #[inline]
    pub fn advance_by(&mut self, count: usize) {
        self.offset = (self.offset + count).min(self.glyphs.len());
    }

    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.offset >= self.glyphs.len()
    }

    /// The unread part of the pattern.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[char] {
        &self.glyphs[self.offset..]
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Records the span of a parsed construct in the lookup table.
    pub fn register(
        &mut self,
        kind: NodeKind,
        text: &str,
        start: usize,
        end: usize,
        coalescible: bool,
    ) {
        self.table.register(kind, text, start, end, coalescible);
    }

    /// Ends the current literal run in the lookup table.
    #[inline]
    pub fn break_run(&mut self) {
        self.table.close_run();
    }

    /// Records the location of the first fatal failure. Later calls have no
    /// effect, so the root cause keeps its location while outer frames
    /// unwind.
    pub fn set_error(&mut self, location: Location) {
        if self.error.is_none() {
            self.error = Some(location);
        }
    }

    /// Records `err`'s location and hands it back for propagation.
    #[must_use]
    pub fn fail(&mut self, err: Error) -> Error {
        self.set_error(err.location());
        err
    }

    #[must_use]
    pub fn error_location(&self) -> Option<Location> {
        self.error
    }

    #[must_use]
    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Moves the lookup table out, leaving an empty one behind.
    #[must_use]
    pub fn take_table(&mut self) -> LookupTable {
        std::mem::take(&mut self.table)
    }
}
