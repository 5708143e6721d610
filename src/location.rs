/// A span of glyphs in a pattern.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Location {
    /// The glyph offset of the first glyph in the span.
    pub offset: usize,
    /// The number of glyphs in the span; 0 for a single position.
    pub length: usize,
}

impl Location {
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }
}
