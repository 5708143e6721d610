use crate::ast::NodeKind;

/// One lookup entry: the glyph span a construct consumed and the rendered
/// text of that construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanInfo {
    pub kind: NodeKind,
    /// First glyph offset of the span.
    pub start: usize,
    /// Last glyph offset of the span, inclusive.
    pub end: usize,
    pub text: String,
}

impl SpanInfo {
    #[inline]
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// The number of glyphs in the span.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// An index from pattern offsets to the constructs that consumed them.
///
/// Entries are kept in registration order. Group entries enclose the
/// entries of their children; literal runs never nest.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<SpanInfo>,
    run_open: bool,
}

impl LookupTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            run_open: false,
        }
    }

    /// Records that `start..=end` produced `text`.
    ///
    /// A coalescible registration directly after another coalescible one
    /// extends the previous entry instead of adding a new one.
    pub fn register(
        &mut self,
        kind: NodeKind,
        text: &str,
        start: usize,
        end: usize,
        coalescible: bool,
    ) {
        debug_assert!(start <= end, "empty span {start}..={end}");

        if coalescible
            && self.run_open
            && let Some(last) = self.entries.last_mut()
        {
            last.end = end;
            last.text.push_str(text);
            return;
        }

        self.entries.push(SpanInfo {
            kind,
            start,
            end,
            text: text.to_owned(),
        });
        self.run_open = coalescible;
    }

    /// Ends the current literal run, if any.
    #[inline]
    pub fn close_run(&mut self) {
        self.run_open = false;
    }

    /// Returns the smallest entry containing `offset`. When several entries
    /// of the same size contain it, the first registered one wins.
    #[must_use]
    pub fn lookup(&self, offset: usize) -> Option<&SpanInfo> {
        self.entries
            .iter()
            .filter(|entry| entry.contains(offset))
            .min_by_key(|entry| entry.width())
    }

    #[must_use]
    pub fn entries(&self) -> &[SpanInfo] {
        &self.entries
    }
}
