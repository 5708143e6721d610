/// The repetition bounds of a `{n}`, `{n,}` or `{n,m}` quantifier.
///
/// Counts are kept as the digit text from the pattern so that arbitrarily
/// long numbers are described exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// `{n}`
    Exactly(String),
    /// `{n,}`
    AtLeast(String),
    /// `{n,m}`
    Between(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantifier {
    Bounded { bound: Bound, lazy: bool },
    /// A `{` that did not lead to a well-formed closing `}`. This is
    /// described in the output instead of failing the parse.
    Unterminated,
}
