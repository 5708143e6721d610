/// A bracketed character class, `[...]` or `[^...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// Members are the glyphs between the brackets, verbatim.
    Set { members: String, negated: bool },
    /// No closing `]`; described in the output instead of failing the parse.
    Unterminated,
}

impl CharClass {
    #[must_use]
    pub fn set(members: impl Into<String>, negated: bool) -> Self {
        CharClass::Set {
            members: members.into(),
            negated,
        }
    }
}
