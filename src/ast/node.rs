use super::{super::options::InlineOption, CharClass, Quantifier, Sequence};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Character(Character),
    Class(CharClass),
    Quantifier(Quantifier),

    // Zero-width `|` separator; the glyph offset is kept so that a
    // conditional can point at a surplus one.
    Alternation(usize),

    Group(Group),
    Conditional(Conditional),
}

/// The coarse kind of a node, recorded with each lookup entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Literal,
    Special,
    Class,
    Quantifier,
    Alternation,
    Group,
    Conditional,
}

impl Node {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Character(c) if c.special => NodeKind::Special,
            Node::Character(_) => NodeKind::Literal,
            Node::Class(_) => NodeKind::Class,
            Node::Quantifier(_) => NodeKind::Quantifier,
            Node::Alternation(_) => NodeKind::Alternation,
            Node::Group(_) => NodeKind::Group,
            Node::Conditional(_) => NodeKind::Conditional,
        }
    }

    /// Plain literal glyphs, which are merged into runs both in the output
    /// and in the lookup table.
    #[must_use]
    pub const fn is_ordinary(&self) -> bool {
        matches!(self, Node::Character(c) if !c.special)
    }
}

/// A single glyph or escape sequence with its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub text: String,
    /// Anchors, shortcuts and quantifier glyphs are special and get a line
    /// of their own; ordinary glyphs render as themselves.
    pub special: bool,
}

impl Character {
    #[must_use]
    pub fn literal(c: char) -> Self {
        Self {
            text: c.to_string(),
            special: false,
        }
    }

    #[must_use]
    pub fn special(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            special: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookaround {
    /// `(?=...)`
    PositiveLookahead,
    /// `(?!...)`
    NegativeLookahead,
    /// `(?<=...)`
    PositiveLookbehind,
    /// `(?<!...)`
    NegativeLookbehind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    /// `(...)`
    Capture,
    /// `(?:...)`, or `(...)` with explicit capture on.
    NonCapturing,
    /// `(?<name>...)` or `(?'name'...)`
    Named(String),
    /// `(?<name1-name2>...)` or `(?'name1-name2'...)`
    Balancing(String, String),
    /// `(?imnsx-imnsx)`, `(?imnsx-imnsx:)` or `(?imnsx-imnsx:...)`
    Options(Vec<InlineOption>),
    Lookaround(Lookaround),
    /// `(?>...)`
    NonBacktracking,
    /// `(?(...)...)`
    Conditional,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub kind: GroupKind,
    /// `None` only for bodyless inline options groups.
    pub body: Option<Sequence>,
}

impl Group {
    #[must_use]
    pub fn new(kind: GroupKind, body: Option<Sequence>) -> Self {
        Self { kind, body }
    }
}

/// The body of a `(?(condition)yes|no)` group.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Sequence,
    pub yes: Sequence,
    /// `None` when the alternatives contain no `|`.
    pub no: Option<Sequence>,
}
