//! Small scanners for the fixed sub-grammars inside a pattern: group
//! openers, named backreferences and the single-letter escape table.
//!
//! Every scanner looks at a slice of the unread pattern and reports how many
//! glyphs its construct occupies. None of them move the cursor.

use super::{
    ast::{GroupKind, Lookaround},
    options::{InlineOption, OptionFlag},
};

/// A recognised `(?` group opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    pub kind: GroupKind,
    /// Glyphs occupied by the opener, counted from the `?`.
    pub len: usize,
    /// Whether a body and a closing `)` follow the opener.
    pub has_body: bool,
}

impl Opener {
    fn with_body(kind: GroupKind, len: usize) -> Self {
        Self {
            kind,
            len,
            has_body: true,
        }
    }
}

fn is_word_glyph(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_len(glyphs: &[char]) -> usize {
    glyphs.iter().take_while(|c| is_word_glyph(**c)).count()
}

fn closing_quote(open: char) -> char {
    if open == '<' { '>' } else { '\'' }
}

/// Tries each group opener in priority order against `rest`, which must
/// start at the `?` after a `(`.
#[must_use]
pub fn recognize(rest: &[char]) -> Option<Opener> {
    named_capture(rest)
        .or_else(|| balancing_group(rest))
        .or_else(|| non_capturing(rest))
        .or_else(|| inline_options(rest))
        .or_else(|| lookaround(rest))
        .or_else(|| non_backtracking(rest))
        .or_else(|| conditional(rest))
}

/// `?<name>` or `?'name'`
#[must_use]
pub fn named_capture(rest: &[char]) -> Option<Opener> {
    let ['?', open @ ('<' | '\''), tail @ ..] = rest else {
        return None;
    };

    let n = word_len(tail);
    if n == 0 || tail.get(n) != Some(&closing_quote(*open)) {
        return None;
    }

    let name = tail[..n].iter().collect();
    Some(Opener::with_body(GroupKind::Named(name), n + 3))
}

/// `?<name1-name2>` or `?'name1-name2'`
#[must_use]
pub fn balancing_group(rest: &[char]) -> Option<Opener> {
    let ['?', open @ ('<' | '\''), tail @ ..] = rest else {
        return None;
    };

    let first = word_len(tail);
    if first == 0 || tail.get(first) != Some(&'-') {
        return None;
    }

    let tail_second = &tail[first + 1..];
    let second = word_len(tail_second);
    if second == 0 || tail_second.get(second) != Some(&closing_quote(*open)) {
        return None;
    }

    let kind = GroupKind::Balancing(
        tail[..first].iter().collect(),
        tail_second[..second].iter().collect(),
    );
    Some(Opener::with_body(kind, first + second + 4))
}

/// `?:`
#[must_use]
pub fn non_capturing(rest: &[char]) -> Option<Opener> {
    matches!(rest, ['?', ':', ..]).then(|| Opener::with_body(GroupKind::NonCapturing, 2))
}

/// `?imnsx-imnsx)`, `?imnsx-imnsx:)` or `?imnsx-imnsx:`. The first two are
/// complete groups on their own; the last is followed by a body.
#[must_use]
pub fn inline_options(rest: &[char]) -> Option<Opener> {
    let ['?', tail @ ..] = rest else {
        return None;
    };

    let mut options = Vec::new();
    let mut enabled = true;
    let mut n = 0;
    for &c in tail {
        if c == '-' {
            enabled = false;
        } else if let Some(flag) = OptionFlag::from_letter(c) {
            options.push(InlineOption::new(flag, enabled));
        } else {
            break;
        }
        n += 1;
    }

    if options.is_empty() {
        return None;
    }

    let kind = GroupKind::Options(options);
    match &tail[n..] {
        [')', ..] => Some(Opener {
            kind,
            len: n + 2,
            has_body: false,
        }),
        [':', ')', ..] => Some(Opener {
            kind,
            len: n + 3,
            has_body: false,
        }),
        [':', ..] => Some(Opener::with_body(kind, n + 2)),
        _ => None,
    }
}

/// `?=`, `?!`, `?<=` or `?<!`
#[must_use]
pub fn lookaround(rest: &[char]) -> Option<Opener> {
    let (lookaround, len) = match rest {
        ['?', '=', ..] => (Lookaround::PositiveLookahead, 2),
        ['?', '!', ..] => (Lookaround::NegativeLookahead, 2),
        ['?', '<', '=', ..] => (Lookaround::PositiveLookbehind, 3),
        ['?', '<', '!', ..] => (Lookaround::NegativeLookbehind, 3),
        _ => return None,
    };
    Some(Opener::with_body(GroupKind::Lookaround(lookaround), len))
}

/// `?>`
#[must_use]
pub fn non_backtracking(rest: &[char]) -> Option<Opener> {
    matches!(rest, ['?', '>', ..]).then(|| Opener::with_body(GroupKind::NonBacktracking, 2))
}

/// `?(`. Only the `?` belongs to the opener; the condition's own `(` is
/// read by the conditional parser.
#[must_use]
pub fn conditional(rest: &[char]) -> Option<Opener> {
    matches!(rest, ['?', '(', ..]).then(|| Opener::with_body(GroupKind::Conditional, 1))
}

/// `k<name>`, directly after a backslash. Returns the name and the number
/// of glyphs occupied.
#[must_use]
pub fn backreference(rest: &[char]) -> Option<(String, usize)> {
    let ['k', '<', tail @ ..] = rest else {
        return None;
    };

    let n = word_len(tail);
    if n == 0 || tail.get(n) != Some(&'>') {
        return None;
    }

    Some((tail[..n].iter().collect(), n + 3))
}

/// Descriptions of the single-letter escapes that need no further glyphs.
#[must_use]
pub const fn escape_description(c: char) -> Option<&'static str> {
    Some(match c {
        'a' => "Bell (alarm) \\u0007 ",
        't' => "Tab \\u0009 ",
        'r' => "Carriage return \\u000D ",
        'v' => "Vertical tab \\u000B ",
        'f' => "Form feed \\u000C ",
        'n' => "New line \\u000A ",
        'e' => "Escape \\u001B ",
        'w' => "Any word character ",
        'W' => "Any non-word character ",
        's' => "Any whitespace character ",
        'S' => "Any non-whitespace character ",
        'd' => "Any digit ",
        'D' => "Any non-digit ",
        'A' => "Anchor to start of string (ignore multiline)",
        'Z' => "Anchor to end of string or before \\n (ignore multiline)",
        'z' => "Anchor to end of string (ignore multiline)",
        'b' => "At a word boundary (between \\w and \\W)",
        'B' => "Not at a word boundary (between \\w and \\W)",
        _ => return None,
    })
}
