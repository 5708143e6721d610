//! Turns a parsed [`Sequence`] into indented, human-readable text.

use std::fmt;

use super::{
    NEWLINE,
    ast::{Bound, CharClass, Conditional, Group, GroupKind, Lookaround, Node, Quantifier, Sequence},
};

fn pad(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat_n(' ', indent));
}

impl Sequence {
    /// Renders the sequence with every line indented by `indent` spaces.
    ///
    /// Consecutive ordinary glyphs are collected into one line. Every other
    /// node gets its own line(s); a node that renders to nothing is skipped.
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        let mut run = String::new();

        for node in self.iter() {
            if let Node::Character(c) = node
                && !c.special
            {
                run.push_str(&c.text);
                continue;
            }

            flush_run(&mut out, &mut run, indent);

            let text = node.render(indent);
            if text.is_empty() {
                continue;
            }
            out.push_str(&text);
            if !text.ends_with(NEWLINE) {
                out.push_str(NEWLINE);
            }
        }

        flush_run(&mut out, &mut run, indent);
        out
    }
}

fn flush_run(out: &mut String, run: &mut String, indent: usize) {
    if run.is_empty() {
        return;
    }
    pad(out, indent);
    out.push_str(run);
    out.push_str(NEWLINE);
    run.clear();
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

impl Node {
    /// Renders a single node at `indent`. Multi-line nodes indent their
    /// inner lines further; the last line has no terminator.
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        match self {
            Node::Character(c) => {
                pad(&mut out, indent);
                out.push_str(&c.text);
            }
            Node::Class(class) => {
                pad(&mut out, indent);
                out.push_str(&class.to_string());
            }
            Node::Quantifier(quantifier) => {
                pad(&mut out, indent);
                out.push_str(&quantifier.to_string());
            }
            Node::Alternation(_) => {
                pad(&mut out, indent + 2);
                out.push_str("or");
            }
            Node::Group(group) => group.render_into(&mut out, indent),
            Node::Conditional(conditional) => conditional.render_into(&mut out, indent),
        }
        out
    }
}

impl Group {
    fn render_into(&self, out: &mut String, indent: usize) {
        pad(out, indent);
        out.push_str(&self.kind.to_string());

        if let Some(body) = &self.body {
            out.push_str(NEWLINE);
            out.push_str(&body.render(indent + 2));
            pad(out, indent);
            out.push_str("End Capture");
        }
    }
}

impl Conditional {
    fn render_into(&self, out: &mut String, indent: usize) {
        // Only the pad and the final terminator go; escape texts keep their
        // trailing space.
        let part = |sequence: &Sequence| {
            let text = sequence.render(indent);
            text.strip_suffix(NEWLINE)
                .unwrap_or(&text)
                .trim_start_matches(' ')
                .to_owned()
        };

        pad(out, indent);
        out.push_str("if: ");
        out.push_str(&part(&self.condition));
        out.push_str(NEWLINE);

        pad(out, indent);
        out.push_str("match: ");
        out.push_str(&part(&self.yes));
        out.push_str(NEWLINE);

        if let Some(no) = &self.no {
            pad(out, indent);
            out.push_str("else match: ");
            out.push_str(&part(no));
            out.push_str(NEWLINE);
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Capture => f.write_str("Capture"),
            GroupKind::NonCapturing => f.write_str("Non-capturing Group"),
            GroupKind::Named(name) => write!(f, "Capture to <{name}>"),
            GroupKind::Balancing(first, second) => {
                write!(f, "Balancing Group <{first}>-<{second}>")
            }
            GroupKind::Options(options) => {
                f.write_str("Set options to ")?;
                for (index, option) in options.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{option}")?;
                }
                Ok(())
            }
            GroupKind::Lookaround(lookaround) => write!(f, "{lookaround}"),
            GroupKind::NonBacktracking => f.write_str("Non-backtracking subexpression"),
            GroupKind::Conditional => f.write_str("Conditional Subexpression"),
        }
    }
}

impl fmt::Display for Lookaround {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lookaround::PositiveLookahead => "zero-width positive lookahead",
            Lookaround::NegativeLookahead => "zero-width negative lookahead",
            Lookaround::PositiveLookbehind => "zero-width positive lookbehind",
            Lookaround::NegativeLookbehind => "zero-width negative lookbehind",
        })
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Set {
                members,
                negated: false,
            } => write!(f, "Any character in \"{members}\""),
            CharClass::Set {
                members,
                negated: true,
            } => write!(f, "Any character not in \"{members}\""),
            CharClass::Unterminated => f.write_str("missing ']' in character class"),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Exactly(n) => write!(f, "Exactly {n} times"),
            Bound::AtLeast(n) => write!(f, "At least {n} times"),
            Bound::Between(n, m) => write!(f, "At least {n}, but not more than {m} times"),
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Bounded { bound, lazy } => {
                write!(f, "{bound}")?;
                if *lazy {
                    f.write_str(" (non-greedy)")?;
                }
                Ok(())
            }
            Quantifier::Unterminated => f.write_str("missing '}' in quantifier"),
        }
    }
}
