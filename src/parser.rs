use super::{
    Error, Location, Options, Result,
    ast::{Bound, CharClass, Character, Conditional, Group, GroupKind, Node, Quantifier, Sequence},
    cursor::{Cursor, LookupTable},
    lexer,
};

/// Parses `pattern` into a [`Sequence`] and the lookup table built while
/// reading it.
///
/// # Errors
///
/// If the pattern is malformed, an [`Error`] carrying the offending
/// location is returned.
pub fn parse_pattern(pattern: &str, options: Options) -> Result<(Sequence, LookupTable)> {
    Parser::new(pattern, options).parse()
}

/// Converts a pattern string into a [`Sequence`], recording the span of
/// every construct as it goes.
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    #[must_use]
    pub fn new(pattern: &str, options: Options) -> Self {
        Self {
            cursor: Cursor::new(pattern, options),
        }
    }

    /// Parses the whole pattern. On failure, [`Parser::error_location`]
    /// holds the span of the first construct that failed.
    ///
    /// # Errors
    ///
    /// If the pattern is malformed, an [`Error`] is returned.
    pub fn parse(&mut self) -> Result<(Sequence, LookupTable)> {
        let sequence = self.parse_sequence()?;

        // The only way for the top-level sequence to stop early.
        if !self.cursor.at_end() {
            let pos = self.cursor.offset();
            return Err(self.cursor.fail(Error::UnmatchedClosure { pos }));
        }

        Ok((sequence, self.cursor.take_table()))
    }

    /// The location recorded by the first failure, if parsing failed.
    #[must_use]
    pub fn error_location(&self) -> Option<Location> {
        self.cursor.error_location()
    }

    /// Reads nodes until the end of the pattern or an unconsumed `)`.
    fn parse_sequence(&mut self) -> Result<Sequence> {
        let mut nodes = Vec::new();

        while let Some(glyph) = self.cursor.peek() {
            if self.cursor.options().ignore_whitespace {
                if matches!(glyph, ' ' | '\t' | '\r' | '\n') {
                    self.cursor.advance();
                    self.cursor.break_run();
                    continue;
                }
                if glyph == '#' {
                    self.skip_comment();
                    self.cursor.break_run();
                    continue;
                }
            }

            let node = match glyph {
                '(' => self.parse_group()?,
                ')' => break,
                '[' => self.parse_class(),
                '\\' => self.parse_escape()?,
                '{' => self.parse_quantifier(),
                '|' => self.parse_alternation(),
                _ => self.parse_character(glyph),
            };
            nodes.push(node);
        }

        Ok(Sequence::new(nodes))
    }

    fn skip_comment(&mut self) {
        while let Some(glyph) = self.cursor.peek()
            && !matches!(glyph, '\r' | '\n')
        {
            self.cursor.advance();
        }
    }

    /// Adds `node` to the lookup table with the span from `start` to the
    /// glyph before the cursor.
    fn register(&mut self, node: &Node, start: usize) {
        let end = self.cursor.offset().saturating_sub(1).max(start);
        let text = node.render(0);
        self.cursor.register(
            node.kind(),
            text.trim_start_matches(' '),
            start,
            end,
            node.is_ordinary(),
        );
    }

    fn current(&mut self) -> Result<char> {
        self.cursor.current().map_err(|err| self.cursor.fail(err))
    }

    /// Consumes the `)` closing the group opened at `start`.
    fn expect_close(&mut self, start: usize) -> Result<()> {
        match self.cursor.peek() {
            Some(')') => {
                self.cursor.advance();
                Ok(())
            }
            Some(_) => {
                let pos = self.cursor.offset();
                Err(self.cursor.fail(Error::UnterminatedClosure { pos }))
            }
            None => Err(self.cursor.fail(Error::UnterminatedGroup { pos: start })),
        }
    }

    fn parse_character(&mut self, glyph: char) -> Node {
        let start = self.cursor.offset();
        self.cursor.advance();

        let character = match glyph {
            ' ' => Character::special("' ' (space)"),
            '$' => Character::special("$ (anchor to end of string)"),
            '^' => Character::special("^ (anchor to start of string)"),
            '.' => Character::special(". (any character)"),
            '*' | '+' | '?' => {
                let mut text = match glyph {
                    '*' => "* (zero or more times)",
                    '+' => "+ (one or more times)",
                    _ => "? (zero or one time)",
                }
                .to_owned();
                if self.cursor.peek() == Some('?') {
                    self.cursor.advance();
                    text.push_str(" (non-greedy)");
                }
                Character::special(text)
            }
            c => Character::literal(c),
        };

        let node = Node::Character(character);
        self.register(&node, start);
        node
    }

    fn parse_escape(&mut self) -> Result<Node> {
        let start = self.cursor.offset();
        self.cursor.advance();

        let node = Node::Character(self.escaped_character()?);
        self.register(&node, start);
        Ok(node)
    }

    fn escaped_character(&mut self) -> Result<Character> {
        if let Some((name, len)) = lexer::backreference(self.cursor.remaining()) {
            self.cursor.advance_by(len);
            return Ok(Character::special(format!("Backreference to match: {name}")));
        }

        let glyph = self.current()?;
        self.cursor.advance();

        Ok(match glyph {
            'c' => {
                let control = self.current()?;
                self.cursor.advance();
                Character::special(format!("CTRL-{control}"))
            }
            'u' => Character::special(format!("Unicode {}", self.take(4)?)),
            'x' => Character::special(format!("Hex {}", self.take(2)?)),
            ' ' => Character {
                text: "' ' (space)".to_owned(),
                special: false,
            },
            c => match lexer::escape_description(c) {
                Some(text) => Character::special(text),
                None => Character::literal(c),
            },
        })
    }

    /// Consumes exactly `count` glyphs.
    fn take(&mut self, count: usize) -> Result<String> {
        let mut taken = String::with_capacity(count);
        for _ in 0..count {
            taken.push(self.current()?);
            self.cursor.advance();
        }
        Ok(taken)
    }

    fn parse_alternation(&mut self) -> Node {
        let start = self.cursor.offset();
        self.cursor.advance();

        let node = Node::Alternation(start);
        self.register(&node, start);
        node
    }

    fn parse_class(&mut self) -> Node {
        let start = self.cursor.offset();
        self.cursor.advance();

        let negated = self.cursor.peek() == Some('^');
        if negated {
            self.cursor.advance();
        }

        let rest = self.cursor.remaining();
        let (class, consumed) = match rest.iter().position(|&c| c == ']') {
            Some(close) => {
                let members: String = rest[..close].iter().collect();
                (CharClass::set(members, negated), close + 1)
            }
            None => (CharClass::Unterminated, rest.len()),
        };
        self.cursor.advance_by(consumed);

        let node = Node::Class(class);
        self.register(&node, start);
        node
    }

    fn digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(c) = self.cursor.peek()
            && c.is_ascii_digit()
        {
            digits.push(c);
            self.cursor.advance();
        }
        digits
    }

    fn parse_quantifier(&mut self) -> Node {
        let start = self.cursor.offset();
        self.cursor.advance();

        let min = self.digits();
        let comma = self.cursor.peek() == Some(',');
        if comma {
            self.cursor.advance();
        }
        let max = self.digits();

        let quantifier = if !min.is_empty() && self.cursor.peek() == Some('}') {
            self.cursor.advance();
            let bound = match (comma, max.is_empty()) {
                (false, _) => Bound::Exactly(min),
                (true, true) => Bound::AtLeast(min),
                (true, false) => Bound::Between(min, max),
            };
            let lazy = self.cursor.peek() == Some('?');
            if lazy {
                self.cursor.advance();
            }
            Quantifier::Bounded { bound, lazy }
        } else {
            // A stray `}` belongs to the malformed quantifier, but only if it
            // comes before the `)` of an enclosing group.
            if let Some(close) = self
                .cursor
                .remaining()
                .iter()
                .take_while(|&&c| c != ')')
                .position(|&c| c == '}')
            {
                self.cursor.advance_by(close + 1);
            }
            Quantifier::Unterminated
        };

        let node = Node::Quantifier(quantifier);
        self.register(&node, start);
        node
    }

    fn parse_group(&mut self) -> Result<Node> {
        let start = self.cursor.offset();
        self.cursor.advance();
        self.cursor.break_run();

        let (kind, has_body) = if self.cursor.peek() == Some('?') {
            let Some(opener) = lexer::recognize(self.cursor.remaining()) else {
                return Err(self.cursor.fail(Error::UnrecognizedCapture { pos: start }));
            };
            self.cursor.advance_by(opener.len);
            (opener.kind, opener.has_body)
        } else if self.cursor.options().explicit_capture {
            (GroupKind::NonCapturing, true)
        } else {
            (GroupKind::Capture, true)
        };

        let body = if !has_body {
            None
        } else if kind == GroupKind::Conditional {
            Some(Sequence::new(vec![self.parse_conditional()?]))
        } else {
            Some(self.parse_sequence()?)
        };

        if body.is_some() {
            self.expect_close(start)?;
        }

        let node = Node::Group(Group::new(kind, body));
        self.register(&node, start);
        Ok(node)
    }

    /// Parses `(condition)yes|no` up to, but not including, the `)` that
    /// closes the enclosing group.
    fn parse_conditional(&mut self) -> Result<Node> {
        let start = self.cursor.offset();
        self.cursor.advance();
        self.cursor.break_run();

        let condition = self.parse_sequence()?;
        self.expect_close(start)?;
        self.cursor.break_run();

        let mut alternatives = self.parse_sequence()?.into_nodes();
        let mut markers = alternatives
            .iter()
            .enumerate()
            .filter_map(|(index, node)| match node {
                Node::Alternation(pos) => Some((index, *pos)),
                _ => None,
            });
        let split = markers.next().map(|(index, _)| index);
        if let Some((_, pos)) = markers.next() {
            return Err(self
                .cursor
                .fail(Error::MultipleAlternatesInConditional { pos }));
        }

        let no = split.map(|index| {
            let no = alternatives.split_off(index + 1);
            alternatives.pop();
            Sequence::new(no)
        });

        let node = Node::Conditional(Conditional {
            condition,
            yes: Sequence::new(alternatives),
            no,
        });
        self.register(&node, start);
        Ok(node)
    }
}
