use rexplain::{Explanation, NodeKind, Options, SpanInfo, lookup, parse};

fn parse_ok(pattern: &str) -> Explanation {
    parse(pattern, Options::default())
        .unwrap_or_else(|err| panic!("Parser failed for pattern {pattern:?}: {err}"))
}

fn span(explanation: &Explanation, offset: usize) -> Option<(usize, usize)> {
    explanation.lookup(offset).map(|info| (info.start, info.end))
}

#[test]
fn test_literal_run_is_one_entry() {
    let explanation = parse_ok("hello");
    assert_eq!(
        explanation.table().entries(),
        &[SpanInfo {
            kind: NodeKind::Literal,
            start: 0,
            end: 4,
            text: "hello".to_owned(),
        }]
    );
    for offset in 0..5 {
        assert_eq!(span(&explanation, offset), Some((0, 4)));
    }
    assert_eq!(span(&explanation, 5), None);
}

#[test]
fn test_special_nodes_split_runs() {
    let explanation = parse_ok("ab\\dcd");
    let spans: Vec<_> = explanation
        .table()
        .entries()
        .iter()
        .map(|info| (info.kind, info.start, info.end))
        .collect();
    assert_eq!(
        spans,
        vec![
            (NodeKind::Literal, 0, 1),
            (NodeKind::Special, 2, 3),
            (NodeKind::Literal, 4, 5),
        ]
    );
    assert_eq!(
        explanation.lookup(3).map(|info| info.text.as_str()),
        Some("Any digit ")
    );
}

#[test]
fn test_escaped_literals_coalesce() {
    let explanation = parse_ok("a\\.b");
    assert_eq!(explanation.table().entries().len(), 1);
    assert_eq!(explanation.lookup(2).map(|info| info.text.as_str()), Some("a.b"));
}

#[test]
fn test_group_entry_encloses_children() {
    let explanation = parse_ok("x(ab)y");
    assert_eq!(span(&explanation, 0), Some((0, 0)));
    assert_eq!(span(&explanation, 1), Some((1, 4)));
    assert_eq!(span(&explanation, 2), Some((2, 3)));
    assert_eq!(span(&explanation, 3), Some((2, 3)));
    assert_eq!(span(&explanation, 4), Some((1, 4)));
    assert_eq!(span(&explanation, 5), Some((5, 5)));

    let group = explanation.lookup(1).expect("group entry");
    assert_eq!(group.kind, NodeKind::Group);
    assert_eq!(group.text, "Capture\r\n  ab\r\nEnd Capture");
}

#[test]
fn test_group_starts_a_fresh_run() {
    // The `b` inside the group must not extend the `a` before it.
    let explanation = parse_ok("a(b)");
    assert_eq!(span(&explanation, 0), Some((0, 0)));
    assert_eq!(span(&explanation, 2), Some((2, 2)));
}

#[test]
fn test_alternation_entry() {
    let explanation = parse_ok("a|b");
    let info = explanation.lookup(1).expect("alternation entry");
    assert_eq!(info.kind, NodeKind::Alternation);
    assert_eq!(info.text, "or");
    assert_eq!(span(&explanation, 2), Some((2, 2)));
}

#[test]
fn test_conditional_entries() {
    let explanation = parse_ok("(?(a)b|c)");
    assert_eq!(span(&explanation, 3), Some((3, 3)));
    assert_eq!(span(&explanation, 5), Some((5, 5)));
    assert_eq!(span(&explanation, 6), Some((6, 6)));
    assert_eq!(span(&explanation, 7), Some((7, 7)));
    assert_eq!(
        explanation.lookup(4).map(|info| info.kind),
        Some(NodeKind::Conditional)
    );
    assert_eq!(span(&explanation, 2), Some((2, 7)));
    assert_eq!(span(&explanation, 8), Some((0, 8)));
}

#[test]
fn test_class_and_quantifier_entries() {
    let explanation = parse_ok("[abc]{2,3}?");
    assert_eq!(span(&explanation, 2), Some((0, 4)));
    assert_eq!(span(&explanation, 7), Some((5, 10)));
    assert_eq!(
        explanation.lookup(10).map(|info| info.text.as_str()),
        Some("At least 2, but not more than 3 times (non-greedy)")
    );
}

#[test]
fn test_inline_options_entry() {
    let explanation = parse_ok("(?i)a");
    assert_eq!(span(&explanation, 2), Some((0, 3)));
    assert_eq!(span(&explanation, 4), Some((4, 4)));
}

#[test]
fn test_skipped_glyphs_are_not_covered() {
    let options = Options::new().with_ignore_whitespace(true);
    let explanation = parse("  a b #c\nd", options).expect("parses");
    assert_eq!(span(&explanation, 0), None);
    assert_eq!(span(&explanation, 2), Some((2, 2)));
    assert_eq!(span(&explanation, 3), None);
    assert_eq!(span(&explanation, 4), Some((4, 4)));
    assert_eq!(span(&explanation, 7), None);
    assert_eq!(span(&explanation, 9), Some((9, 9)));
}

#[test]
fn test_lookup_is_minimal_for_every_offset() {
    let pattern = "^(?<a>x(y|z)+)\\d{2}[q]$";
    let explanation = parse_ok(pattern);
    let entries = explanation.table().entries();

    for offset in 0..pattern.chars().count() {
        let found = lookup(explanation.table(), offset).expect("every glyph is consumed");
        assert!(found.contains(offset));
        let smallest = entries
            .iter()
            .filter(|info| info.contains(offset))
            .map(SpanInfo::width)
            .min();
        assert_eq!(Some(found.width()), smallest);
    }
}

#[test]
fn test_offsets_count_glyphs() {
    let explanation = parse_ok("é(ü)");
    assert_eq!(span(&explanation, 0), Some((0, 0)));
    assert_eq!(span(&explanation, 2), Some((2, 2)));
    assert_eq!(span(&explanation, 3), Some((1, 3)));
}
