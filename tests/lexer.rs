use rexplain::{
    GroupKind, InlineOption, OptionFlag,
    ast::Lookaround,
    lexer::{self, Opener},
};
use rstest::rstest;

fn glyphs(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn recognize(rest: &str) -> Option<Opener> {
    lexer::recognize(&glyphs(rest))
}

#[rstest]
#[case("?<name>abc)", GroupKind::Named("name".to_owned()), 7)]
#[case("?'name'abc)", GroupKind::Named("name".to_owned()), 7)]
#[case("?<a1-b_2>x)", GroupKind::Balancing("a1".to_owned(), "b_2".to_owned()), 9)]
#[case("?:abc)", GroupKind::NonCapturing, 2)]
#[case("?=x)", GroupKind::Lookaround(Lookaround::PositiveLookahead), 2)]
#[case("?!x)", GroupKind::Lookaround(Lookaround::NegativeLookahead), 2)]
#[case("?<=x)", GroupKind::Lookaround(Lookaround::PositiveLookbehind), 3)]
#[case("?<!x)", GroupKind::Lookaround(Lookaround::NegativeLookbehind), 3)]
#[case("?>x)", GroupKind::NonBacktracking, 2)]
#[case("?(c)y|n)", GroupKind::Conditional, 1)]
fn test_openers_with_body(#[case] rest: &str, #[case] kind: GroupKind, #[case] len: usize) {
    assert_eq!(
        recognize(rest),
        Some(Opener {
            kind,
            len,
            has_body: true,
        })
    );
}

#[test]
fn test_inline_options_forms() {
    let ignore_case = GroupKind::Options(vec![InlineOption::new(OptionFlag::IgnoreCase, true)]);

    assert_eq!(
        recognize("?i)abc"),
        Some(Opener {
            kind: ignore_case.clone(),
            len: 3,
            has_body: false,
        })
    );
    assert_eq!(
        recognize("?i:)abc"),
        Some(Opener {
            kind: ignore_case.clone(),
            len: 4,
            has_body: false,
        })
    );
    assert_eq!(
        recognize("?i:abc)"),
        Some(Opener {
            kind: ignore_case,
            len: 3,
            has_body: true,
        })
    );
}

#[test]
fn test_inline_options_minus_turns_off_the_rest() {
    assert_eq!(
        recognize("?s-mx)").map(|opener| opener.kind),
        Some(GroupKind::Options(vec![
            InlineOption::new(OptionFlag::Singleline, true),
            InlineOption::new(OptionFlag::Multiline, false),
            InlineOption::new(OptionFlag::IgnoreWhitespace, false),
        ]))
    );
}

#[test]
fn test_named_capture_wins_over_balancing() {
    // A plain name never contains `-`, so the two forms never overlap.
    assert!(matches!(
        recognize("?<a>x)").map(|opener| opener.kind),
        Some(GroupKind::Named(_))
    ));
    assert!(matches!(
        recognize("?<a-b>x)").map(|opener| opener.kind),
        Some(GroupKind::Balancing(..))
    ));
}

#[rstest]
#[case("?")]
#[case("?z)")]
#[case("?<>x)")]
#[case("?<a-")]
#[case("?#comment)")]
#[case("?P<name>x)")]
fn test_unrecognized_openers(#[case] rest: &str) {
    assert_eq!(recognize(rest), None);
}

#[test]
fn test_escape_description_table() {
    assert_eq!(lexer::escape_description('d'), Some("Any digit "));
    assert_eq!(lexer::escape_description('q'), None);
    assert_eq!(lexer::escape_description('.'), None);
}
