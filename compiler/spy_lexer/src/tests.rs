#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().iter().map(|t| t.kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    lex(source)
        .unwrap()
        .iter()
        .map(|t| t.lexeme.clone())
        .collect()
}

#[test]
fn empty_source_is_just_eos() {
    assert_eq!(kinds(""), vec![TokenKind::Eos]);
    assert_eq!(kinds("   \n\t\n"), vec![TokenKind::Eos]);
}

#[test]
fn assignment_statement() {
    assert_eq!(
        kinds("x = 5"),
        vec![TokenKind::Ident, TokenKind::Assign, TokenKind::Int, TokenKind::Eos]
    );
    assert_eq!(lexemes("x = 5"), vec!["x", "=", "5", ""]);
}

#[test]
fn print_call() {
    assert_eq!(
        kinds("print(x, 'a')"),
        vec![
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Str,
            TokenKind::RParen,
            TokenKind::Eos,
        ]
    );
}

#[test]
fn all_operators() {
    assert_eq!(
        kinds("+ - * / % ** < <= > >= == != ="),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::StarStar,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Assign,
            TokenKind::Eos,
        ]
    );
}

#[test]
fn longest_operator_wins_without_spaces() {
    assert_eq!(
        kinds("a**b<=c"),
        vec![
            TokenKind::Ident,
            TokenKind::StarStar,
            TokenKind::Ident,
            TokenKind::LtEq,
            TokenKind::Ident,
            TokenKind::Eos,
        ]
    );
}

#[test]
fn string_lexeme_drops_quotes_verbatim() {
    let toks = lex(r#"s = "a b\n" t = 'x'"#).unwrap();
    assert_eq!(toks.get(2).unwrap().kind, TokenKind::Str);
    assert_eq!(toks.get(2).unwrap().lexeme, r"a b\n");
    assert_eq!(toks.get(5).unwrap().lexeme, "x");
}

#[test]
fn empty_string_literal() {
    let toks = lex(r#"s = """#).unwrap();
    assert_eq!(toks.get(2).unwrap().kind, TokenKind::Str);
    assert_eq!(toks.get(2).unwrap().lexeme, "");
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("# header\nx = 1 # trailing\n"),
        vec![TokenKind::Ident, TokenKind::Assign, TokenKind::Int, TokenKind::Eos]
    );
}

#[test]
fn tracks_line_and_column() {
    let toks = lex("x = 1\n  print(x)").unwrap();
    let print = toks.get(3).unwrap();
    assert_eq!(print.lexeme, "print");
    assert_eq!((print.line, print.column), (2, 3));
    assert_eq!(print.span, Span::new(8, 13));
}

#[test]
fn unexpected_character() {
    let err = lex("x = 1 $").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('$'));
    assert_eq!((err.line, err.column), (1, 7));
}

#[test]
fn lone_bang_is_rejected() {
    let err = lex("a ! b").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('!'));
}

#[test]
fn unterminated_string() {
    let err = lex("s = \"abc\nprint(s)").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.line, 1);
}

#[test]
fn error_message_names_position() {
    let err = lex("\n  @").unwrap_err();
    assert_eq!(err.to_string(), "unexpected character '@' at line 2, column 3");
}

proptest! {
    #[test]
    fn integer_literals_keep_their_digits(n in 0u64..u64::MAX) {
        let src = n.to_string();
        let toks = lex(&src).unwrap();
        prop_assert_eq!(toks.get(0).unwrap().kind, TokenKind::Int);
        prop_assert_eq!(&toks.get(0).unwrap().lexeme, &src);
    }

    #[test]
    fn identifiers_round_trip(name in "[a-z_][a-z0-9_]{0,12}") {
        let toks = lex(&name).unwrap();
        prop_assert_eq!(toks.get(0).unwrap().kind, TokenKind::Ident);
        prop_assert_eq!(&toks.get(0).unwrap().lexeme, &name);
        prop_assert_eq!(toks.len(), 2);
    }
}
