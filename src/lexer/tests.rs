use super::Lexer;
use crate::token::TokenKind;

fn kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn tokenizes_keywords_and_identifiers() {
    assert_eq!(
        kinds("int foo return"),
        vec![
            TokenKind::Int,
            TokenKind::Identifier("foo".to_string()),
            TokenKind::Return,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenizes_decimal_hex_and_binary_literals() {
    assert_eq!(
        kinds("10 0x1F 0b101"),
        vec![
            TokenKind::IntLiteral(10),
            TokenKind::IntLiteral(31),
            TokenKind::IntLiteral(5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenizes_string_literal_with_escape_passthrough() {
    assert_eq!(
        kinds(r#""hi \"there\"""#),
        vec![
            TokenKind::StringLiteral(r#"hi \"there\""#.to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn unterminated_string_is_an_error() {
    let err = Lexer::new("\"abc").tokenize().unwrap_err();
    assert_eq!(err.line(), 1);
}

#[test]
fn skips_line_comments() {
    assert_eq!(
        kinds("int x; // a comment\nreturn x;"),
        vec![
            TokenKind::Int,
            TokenKind::Identifier("x".to_string()),
            TokenKind::Semicolon,
            TokenKind::Return,
            TokenKind::Identifier("x".to_string()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tracks_line_numbers_across_newlines() {
    let tokens = Lexer::new("int x;\nint y;").tokenize().unwrap();
    assert_eq!(tokens[0].line(), 1);
    let y_token = tokens.iter().find(|t| t.kind == TokenKind::Identifier("y".to_string())).unwrap();
    assert_eq!(y_token.line(), 2);
}

#[test]
fn longest_match_wins_for_compound_operators() {
    assert_eq!(
        kinds("<<= >> <= < &&"),
        vec![
            TokenKind::LessLessEqual,
            TokenKind::GreaterGreater,
            TokenKind::LessEqual,
            TokenKind::Less,
            TokenKind::AmpAmp,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unrecognised_character_is_an_error() {
    let err = Lexer::new("int x = 1 @ 2;").tokenize().unwrap_err();
    assert_eq!(err.line(), 1);
}
