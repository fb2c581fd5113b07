use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_token_range() {
    let token = Token::new(TokenKind::Identifier, 4, 3);
    assert_eq!(token.range(), Some(4..7));

    let empty = Token::new(TokenKind::Punctuator, 9, 0);
    assert_eq!(empty.range(), Some(9..9));
}

#[test]
fn test_token_debug() {
    let token = Token::new(TokenKind::String, 10, 5);
    assert_eq!(format!("{token:?}"), "String @ 10+5");
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::HexInteger.to_string(), "hex integer");
    assert_eq!(TokenKind::Keyword.to_string(), "keyword");
}
