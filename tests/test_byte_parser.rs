use coordswap::parser::{ByteParser, ParsingErrorType};

#[test]
fn test_skip_whitespace() {
    let mut parser = ByteParser::for_str(" \r  \t\n \t x y");
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'x'));

    parser.next_byte(); // skip x
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'y'));
}

#[test]
fn test_consume_if() {
    let mut parser = ByteParser::for_str("(NP)");
    assert!(!parser.consume_if(b')'));
    assert!(parser.consume_if(b'('));
    assert_eq!(parser.position(), 1);
    assert!(parser.peek_is(b'N'));
    assert!(!parser.peek_is(b'n'));
}

#[test]
fn test_parse_token_stops_at_delimiters() {
    let delimiters = b"() \t\n\r";
    let mut parser = ByteParser::for_str("NNS cats)");
    assert_eq!(parser.parse_token(delimiters).unwrap(), "NNS");
    parser.skip_whitespace();
    assert_eq!(parser.parse_token(delimiters).unwrap(), "cats");
    assert_eq!(parser.peek(), Some(b')'));
    assert_eq!(parser.parse_token(delimiters).unwrap(), "");
}

#[test]
fn test_parse_token_until_eof() {
    let mut parser = ByteParser::for_str("last");
    assert_eq!(parser.parse_token(b"()").unwrap(), "last");
    assert!(parser.is_eof());
}

#[test]
fn test_parse_token_utf8() {
    let mut parser = ByteParser::for_str("Zürich) ");
    assert_eq!(parser.parse_token(b"() ").unwrap(), "Zürich");
    assert_eq!(parser.peek(), Some(b')'));
}

#[test]
fn test_parse_token_invalid_utf8() {
    let mut parser = ByteParser::for_bytes(&[b'a', 0xff, b'b', b')']);
    let err = parser.parse_token(b")").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::InvalidEncoding);
}

#[test]
fn test_context_as_string() {
    let mut parser = ByteParser::for_str("(S (NP (PRP It)))");
    parser.next_byte();
    assert_eq!(parser.get_context_as_string(5), "S (NP");
    assert_eq!(parser.get_context_as_string(100), "S (NP (PRP It)))");
}
