use coordswap::bracket::{BracketParser, BracketStyle, parse_file, parse_str, to_bracketed};
use coordswap::model::Tree;
use coordswap::parser::{ByteParser, ParsingErrorType};
use std::io::Write;

const CAT_AND_DOG: &str =
    "(S (NP (NP (DT the) (NN cat)) (, ,) (CC and) (NP (DT the) (NN dog))) (VP (VBD ran)))";

// --- TESTS PARSING ---
#[test]
fn test_parse_structure() {
    let tree = parse_str(CAT_AND_DOG).unwrap();
    assert_eq!(tree.label(), "S");
    assert_eq!(tree.children().len(), 2);

    let np = &tree.children()[0];
    assert_eq!(np.label(), "NP");
    let labels: Vec<&str> = np.children().iter().map(Tree::label).collect();
    assert_eq!(labels, vec!["NP", ",", "CC", "NP"]);

    // Comma node holds comma token
    assert_eq!(np.children()[1].children(), &[Tree::leaf(",")]);
    assert_eq!(tree.leaves(), vec!["the", "cat", ",", "and", "the", "dog", "ran"]);
}

#[test]
fn test_round_trip_single_line() {
    let tree = parse_str(CAT_AND_DOG).unwrap();
    assert_eq!(tree.to_bracketed(), CAT_AND_DOG);
}

#[test]
fn test_whitespace_and_newlines_normalized() {
    let input = "(S\n  (NP (PRP It))\n\t(VP   (VBD rained) ) )\r\n";
    let tree = parse_str(input).unwrap();
    assert_eq!(tree.to_bracketed(), "(S (NP (PRP It)) (VP (VBD rained)))");
}

#[test]
fn test_whitespace_before_label() {
    let tree = parse_str("( NP (NN cat))").unwrap();
    assert_eq!(tree.label(), "NP");
}

#[test]
fn test_empty_root_label() {
    let tree = parse_str("( (S (NP (PRP It)) (VP (VBD rained))) )").unwrap();
    assert_eq!(tree.label(), "");
    assert_eq!(tree.children()[0].label(), "S");
    assert_eq!(tree.to_bracketed(), "( (S (NP (PRP It)) (VP (VBD rained))))");
}

#[test]
fn test_unwrapped_root() {
    let mut byte_parser = ByteParser::for_str("( (S (NP (PRP It)) (VP (VBD rained))) )");
    let tree = BracketParser::new()
        .with_unwrapped_root()
        .parse_tree(&mut byte_parser)
        .unwrap();
    assert_eq!(tree.to_bracketed(), "(S (NP (PRP It)) (VP (VBD rained)))");

    // Labeled root is kept
    let mut byte_parser = ByteParser::for_str("(ROOT (S (VP (VB Go))))");
    let tree = BracketParser::new()
        .with_unwrapped_root()
        .parse_tree(&mut byte_parser)
        .unwrap();
    assert_eq!(tree.label(), "ROOT");
}

#[test]
fn test_node_without_children() {
    let tree = parse_str("(X)").unwrap();
    assert_eq!(tree, Tree::node("X", vec![]));
    assert_eq!(tree.to_bracketed(), "(X )");
    assert_eq!(parse_str("(X )").unwrap(), tree);
}

#[test]
fn test_unicode_words() {
    let tree = parse_str("(NP (NP (NNP Zürich)) (CC und) (NP (NNP Genève)))").unwrap();
    assert_eq!(tree.leaves(), vec!["Zürich", "und", "Genève"]);
    assert_eq!(tree.to_bracketed(), "(NP (NP (NNP Zürich)) (CC und) (NP (NNP Genève)))");
}

// --- TESTS MALFORMED INPUT ---
fn error_kind(input: &str) -> ParsingErrorType {
    parse_str(input).unwrap_err().kind().clone()
}

#[test]
fn test_empty_input() {
    assert_eq!(error_kind(""), ParsingErrorType::EmptyInput);
    assert_eq!(error_kind("  \n\t"), ParsingErrorType::EmptyInput);
}

#[test]
fn test_unclosed_bracket() {
    assert_eq!(error_kind("(S (NP (NN cat))"), ParsingErrorType::UnexpectedEOF);
    assert_eq!(error_kind("("), ParsingErrorType::UnexpectedEOF);
}

#[test]
fn test_stray_closing_bracket() {
    assert_eq!(error_kind("(S (NP (NN cat))))"), ParsingErrorType::UnexpectedClosingBracket);
    assert_eq!(error_kind(")"), ParsingErrorType::UnexpectedClosingBracket);
}

#[test]
fn test_missing_opening_bracket() {
    assert_eq!(error_kind("cat"), ParsingErrorType::MissingOpeningBracket);
}

#[test]
fn test_trailing_content() {
    assert_eq!(error_kind("(NN cat) dog"), ParsingErrorType::TrailingContent);
    assert_eq!(error_kind("(NN cat) (NN dog)"), ParsingErrorType::TrailingContent);
}

#[test]
fn test_error_position_and_message() {
    let err = parse_str("(S (NP (NN cat))))").unwrap_err();
    assert_eq!(err.position(), 17);
    let message = err.to_string();
    assert!(message.starts_with("Unbalanced ')' at position 17"));
    assert!(message.contains("Context"));
}

#[test]
fn test_missing_label_below_root() {
    assert_eq!(error_kind("(NP ( (NN x)))"), ParsingErrorType::MissingLabel);
    assert_eq!(error_kind("(S (NP (NN x)) ( ))"), ParsingErrorType::MissingLabel);
    // Root alone may be unlabeled
    assert!(parse_str("( (NN x))").is_ok());
}

/// Chain of `depth` nested brackets: `depth - 1` NP nodes around `(NN x)`
fn nested(depth: usize) -> String {
    format!("{}(NN x){}", "(NP ".repeat(depth - 1), ")".repeat(depth - 1))
}

#[test]
fn test_max_depth_default() {
    assert_eq!(BracketParser::new().max_depth(), 500);
    assert!(parse_str(nested(500)).is_ok());
    assert_eq!(error_kind(&nested(501)), ParsingErrorType::TooDeep(500));

    // Far beyond the limit fails cleanly instead of exhausting the stack
    let err = parse_str(nested(200_000)).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::TooDeep(500));
    assert_eq!(err.position(), 500 * 4);
    assert!(err.to_string().starts_with("Tree nested deeper than 500 levels"));
}

#[test]
fn test_max_depth_configured() {
    let parser = BracketParser::new().with_max_depth(3);
    let tree = parser
        .parse_tree(&mut ByteParser::for_str("(S (NP (NN x)))"))
        .unwrap();
    assert_eq!(tree.leaves(), vec!["x"]);

    let err = parser
        .parse_tree(&mut ByteParser::for_str("(S (NP (NP (NN x))))"))
        .unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::TooDeep(3));
}

// --- TESTS MULTIPLE TREES ---
#[test]
fn test_parse_all() {
    let input = "(NP (NN cat))\n(NP (NN dog))\n\n  (NP (NN bird))\n";
    let trees = BracketParser::new().parse_all(ByteParser::for_str(input)).unwrap();
    assert_eq!(trees.len(), 3);
    assert_eq!(trees[2].leaves(), vec!["bird"]);

    let trees = BracketParser::new().parse_all(ByteParser::for_str(" \n ")).unwrap();
    assert!(trees.is_empty());
}

#[test]
fn test_iterator_stops_after_error() {
    let input = "(NP (NN cat)) (NP (NN dog) (NP (NN bird))";
    let mut iter = BracketParser::new().into_iter(ByteParser::for_str(input));
    assert!(iter.next().unwrap().is_ok());
    assert_eq!(
        iter.next().unwrap().unwrap_err().kind(),
        &ParsingErrorType::UnexpectedEOF
    );
    assert!(iter.next().is_none());
}

#[test]
fn test_iterator_lazy() {
    let input = "(A a) (B b) (C c)";
    let labels: Vec<String> = BracketParser::new()
        .into_iter(ByteParser::for_str(input))
        .map(|tree| tree.unwrap().label().to_string())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
}

#[test]
fn test_parse_file() {
    let path = std::env::temp_dir().join(format!("coordswap-test-{}.mrg", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{CAT_AND_DOG}").unwrap();
    writeln!(file, "( (S (NP (PRP It)) (VP (VBD rained))) )").unwrap();
    drop(file);

    let trees = parse_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(trees.len(), 2);
    assert_eq!(trees[0].to_bracketed(), CAT_AND_DOG);
}

#[test]
fn test_parse_missing_file() {
    let err = parse_file("does/not/exist.mrg").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}

// --- TESTS WRITING ---
#[test]
fn test_indented_style() {
    let tree = parse_str(CAT_AND_DOG).unwrap();
    let indented = to_bracketed(&tree, &BracketStyle::Indented { margin: 30 });
    let expected = "(S\n  (NP\n    (NP (DT the) (NN cat))\n    (, ,)\n    (CC and)\n    (NP (DT the) (NN dog)))\n  (VP (VBD ran)))";
    assert_eq!(indented, expected);

    // Indented output parses back to the same tree
    assert_eq!(parse_str(&indented).unwrap(), tree);
}

#[test]
fn test_default_style_is_single_line() {
    assert_eq!(BracketStyle::default(), BracketStyle::SingleLine);
    let tree = parse_str(CAT_AND_DOG).unwrap();
    assert!(!to_bracketed(&tree, &BracketStyle::default()).contains('\n'));
}
