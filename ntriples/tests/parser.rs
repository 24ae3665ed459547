use std::collections::HashSet;
use tern_api::model::{Term, Triple};
use tern_api::vocab;
use tern_ntriples::{is_ascii_char, NTriplesError, NTriplesParser};

fn parse(input: &str) -> Result<HashSet<Triple>, NTriplesError> {
    NTriplesParser::from_str(input)?.parse()
}

fn parse_one(input: &str) -> Triple {
    let triples = parse(input).unwrap();
    assert_eq!(1, triples.len());
    triples.into_iter().next().unwrap()
}

#[test]
fn simple_statement() {
    let triple = parse_one("<http://a> <http://b> \"x\" .\n");
    assert_eq!(Term::iri("http://a").unwrap(), triple.subject);
    assert_eq!(Term::iri("http://b").unwrap(), triple.predicate);
    assert_eq!(Term::simple("x"), triple.object);
    assert!(triple.object.is_ordinary_string());
}

#[test]
fn duplicate_statements_collapse() {
    let triples = parse(
        "<http://a> <http://b> <http://c> .\n\
         <http://a> <http://b> <http://c> .\n\
         <http://a> <http://b> <http://d> .\n",
    )
    .unwrap();
    assert_eq!(2, triples.len());
}

#[test]
fn blank_node_labels_resolve_to_the_same_term() {
    let triple = parse_one("_:n1 <http://b> _:n1 .\n");
    assert_eq!(triple.subject, triple.object);
    assert!(triple.subject.is_blank());
    assert_eq!(Term::blank("n1").unwrap(), triple.subject);
}

#[test]
fn blank_node_scope_is_per_parser() {
    let first = parse_one("_:n1 <http://b> \"x\" .\n");
    let second = parse_one("_:n1 <http://b> \"x\" .\n");
    // Fresh registries, but the labels make the terms structurally equal.
    assert_eq!(first.subject, second.subject);
}

#[test]
fn distinct_blank_node_labels_stay_distinct() {
    let triple = parse_one("_:n1 <http://b> _:n2 .\n");
    assert_ne!(triple.subject, triple.object);
}

#[test]
fn iri_requires_a_scheme_separator() {
    assert!(parse("<noscheme> <http://b> <http://c> .\n").is_err());
    assert!(parse("<> <http://b> <http://c> .\n").is_err());
    assert!(parse("<http://a> <http://b> <nocolon> .\n").is_err());
}

#[test]
fn escaped_colon_satisfies_the_scheme_separator() {
    let triple = parse_one("<a\\u003Ab> <http://b> <http://c> .\n");
    assert!(triple.subject.is_iri("a:b"));
}

#[test]
fn raw_angle_bracket_in_iri_fails() {
    assert!(parse("<http://a<b> <http://b> <http://c> .\n").is_err());
}

#[test]
fn raw_space_and_controls_in_iri_fail() {
    assert!(parse("<http://a b> <http://b> <http://c> .\n").is_err());
    assert!(parse("<http://a\tb> <http://b> <http://c> .\n").is_err());
}

#[test]
fn escaped_greater_than_is_allowed_in_iri() {
    let triple = parse_one("<http://a/\\u003E> <http://b> <http://c> .\n");
    assert!(triple.subject.is_iri("http://a/>"));
    // The canonical form percent-escapes it.
    assert_eq!("<http://a/%3E>", triple.subject.to_string());
}

#[test]
fn escaped_forbidden_characters_stay_forbidden_in_iri() {
    // Decoded quote, DEL and tab are all outside the allowed IRI set.
    assert!(parse("<http://a\\u0022> <http://b> <http://c> .\n").is_err());
    assert!(parse("<http://a\\u007F> <http://b> <http://c> .\n").is_err());
    assert!(parse("<http://a\\t> <http://b> <http://c> .\n").is_err());
}

#[test]
fn raw_quote_in_literal_fails() {
    assert!(parse("<http://a> <http://b> \"x\"y\" .\n").is_err());
}

#[test]
fn short_escapes_in_literal() {
    let triple = parse_one("<http://a> <http://b> \"a\\tb\\nc\\r\\\"\\\\\" .\n");
    assert_eq!(Term::simple("a\tb\nc\r\"\\"), triple.object);
}

#[test]
fn unknown_escape_letter_fails() {
    assert!(parse("<http://a> <http://b> \"\\x\" .\n").is_err());
    // \n and friends are only valid inside literal bodies.
    assert!(parse("<http://a\\n:> <http://b> <http://c> .\n").is_err());
}

#[test]
fn broken_hex_digits_fail() {
    assert!(parse("<http://a> <http://b> \"\\u12G4\" .\n").is_err());
    assert!(parse("<http://a> <http://b> \"\\u123\" .\n").is_err());
    // \U must start with the fixed 00 prefix.
    assert!(parse("<http://a> <http://b> \"\\U10000000\" .\n").is_err());
}

#[test]
fn lone_surrogate_escape_fails() {
    assert!(parse("<http://a> <http://b> \"\\uD800\" .\n").is_err());
    assert!(parse("<http://a> <http://b> \"\\uDFFF\" .\n").is_err());
}

#[test]
fn bmp_escape_round_trips() {
    let triple = parse_one("<http://a> <http://b> \"caf\\u00e9\"@en .\n");
    assert_eq!(Term::lang_string("caf\u{e9}", "en").unwrap(), triple.object);
    assert_eq!("\"caf\\u00E9\"@en", triple.object.to_string());
}

#[test]
fn supplementary_plane_escape_round_trips() {
    let triple = parse_one("<http://a> <http://b> \"\\U00010000\" .\n");
    assert_eq!(Term::simple("\u{10000}"), triple.object);
    assert_eq!("\"\\U00010000\"", triple.object.to_string());
}

#[test]
fn typed_literal() {
    let triple = parse_one("<http://a> <http://b> \"x\"^^<http://d:t> .\n");
    assert_eq!(Term::typed_string("x", "http://d:t").unwrap(), triple.object);
}

#[test]
fn boolean_literals_match_the_well_known_terms() {
    let triple =
        parse_one("<http://a> <http://b> \"true\"^^<http://www.w3.org/2001/XMLSchema#boolean> .\n");
    assert_eq!(*vocab::TRUE, triple.object);
    assert_ne!(*vocab::FALSE, triple.object);
}

#[test]
fn single_caret_fails() {
    assert!(parse("<http://a> <http://b> \"x\"^<http://d:t> .\n").is_err());
}

#[test]
fn datatype_must_be_an_iri_reference() {
    assert!(parse("<http://a> <http://b> \"x\"^^\"y\" .\n").is_err());
    assert!(parse("<http://a> <http://b> \"x\"^^_:d .\n").is_err());
}

#[test]
fn language_tags() {
    let triple = parse_one("<http://a> <http://b> \"x\"@en-us-a1 .\n");
    assert_eq!(Term::lang_string("x", "en-us-a1").unwrap(), triple.object);
}

#[test]
fn uppercase_language_tag_is_rejected() {
    assert!(parse("<http://a> <http://b> \"x\"@EN .\n").is_err());
}

#[test]
fn malformed_language_tags_fail() {
    assert!(parse("<http://a> <http://b> \"x\"@ .\n").is_err());
    assert!(parse("<http://a> <http://b> \"x\"@en- .\n").is_err());
    assert!(parse("<http://a> <http://b> \"x\"@en--us .\n").is_err());
    assert!(parse("<http://a> <http://b> \"x\"@-en .\n").is_err());
    assert!(parse("<http://a> <http://b> \"x\"@1en .\n").is_err());
}

#[test]
fn blank_node_labels_are_ascii_alphanumeric() {
    assert_eq!(
        Term::blank("n1A").unwrap(),
        parse_one("_:n1A <http://b> <http://c> .\n").subject
    );
    assert!(parse("_:1n <http://b> <http://c> .\n").is_err());
    assert!(parse("_: <http://b> <http://c> .\n").is_err());
    assert!(parse("_n <http://b> <http://c> .\n").is_err());
}

#[test]
fn literals_are_forbidden_in_subject_and_predicate_position() {
    assert!(parse("\"x\" <http://b> <http://c> .\n").is_err());
    assert!(parse("<http://a> \"x\" <http://c> .\n").is_err());
    assert!(parse("<http://a> _:b <http://c> .\n").is_err());
}

#[test]
fn missing_period_fails() {
    assert!(parse("<http://a> <http://b> <http://c>\n").is_err());
}

#[test]
fn missing_final_line_break_fails() {
    assert!(parse("<http://a> <http://b> <http://c> .").is_err());
}

#[test]
fn missing_inter_token_whitespace_fails() {
    assert!(parse("<http://a><http://b> <http://c> .\n").is_err());
    assert!(parse("<http://a> <http://b><http://c> .\n").is_err());
}

#[test]
fn whitespace_around_period_is_optional() {
    assert_eq!(1, parse("<http://a> <http://b> <http://c>.\n").unwrap().len());
    assert_eq!(
        1,
        parse("<http://a>\t \t<http://b> <http://c> \t. \n").unwrap().len()
    );
}

#[test]
fn comments_are_ignored() {
    let triples = parse("# comment\n<http://a> <http://b> <http://c> .\n").unwrap();
    assert_eq!(1, triples.len());
}

#[test]
fn comment_with_control_character_fails() {
    assert!(parse("# bad\u{1}comment\n").is_err());
}

#[test]
fn unterminated_comment_fails() {
    assert!(parse("# no line break").is_err());
}

#[test]
fn line_ending_variants() {
    assert_eq!(1, parse("<http://a> <http://b> <http://c> .\r\n").unwrap().len());
    assert_eq!(1, parse("<http://a> <http://b> <http://c> .\r").unwrap().len());
    assert_eq!(
        2,
        parse("<http://a> <http://b> <http://c> .\r\r<http://a> <http://b> <http://d> .\r")
            .unwrap()
            .len()
    );
}

#[test]
fn blank_lines_and_whitespace_only_documents() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("\n\n \t\r\n# only a comment\n").unwrap().is_empty());
}

#[test]
fn unterminated_tokens_fail() {
    assert!(parse("<http://a> <http://b> <http://c").is_err());
    assert!(parse("<http://a> <http://b> \"x").is_err());
}

#[test]
fn non_ascii_bytes_are_an_encoding_error() {
    let input = "<http://a> <http://b> \"caf\u{e9}\" .\n";
    let result = NTriplesParser::new(input.as_bytes()).and_then(|p| p.parse());
    assert!(result.is_err());
}

#[test]
fn errors_carry_a_position() {
    let error = parse("<http://a> <http://b> <http://c>\n").unwrap_err();
    let position = error.textual_position().unwrap();
    assert_eq!(1, position.line_number());
}

#[test]
fn ascii_char_helper() {
    assert!(is_ascii_char(b'<', "<\"{}|^`"));
    assert!(is_ascii_char(b'`', "<\"{}|^`"));
    assert!(!is_ascii_char(b'>', "<\"{}|^`"));
    assert!(!is_ascii_char(0x80, ""));
}
