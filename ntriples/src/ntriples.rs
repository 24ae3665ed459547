//! Implementation of the N-Triples RDF syntax

use crate::error::{NTriplesError, NTriplesErrorKind};
use crate::utils::{AsciiLineReader, LookAheadByteRead, EOF};
use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use tern_api::model::{Term, Triple};

/// A strict [N-Triples](https://www.w3.org/TR/n-triples/) parser.
///
/// It consumes a whole document and returns the set of its triples:
/// statements repeating the same fact collapse to a single entry. The first
/// grammar violation aborts the parse with no partial result.
///
/// Blank node labels are scoped to one parser instance: the same label always
/// resolves to the same term within one document, and a new document requires
/// a new parser to get fresh blank node identities.
///
/// ```
/// use tern_ntriples::NTriplesParser;
/// use tern_api::vocab;
///
/// let file = b"<http://example.com/foo> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .
/// <http://example.com/foo> <http://schema.org/name> \"Foo\" .
/// ";
///
/// let triples = NTriplesParser::new(file.as_ref())?.parse()?;
/// assert_eq!(2, triples.len());
/// assert!(triples.iter().any(|t| t.predicate == *vocab::A));
/// # std::io::Result::Ok(())
/// ```
pub struct NTriplesParser<R: BufRead> {
    read: AsciiLineReader<R>,
    bnode_labels: HashMap<String, Term>,
}

impl<R: BufRead> NTriplesParser<R> {
    /// Builds a parser reading from a byte source through a strict US-ASCII
    /// decoder: any byte outside the 7-bit range is an encoding error, not a
    /// grammar error.
    pub fn new(reader: R) -> Result<Self, NTriplesError> {
        Ok(Self {
            read: AsciiLineReader::new(reader)?,
            bnode_labels: HashMap::default(),
        })
    }

    /// Parses the complete document and returns its set of triples.
    ///
    /// The parser is consumed: its blank node registry must not leak into
    /// another document.
    pub fn parse(mut self) -> Result<HashSet<Triple>, NTriplesError> {
        let mut triples = HashSet::default();
        loop {
            self.skip_whitespace()?;
            match self.read.current() {
                EOF => return Ok(triples),
                b'#' => self.skip_comment()?,
                b'\n' | b'\r' => self.end_of_line()?,
                _ => {
                    let triple = self.read_triple()?;
                    triples.insert(triple);
                }
            }
        }
    }

    /// Reads one statement: subject, predicate, object, terminating period
    /// and line break.
    fn read_triple(&mut self) -> Result<Triple, NTriplesError> {
        let subject = self.read_term(false)?;
        self.require_whitespace()?;

        self.read.check_is_current(b'<')?;
        let predicate = Term::iri(self.read_iri_reference()?)?;
        self.require_whitespace()?;

        let object = self.read_term(true)?;
        self.skip_whitespace()?;

        self.read.check_is_current(b'.')?;
        self.read.consume()?;
        self.skip_whitespace()?;
        self.end_of_line()?;

        Ok(Triple {
            subject,
            predicate,
            object,
        })
    }

    /// Reads an IRI reference, blank node label or, in object position only,
    /// a quoted literal.
    fn read_term(&mut self, accept_literal: bool) -> Result<Term, NTriplesError> {
        match self.read.current() {
            b'<' => Ok(Term::iri(self.read_iri_reference()?)?),
            b'"' if accept_literal => {
                let value = self.read_string_literal(b'"')?;
                self.finish_string_literal(value)
            }
            b'_' => {
                self.read.consume()?;
                self.read.check_is_current(b':')?;
                self.read.consume()?;
                let label = self.read_blank_node_label()?;
                self.blank_node(label)
            }
            _ => self.read.unexpected_char_error(),
        }
    }

    /// Resolves a fully read label against the per-document registry,
    /// creating and registering the blank node term on first sight.
    fn blank_node(&mut self, label: String) -> Result<Term, NTriplesError> {
        let term = match self.bnode_labels.get(&label) {
            Some(term) => term.clone(),
            None => {
                let term = Term::blank(label.clone())?;
                self.bnode_labels.insert(label, term.clone());
                term
            }
        };
        Ok(term)
    }

    // [154s] in the N-Triples grammar allows more punctuation; this reader
    // accepts the ASCII-only subset [A-Za-z][A-Za-z0-9]*.
    fn read_blank_node_label(&mut self) -> Result<String, NTriplesError> {
        let mut label = String::new();
        match self.read.current() {
            c if c.is_ascii_alphabetic() => label.push(char::from(c)),
            _ => return self.read.unexpected_char_error(),
        }
        loop {
            self.read.consume()?;
            match self.read.current() {
                c if c.is_ascii_alphanumeric() => label.push(char::from(c)),
                _ => return Ok(label),
            }
        }
    }

    // [8] 	IRIREF 	::= 	'<' ([^#x00-#x20<>"{}|^`\] | UCHAR)* '>'
    // with the additional requirements that the reference is non-empty and
    // contains a scheme separator, raw or escaped.
    fn read_iri_reference(&mut self) -> Result<String, NTriplesError> {
        self.read.check_is_current(b'<')?;
        let mut iri = String::new();
        let mut seen_colon = false;
        loop {
            self.read.consume()?;
            match self.read.current() {
                b'>' => {
                    self.read.consume()?;
                    return if iri.is_empty() || !seen_colon {
                        Err(self
                            .read
                            .parse_error(NTriplesErrorKind::InvalidIriReference))
                    } else {
                        Ok(iri)
                    };
                }
                b'\\' => {
                    self.read.consume()?;
                    let c = self.read_escape(false)?;
                    // Escaped '>' is fine, everything else of the raw
                    // forbidden set stays forbidden, as do the C1 controls.
                    if c <= '\u{20}'
                        || ('\u{7f}'..='\u{9f}').contains(&c)
                        || matches!(c, '<' | '"' | '{' | '}' | '|' | '\\' | '^' | '`')
                    {
                        return Err(self
                            .read
                            .parse_error(NTriplesErrorKind::InvalidCodePoint(c as u32)));
                    }
                    if c == ':' {
                        seen_colon = true;
                    }
                    iri.push(c);
                }
                b'"' => return self.read.unexpected_char_error(),
                c if c <= b' ' || c > b'~' => return self.read.unexpected_char_error(),
                b'<' | b'{' | b'}' | b'|' | b'^' | b'`' => {
                    return self.read.unexpected_char_error()
                }
                c => {
                    if c == b':' {
                        seen_colon = true;
                    }
                    iri.push(char::from(c));
                }
            }
        }
    }

    // [9] 	STRING_LITERAL_QUOTE 	::= 	'"' ([^#x22#x5C#xA#xD] | ECHAR | UCHAR)* '"'
    // restricted to printable ASCII outside of escapes. The terminating quote
    // is a parameter; the active grammar only ever closes on '"'.
    fn read_string_literal(&mut self, quote: u8) -> Result<String, NTriplesError> {
        self.read.check_is_current(quote)?;
        let mut value = String::new();
        loop {
            self.read.consume()?;
            match self.read.current() {
                c if c == quote => {
                    self.read.consume()?;
                    return Ok(value);
                }
                b'\\' => {
                    self.read.consume()?;
                    let c = self.read_escape(true)?;
                    value.push(c);
                }
                c if (0x20..=0x7E).contains(&c) => value.push(char::from(c)),
                _ => return self.read.unexpected_char_error(),
            }
        }
    }

    /// Resolves the literal suffix right after the closing quote: a language
    /// tag, a `^^<...>` datatype, or nothing, in which case the literal gets
    /// the default `xsd:string` datatype and the peeked byte is left for the
    /// statement parser.
    fn finish_string_literal(&mut self, value: String) -> Result<Term, NTriplesError> {
        match self.read.current() {
            b'@' => {
                let language = self.read_language_tag()?;
                Ok(Term::lang_string(value, language)?)
            }
            b'^' => {
                self.read.consume()?;
                self.read.check_is_current(b'^')?;
                self.read.consume()?;
                self.read.check_is_current(b'<')?;
                let datatype = self.read_iri_reference()?;
                Ok(Term::typed_string(value, datatype)?)
            }
            _ => Ok(Term::simple(value)),
        }
    }

    // Language tags are [a-z]+ ('-' [a-z0-9]+)*: lowercase only, and a
    // leading, trailing or doubled hyphen is a syntax error.
    fn read_language_tag(&mut self) -> Result<String, NTriplesError> {
        self.read.check_is_current(b'@')?;
        let mut tag = String::new();

        // [a-z]
        self.read.consume()?;
        match self.read.current() {
            c if c.is_ascii_lowercase() => tag.push(char::from(c)),
            _ => return self.read.unexpected_char_error(),
        }

        // [a-z]*
        loop {
            self.read.consume()?;
            match self.read.current() {
                c if c.is_ascii_lowercase() => tag.push(char::from(c)),
                b'-' => break, // follow-up subtags
                _ => return Ok(tag),
            }
        }

        // ('-' [a-z0-9]+)*
        loop {
            match self.read.current() {
                c if c.is_ascii_lowercase() || c.is_ascii_digit() => tag.push(char::from(c)),
                b'-' => match self.read.next() {
                    Some(n) if n.is_ascii_lowercase() || n.is_ascii_digit() => tag.push('-'),
                    _ => return self.read.unexpected_char_error(),
                },
                _ => return Ok(tag),
            }
            self.read.consume()?;
        }
    }

    /// Decodes one escape sequence with the reader positioned on the byte
    /// after the backslash. `\t` and the numeric `\uHHHH` / `\U00HHHHHH`
    /// forms are always recognized; `\n`, `\r`, `\\` and `\"` only inside
    /// string literal bodies. Values in the surrogate range are rejected.
    fn read_escape(&mut self, extended: bool) -> Result<char, NTriplesError> {
        match self.read.current() {
            b't' => Ok('\t'),
            b'n' if extended => Ok('\n'),
            b'r' if extended => Ok('\r'),
            b'\\' if extended => Ok('\\'),
            b'"' if extended => Ok('"'),
            b'u' => self.read_hex_char(4),
            b'U' => {
                self.read.consume()?;
                self.read.check_is_current(b'0')?;
                self.read.consume()?;
                self.read.check_is_current(b'0')?;
                self.read_hex_char(6)
            }
            _ => self.read.unexpected_char_error(),
        }
    }

    fn read_hex_char(&mut self, len: usize) -> Result<char, NTriplesError> {
        let mut value: u32 = 0;
        for _ in 0..len {
            self.read.consume()?;
            match hex_digit_value(self.read.current()) {
                Some(d) => value = value * 16 + u32::from(d),
                None => return self.read.unexpected_char_error(),
            }
        }
        char::from_u32(value)
            .ok_or_else(|| self.read.parse_error(NTriplesErrorKind::InvalidCodePoint(value)))
    }

    /// Consumes `\t` and space characters. Returns whether at least one was
    /// present, so callers can make inter-token whitespace mandatory.
    fn skip_whitespace(&mut self) -> Result<bool, NTriplesError> {
        let mut seen = false;
        loop {
            match self.read.current() {
                b' ' | b'\t' => {
                    seen = true;
                    self.read.consume()?;
                }
                _ => return Ok(seen),
            }
        }
    }

    fn require_whitespace(&mut self) -> Result<(), NTriplesError> {
        if self.skip_whitespace()? {
            Ok(())
        } else {
            self.read.unexpected_char_error()
        }
    }

    /// Consumes a line terminator: `\n`, or `\r` optionally followed by one
    /// `\n`. Anything else, including end of input, is an error.
    fn end_of_line(&mut self) -> Result<(), NTriplesError> {
        match self.read.current() {
            b'\n' => self.read.consume(),
            b'\r' => {
                self.read.consume()?;
                if self.read.current() == b'\n' {
                    self.read.consume()?;
                }
                Ok(())
            }
            _ => self.read.unexpected_char_error(),
        }
    }

    /// Consumes a `#` comment through its terminating line break. Everything
    /// in between must be printable ASCII.
    fn skip_comment(&mut self) -> Result<(), NTriplesError> {
        self.read.check_is_current(b'#')?;
        loop {
            self.read.consume()?;
            match self.read.current() {
                b'\n' | b'\r' => return self.end_of_line(),
                c if (0x20..=0x7E).contains(&c) => (),
                _ => return self.read.unexpected_char_error(),
            }
        }
    }
}

impl<'a> NTriplesParser<&'a [u8]> {
    /// Builds a parser reading from an in-memory string.
    ///
    /// ```
    /// use tern_ntriples::NTriplesParser;
    ///
    /// let triples = NTriplesParser::from_str("_:n1 <http://example.com/p> _:n1 .\n")?.parse()?;
    /// assert_eq!(1, triples.len());
    /// # std::io::Result::Ok(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Result<Self, NTriplesError> {
        Self::new(input.as_bytes())
    }
}

fn hex_digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
