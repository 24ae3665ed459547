//! Data structures for [RDF 1.1 Concepts](https://www.w3.org/TR/rdf11-concepts/): terms and triples.
//!
//! The default string formatter of every type returns its canonical
//! [N-Triples](https://www.w3.org/TR/n-triples/) representation.

use crate::vocab::xsd;
use std::error::Error;
use std::fmt;
use std::fmt::Write;

/// An RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
///
/// It is the closed union of [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node),
/// [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri),
/// [language-tagged strings](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
/// and typed literals. Terms are immutable once constructed; build them with the
/// validating factories rather than the variants directly.
///
/// The default string formatter returns the canonical N-Triples representation,
/// escaping everything outside printable ASCII:
///
/// ```
/// use tern_api::model::Term;
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     Term::iri("http://example.com/foo")?.to_string()
/// );
/// assert_eq!(
///     "\"caf\\u00E9\"@en",
///     Term::lang_string("caf\u{e9}", "en")?.to_string()
/// );
/// # Ok::<_, tern_api::model::TermError>(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Term {
    /// A blank node with a document-scoped label.
    Blank {
        /// The [blank node identifier](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node-identifier). Never empty.
        label: String,
    },
    /// An IRI.
    Iri {
        /// The [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri) itself. Never empty.
        iri: String,
    },
    /// A language-tagged string literal.
    LangString {
        /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
        value: String,
        /// The [language tag](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tag). Never empty.
        language: String,
    },
    /// A literal with an explicit datatype.
    TypedString {
        /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
        value: String,
        /// The [datatype IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri). Never empty.
        datatype: String,
    },
}

impl Term {
    /// Builds a blank node term from its label.
    pub fn blank(label: impl Into<String>) -> Result<Self, TermError> {
        let label = label.into();
        if label.is_empty() {
            return Err(TermError::EmptyBlankNodeLabel);
        }
        Ok(Term::Blank { label })
    }

    /// Builds an IRI term.
    pub fn iri(iri: impl Into<String>) -> Result<Self, TermError> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(TermError::EmptyIri);
        }
        Ok(Term::Iri { iri })
    }

    /// Builds a language-tagged string literal.
    pub fn lang_string(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, TermError> {
        let language = language.into();
        if language.is_empty() {
            return Err(TermError::EmptyLanguageTag);
        }
        Ok(Term::LangString {
            value: value.into(),
            language,
        })
    }

    /// Builds a typed string literal.
    pub fn typed_string(
        value: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Result<Self, TermError> {
        let datatype = datatype.into();
        if datatype.is_empty() {
            return Err(TermError::EmptyDatatype);
        }
        Ok(Term::TypedString {
            value: value.into(),
            datatype,
        })
    }

    /// Builds a plain string literal, typed with the default
    /// [`xsd:string`](crate::vocab::xsd) datatype.
    pub fn simple(value: impl Into<String>) -> Self {
        Term::TypedString {
            value: value.into(),
            datatype: xsd::STRING.to_owned(),
        }
    }

    /// Returns `true` if this term is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank { .. })
    }

    /// Returns `true` if this term is the given IRI.
    pub fn is_iri(&self, value: &str) -> bool {
        match self {
            Term::Iri { iri } => iri == value,
            _ => false,
        }
    }

    /// Returns `true` if this term is a string literal with the default
    /// `xsd:string` datatype.
    pub fn is_ordinary_string(&self) -> bool {
        match self {
            Term::TypedString { datatype, .. } => datatype == xsd::STRING,
            _ => false,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Blank { label } => {
                f.write_str("_:")?;
                escape_blank_node_label(label, f)
            }
            Term::Iri { iri } => {
                f.write_char('<')?;
                escape_text(iri, f, true)?;
                f.write_char('>')
            }
            Term::LangString { value, language } => {
                f.write_char('"')?;
                escape_text(value, f, false)?;
                f.write_str("\"@")?;
                escape_language_tag(language, f)
            }
            Term::TypedString { value, datatype } => {
                f.write_char('"')?;
                escape_text(value, f, false)?;
                f.write_char('"')?;
                if datatype != xsd::STRING {
                    f.write_str("^^<")?;
                    escape_text(datatype, f, true)?;
                    f.write_char('>')?;
                }
                Ok(())
            }
        }
    }
}

/// An RDF [triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple): an
/// immutable (subject, predicate, object) tuple.
///
/// The type does not constrain which term kinds may appear in which position;
/// the N-Triples parser enforces the positional grammar rules.
///
/// The default string formatter returns a canonical N-Triples statement
/// without the terminating line break:
///
/// ```
/// use tern_api::model::{Term, Triple};
///
/// assert_eq!(
///     "<http://example.com/foo> <http://schema.org/sameAs> <http://example.com/foo> .",
///     Triple {
///         subject: Term::iri("http://example.com/foo")?,
///         predicate: Term::iri("http://schema.org/sameAs")?,
///         object: Term::iri("http://example.com/foo")?,
///     }.to_string()
/// );
/// # Ok::<_, tern_api::model::TermError>(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// Error raised by the [`Term`] factories when a required input is empty.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum TermError {
    EmptyBlankNodeLabel,
    EmptyIri,
    EmptyLanguageTag,
    EmptyDatatype,
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::EmptyBlankNodeLabel => write!(f, "blank node label is empty"),
            TermError::EmptyIri => write!(f, "IRI is empty"),
            TermError::EmptyLanguageTag => write!(f, "language tag is empty"),
            TermError::EmptyDatatype => write!(f, "datatype IRI is empty"),
        }
    }
}

impl Error for TermError {}

/// Writes a lexical form or IRI with the canonical N-Triples escapes.
///
/// Printable ASCII passes through, the control characters with short escapes
/// use them, and everything else becomes a `\uHHHH` or `\U00HHHHHH` escape. In
/// IRI position `>` is additionally percent-escaped so that the closing angle
/// bracket stays unambiguous.
fn escape_text(text: &str, f: &mut fmt::Formatter<'_>, iri: bool) -> fmt::Result {
    for c in text.chars() {
        match c {
            '\t' => f.write_str("\\t")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '>' if iri => f.write_str("%3E")?,
            ' '..='~' => f.write_char(c)?,
            c if (c as u32) <= 0xFFFF => write!(f, "\\u{:04X}", c as u32)?,
            c => write!(f, "\\U{:08X}", c as u32)?,
        }
    }
    Ok(())
}

/// Writes a blank node label, escaping everything outside ASCII letters and
/// digits. The parser only ever produces alphanumeric labels, so this matters
/// only for terms built directly through the factories.
fn escape_blank_node_label(label: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for c in label.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' => f.write_char(c)?,
            c if (c as u32) <= 0xFFFF => write!(f, "\\u{:04X}", c as u32)?,
            c => write!(f, "\\U{:08X}", c as u32)?,
        }
    }
    Ok(())
}

/// Writes a language tag in its canonical lowercase form.
///
/// Characters outside the `[a-z0-9-]` tag grammar are replaced by `x`, and an
/// `x` is inserted between consecutive hyphens, so the output always parses
/// back even for tags built directly through the factories.
fn escape_language_tag(tag: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut seen_hyphen = false;
    let mut chars = tag.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            'A'..='Z' => f.write_char(c.to_ascii_lowercase())?,
            'a'..='z' => f.write_char(c)?,
            '0'..='9' if seen_hyphen => f.write_char(c)?,
            '-' => {
                f.write_char('-')?;
                seen_hyphen = true;
                if chars.peek() == Some(&'-') {
                    f.write_char('x')?;
                }
            }
            _ => f.write_char('x')?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    #[test]
    fn factories_reject_empty_inputs() {
        assert_eq!(Term::blank(""), Err(TermError::EmptyBlankNodeLabel));
        assert_eq!(Term::iri(""), Err(TermError::EmptyIri));
        assert_eq!(Term::lang_string("x", ""), Err(TermError::EmptyLanguageTag));
        assert_eq!(Term::typed_string("x", ""), Err(TermError::EmptyDatatype));
    }

    #[test]
    fn empty_lexical_forms_are_allowed() {
        assert!(Term::lang_string("", "en").is_ok());
        assert_eq!("\"\"", Term::simple("").to_string());
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Term::simple("x"), Term::simple("x"));
        assert_ne!(Term::simple("x"), Term::simple("y"));
        assert_ne!(
            Term::simple("x"),
            Term::lang_string("x", "en").unwrap()
        );
        assert_ne!(
            Term::lang_string("x", "en").unwrap(),
            Term::lang_string("x", "fr").unwrap()
        );
    }

    #[test]
    fn default_datatype_is_omitted() {
        assert_eq!("\"x\"", Term::simple("x").to_string());
        assert_eq!(
            "\"x\"^^<http://www.w3.org/2001/XMLSchema#boolean>",
            Term::typed_string("x", xsd::BOOLEAN).unwrap().to_string()
        );
    }

    #[test]
    fn string_escapes() {
        assert_eq!(
            "\"a\\tb\\nc\\r\\\"\\\\\"",
            Term::simple("a\tb\nc\r\"\\").to_string()
        );
        assert_eq!("\"\\u0001\"", Term::simple("\u{1}").to_string());
        assert_eq!("\"\\U00010000\"", Term::simple("\u{10000}").to_string());
    }

    #[test]
    fn iri_escapes() {
        assert_eq!(
            "<http://a/%3E\\u00E9>",
            Term::iri("http://a/>\u{e9}").unwrap().to_string()
        );
    }

    #[test]
    fn blank_node_label_escapes() {
        assert_eq!("_:n1", Term::blank("n1").unwrap().to_string());
        assert_eq!("_:n\\u002D1", Term::blank("n-1").unwrap().to_string());
        assert_eq!(
            "_:a\\U00010000",
            Term::blank("a\u{10000}").unwrap().to_string()
        );
    }

    #[test]
    fn language_tags_are_lowercased() {
        assert_eq!(
            "\"x\"@en-us",
            Term::lang_string("x", "en-US").unwrap().to_string()
        );
    }

    #[test]
    fn malformed_language_tags_are_patched() {
        // Consecutive hyphens get an `x` marker, and characters outside the
        // tag grammar are replaced by `x`.
        assert_eq!(
            "\"x\"@en-x-us",
            Term::lang_string("x", "en--us").unwrap().to_string()
        );
        assert_eq!(
            "\"x\"@xen",
            Term::lang_string("x", "0en").unwrap().to_string()
        );
    }

    #[test]
    fn well_known_terms() {
        assert!(vocab::A.is_iri(vocab::rdf::TYPE));
        assert!(vocab::NIL.is_iri(vocab::rdf::NIL));
        assert_eq!(
            "\"true\"^^<http://www.w3.org/2001/XMLSchema#boolean>",
            vocab::TRUE.to_string()
        );
        assert!(!vocab::FALSE.is_blank());
        assert!(Term::simple("x").is_ordinary_string());
        assert!(!vocab::TRUE.is_ordinary_string());
    }
}
