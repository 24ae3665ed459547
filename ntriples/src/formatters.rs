use std::io;
use std::io::Write;
use tern_api::formatter::TriplesFormatter;
use tern_api::model::Triple;

/// A [Canonical N-Triples](https://www.w3.org/TR/n-triples/#canonical-ntriples) serializer.
///
/// It implements the `TriplesFormatter` trait.
///
/// Write some triples using the `TriplesFormatter` API into a `Vec` buffer:
/// ```
/// use tern_ntriples::NTriplesFormatter;
/// use tern_api::formatter::TriplesFormatter;
/// use tern_api::model::{Term, Triple};
///
/// let mut formatter = NTriplesFormatter::new(Vec::default());
/// formatter.format(&Triple {
///     subject: Term::iri("http://example.com/foo")?,
///     predicate: Term::iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")?,
///     object: Term::iri("http://schema.org/Person")?,
/// })?;
/// let _ntriples = formatter.finish();
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub struct NTriplesFormatter<W: Write> {
    write: W,
}

impl<W: Write> NTriplesFormatter<W> {
    /// Builds a new formatter from a `Write` implementation
    pub fn new(write: W) -> Self {
        Self { write }
    }

    /// Finishes writing and returns the underlying `Write`
    pub fn finish(self) -> W {
        self.write
    }
}

impl<W: Write> TriplesFormatter for NTriplesFormatter<W> {
    type Error = io::Error;

    fn format(&mut self, triple: &Triple) -> Result<(), io::Error> {
        writeln!(self.write, "{}", triple)
    }
}
