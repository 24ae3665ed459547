//! Well-known IRIs and process-wide constant terms.
//!
//! The constant terms are built once through the ordinary [`Term`] factories
//! and carry no special runtime behavior.

use crate::model::Term;
use once_cell::sync::Lazy;

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

/// Predicate for RDF types (`rdf:type`).
pub static A: Lazy<Term> = Lazy::new(|| Term::iri(rdf::TYPE).expect("valid constant IRI"));

/// Predicate for the first element of an RDF list.
pub static FIRST: Lazy<Term> = Lazy::new(|| Term::iri(rdf::FIRST).expect("valid constant IRI"));

/// Predicate for the remainder of an RDF list.
pub static REST: Lazy<Term> = Lazy::new(|| Term::iri(rdf::REST).expect("valid constant IRI"));

/// Object for the end of an RDF list, or an empty list.
pub static NIL: Lazy<Term> = Lazy::new(|| Term::iri(rdf::NIL).expect("valid constant IRI"));

/// Object for the boolean true value.
pub static TRUE: Lazy<Term> =
    Lazy::new(|| Term::typed_string("true", xsd::BOOLEAN).expect("valid constant literal"));

/// Object for the boolean false value.
pub static FALSE: Lazy<Term> =
    Lazy::new(|| Term::typed_string("false", xsd::BOOLEAN).expect("valid constant literal"));
