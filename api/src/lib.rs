//! This crate provides the RDF term and triple data structures used by the
//! [`tern_ntriples`](../tern_ntriples/index.html) parser and serializer.
//!
//! Terms own their text and render themselves in canonical
//! [N-Triples](https://www.w3.org/TR/n-triples/) form through `Display`.
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]
#![doc(test(attr(deny(warnings))))]

pub mod formatter;
pub mod model;
pub mod vocab;
