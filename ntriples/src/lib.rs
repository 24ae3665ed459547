//! Implementation of a strict [N-Triples](https://www.w3.org/TR/n-triples/) parser
//! and canonical serializer.
//!
//! The parser works from any `BufRead` implementation through a strict
//! US-ASCII decoding layer and returns the complete, duplicate-free set of
//! triples of a document, or the first error. It does not rely on any
//! dependencies outside of the Rust standard library and
//! [`tern_api`](../tern_api/index.html).
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

mod error;
mod formatters;
mod ntriples;
mod utils;

pub use crate::error::NTriplesError;
pub use crate::error::TextPosition;
pub use crate::formatters::NTriplesFormatter;
pub use crate::ntriples::NTriplesParser;
pub use crate::utils::is_ascii_char;
