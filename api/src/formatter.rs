//! Interfaces for RDF serializers.

use crate::model::Triple;
use std::error::Error;

/// A formatter for [`Triple`](../model/struct.Triple.html).
pub trait TriplesFormatter {
    type Error: Error;

    /// Writes a triple
    fn format(&mut self, triple: &Triple) -> Result<(), Self::Error>;
}
