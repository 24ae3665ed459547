use std::char;
use std::error::Error;
use std::fmt;
use std::io;
use tern_api::model::TermError;

/// Error that might be returned during parsing.
///
/// It might wrap an IO error or be a syntax error.
#[derive(Debug)]
pub struct NTriplesError {
    pub(crate) kind: NTriplesErrorKind,
    pub(crate) position: Option<TextPosition>,
}

#[derive(Debug)]
pub(crate) enum NTriplesErrorKind {
    Io(io::Error),
    NonAsciiByte(u8),
    PrematureEof,
    UnexpectedByte(u8),
    InvalidCodePoint(u32),
    InvalidIriReference,
    Term(TermError),
}

impl NTriplesError {
    /// The position of the error inside of the file, if known.
    pub fn textual_position(&self) -> Option<TextPosition> {
        self.position
    }
}

impl fmt::Display for NTriplesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NTriplesErrorKind::Io(error) => return error.fmt(f),
            NTriplesErrorKind::NonAsciiByte(b) => {
                write!(f, "byte 0x{:02X} is not US-ASCII", b)
            }
            NTriplesErrorKind::PrematureEof => write!(f, "premature end of file"),
            NTriplesErrorKind::UnexpectedByte(b) => match char::from_u32(u32::from(*b)) {
                Some(c) => write!(f, "unexpected character '{}'", c.escape_debug()),
                None => write!(f, "unexpected byte {}", b),
            },
            NTriplesErrorKind::InvalidCodePoint(point) => {
                write!(f, "invalid unicode code point '{}'", point)
            }
            NTriplesErrorKind::InvalidIriReference => {
                write!(f, "IRI reference is empty or has no scheme separator")
            }
            NTriplesErrorKind::Term(error) => return error.fmt(f),
        }?;
        if let Some(position) = self.position {
            write!(
                f,
                " on line {} at position {}",
                position.line_number(),
                position.byte_number(),
            )?;
        }
        Ok(())
    }
}

impl Error for NTriplesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            NTriplesErrorKind::Io(error) => Some(error),
            NTriplesErrorKind::Term(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for NTriplesError {
    fn from(error: io::Error) -> Self {
        Self {
            kind: NTriplesErrorKind::Io(error),
            position: None,
        }
    }
}

impl From<TermError> for NTriplesError {
    fn from(error: TermError) -> Self {
        Self {
            kind: NTriplesErrorKind::Term(error),
            position: None,
        }
    }
}

impl From<NTriplesError> for io::Error {
    fn from(error: NTriplesError) -> Self {
        match error.kind {
            NTriplesErrorKind::Io(error) => error,
            _ => io::Error::new(io::ErrorKind::InvalidData, error),
        }
    }
}

/// A position in a text file: line and byte-in-line numbers, both starting at 1.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct TextPosition {
    pub(crate) line_number: usize,
    pub(crate) byte_number: usize,
}

impl TextPosition {
    /// The line number, starting at 1.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The byte number inside of the line, starting at 1.
    pub fn byte_number(&self) -> usize {
        self.byte_number
    }
}
