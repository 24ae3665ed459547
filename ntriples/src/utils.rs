use crate::error::{NTriplesError, NTriplesErrorKind, TextPosition};
use std::io::BufRead;

/// End of file sentinel. Never a valid US-ASCII byte.
pub const EOF: u8 = u8::MAX;

/// Reads the input byte per byte with one byte of lookahead.
pub trait LookAheadByteRead {
    /// Returns the current byte or EOF if the input is finished
    fn current(&self) -> u8;

    /// Returns the next byte if available
    fn next(&self) -> Option<u8> {
        self.ahead(1)
    }

    /// Returns a future byte if available
    fn ahead(&self, count: usize) -> Option<u8>;

    /// Consumes the current byte and moves to the next one
    fn consume(&mut self) -> Result<(), NTriplesError>;

    /// Returns the line number of the current byte starting at 1
    fn line_number(&self) -> usize;

    /// Returns the byte number of the current byte in the line starting at 1
    fn byte_number(&self) -> usize;

    fn unexpected_char_error<T>(&self) -> Result<T, NTriplesError> {
        Err(self.parse_error(if self.current() == EOF {
            NTriplesErrorKind::PrematureEof
        } else {
            NTriplesErrorKind::UnexpectedByte(self.current())
        }))
    }

    fn check_is_current(&self, expected: u8) -> Result<(), NTriplesError> {
        if self.current() == expected {
            Ok(())
        } else {
            self.unexpected_char_error()
        }
    }

    fn parse_error(&self, kind: NTriplesErrorKind) -> NTriplesError {
        NTriplesError {
            kind,
            position: Some(TextPosition {
                line_number: self.line_number(),
                byte_number: self.byte_number(),
            }),
        }
    }
}

/// Line-buffered reader with a strict US-ASCII decoding layer: any byte
/// outside the 7-bit range fails `consume` with an encoding error before the
/// grammar ever sees it.
pub struct AsciiLineReader<R: BufRead> {
    inner: R,
    line: Vec<u8>,
    current: u8,
    line_number: usize,
    byte_number: usize,
}

impl<R: BufRead> AsciiLineReader<R> {
    pub fn new(inner: R) -> Result<Self, NTriplesError> {
        let mut this = Self {
            inner,
            line: Vec::default(),
            current: EOF,
            line_number: 1,
            byte_number: 0,
        };
        // Fills current with the first byte and resets the line number the
        // initial consume bumped.
        this.consume()?;
        this.line_number = 1;
        Ok(this)
    }
}

impl<R: BufRead> LookAheadByteRead for AsciiLineReader<R> {
    fn current(&self) -> u8 {
        self.current
    }

    fn ahead(&self, count: usize) -> Option<u8> {
        self.line.get(self.byte_number + count).cloned()
    }

    fn consume(&mut self) -> Result<(), NTriplesError> {
        self.byte_number += 1;
        if self.byte_number >= self.line.len() {
            self.line.clear();
            self.inner.read_until(b'\n', &mut self.line)?;
            self.line_number += 1;
            self.byte_number = 0;
        }
        match self.line.get(self.byte_number) {
            Some(&b) if b >= 0x80 => {
                self.current = b;
                Err(self.parse_error(NTriplesErrorKind::NonAsciiByte(b)))
            }
            Some(&b) => {
                self.current = b;
                Ok(())
            }
            None => {
                self.current = EOF;
                Ok(())
            }
        }
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn byte_number(&self) -> usize {
        self.byte_number + 1
    }
}

/// Returns `true` if `c` is one of the 7-bit ASCII characters of `ascii_chars`.
///
/// ```
/// use tern_ntriples::is_ascii_char;
///
/// assert!(is_ascii_char(b'<', "<\"{}|^`"));
/// assert!(!is_ascii_char(b'a', "<\"{}|^`"));
/// assert!(!is_ascii_char(0xFF, "\u{ff}"));
/// ```
pub fn is_ascii_char(c: u8, ascii_chars: &str) -> bool {
    c <= 0x7F && ascii_chars.as_bytes().contains(&c)
}
