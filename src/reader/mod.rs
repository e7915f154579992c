#![doc = r#"
A cursor over an in-memory MIDI file.

[`Reader`] owns (or borrows) the file's bytes and a read position. Every read either
consumes exactly the bytes it asked for or fails with [`ReaderErrorKind::OutOfBounds`]
and leaves the position untouched.
"#]

mod error;
pub use error::*;

use crate::ParseError;
use alloc::borrow::Cow;

/// How many bytes with the continuation bit set may precede the final byte of a
/// delta time or payload length.
pub const MAX_VARLEN_CONTINUATIONS: usize = 4;

/// A byte cursor over a complete MIDI file.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: Cow<'a, [u8]>,
    position: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader from a borrowed slice
    pub const fn from_byte_slice(data: &'a [u8]) -> Self {
        Self {
            data: Cow::Borrowed(data),
            position: 0,
        }
    }

    /// Create a reader from anything that converts into a [`Cow`] of bytes
    pub fn from_bytes<B>(bytes: B) -> Self
    where
        B: Into<Cow<'a, [u8]>>,
    {
        Self {
            data: bytes.into(),
            position: 0,
        }
    }

    /// Offset of the next byte to be read
    #[inline]
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// Count of unread bytes
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// True if every byte has been read
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the byte at the current position without consuming it
    pub fn peek_byte(&self) -> ReadResult<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(ReaderError::out_of_bounds(self.position))
    }

    /// Consume a single byte
    pub fn read_next(&mut self) -> ReadResult<u8> {
        let byte = self.peek_byte()?;
        self.position += 1;
        Ok(byte)
    }

    /// Consume the next `len` bytes.
    pub fn read_exact(&mut self, len: usize) -> ReadResult<&[u8]> {
        let start = self.position;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(ReaderError::out_of_bounds(start))?;
        self.position = end;
        Ok(&self.data[start..end])
    }

    /// Consume the next `N` bytes into an array
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_exact(N)?);
        Ok(out)
    }

    /// Discard the next `len` bytes. Fails the same way [`Reader::read_exact`] does.
    pub fn skip(&mut self, len: usize) -> ReadResult<()> {
        self.read_exact(len).map(|_| ())
    }

    /// Big-endian u16
    pub fn read_u16_be(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Big-endian u32
    pub fn read_u32_be(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Reads a variable length quantity.
    ///
    /// Each byte contributes its low seven bits, most significant group first.
    /// A set high bit means another byte follows. Up to [`MAX_VARLEN_CONTINUATIONS`]
    /// continuation bytes are accepted before the terminating byte, and the value must
    /// fit in 32 bits.
    pub fn read_varlen(&mut self) -> ReadResult<u32> {
        let start = self.position;
        let mut value: u64 = 0;
        for offset in 0..=MAX_VARLEN_CONTINUATIONS {
            let Some(&byte) = self.data.get(start + offset) else {
                return Err(ReaderError::out_of_bounds(start + offset));
            };
            value = (value << 7) | (byte & 0x7F) as u64;
            if byte & 0x80 == 0 {
                let value = u32::try_from(value).map_err(|_| {
                    ReaderError::new(start, ParseError::MalformedVarLength)
                })?;
                self.position = start + offset + 1;
                return Ok(value);
            }
        }
        Err(ReaderError::new(
            start + MAX_VARLEN_CONTINUATIONS + 1,
            ParseError::MalformedVarLength,
        ))
    }
}

impl<'a> From<&'a [u8]> for Reader<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::from_byte_slice(value)
    }
}
