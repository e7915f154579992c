use crate::{
    ChunkError,
    file::Timing,
    reader::{ReadResult, Reader, ReaderError, invalid_at},
};
use num_enum::TryFromPrimitive;

/// The tag that opens every MIDI file.
pub const HEADER_TAG: [u8; 4] = *b"MThd";

/// Length of the format, track count and division fields.
pub const HEADER_LEN: u32 = 6;

/// How the tracks of a file relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0: a single track containing every channel
    SingleMultiChannel = 0,
    /// Format 1: tracks played together
    Simultaneous = 1,
    /// Format 2: independent single-track patterns
    SequentiallyIndependent = 2,
}

#[doc = r#"
The decoded `MThd` chunk.

```text
"MThd" | length: u32 | format: u16 | track count: u16 | division: u16
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceHeader {
    format: u16,
    track_count: u16,
    timing: Timing,
}

impl SequenceHeader {
    /// Create a header from its three fields
    pub const fn new(format: u16, track_count: u16, timing: Timing) -> Self {
        Self {
            format,
            track_count,
            timing,
        }
    }

    /// Reads the header chunk.
    ///
    /// A declared length above [`HEADER_LEN`] is tolerated: the extra bytes are skipped.
    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let tag_position = reader.buffer_position();
        let tag: [u8; 4] = reader.read_exact_size()?;
        if tag != HEADER_TAG {
            return Err(ReaderError::new(tag_position, ChunkError::InvalidHeaderTag(tag)));
        }

        let len = reader.read_u32_be()?;
        if len < HEADER_LEN {
            return Err(invalid_at(reader, ChunkError::HeaderTooShort(len)));
        }

        let format = reader.read_u16_be()?;
        let track_count = reader.read_u16_be()?;
        let timing = Timing::new(reader.read_u16_be()?);

        let extra = len - HEADER_LEN;
        if extra > 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Header declares {} bytes, skipping {} reserved bytes",
                len,
                extra
            );
            reader.skip(extra as usize)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(format, track_count, division = timing.division(), "Read header");

        Ok(Self::new(format, track_count, timing))
    }

    /// The raw format word
    pub const fn format(&self) -> u16 {
        self.format
    }

    /// The format word as a known [`FormatType`], if it is one
    pub fn format_type(&self) -> Option<FormatType> {
        FormatType::try_from(self.format).ok()
    }

    /// Number of track chunks that follow the header
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// Get the timing props
    pub const fn timing(&self) -> Timing {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;

    #[test]
    fn reads_standard_header() {
        let bytes = [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 3, 0x01, 0xE0];
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = SequenceHeader::read(&mut reader).unwrap();
        assert_eq!(header.format(), 1);
        assert_eq!(header.format_type(), Some(FormatType::Simultaneous));
        assert_eq!(header.track_count(), 3);
        assert_eq!(header.timing().ticks_per_quarter_note(), Some(480));
        assert!(reader.is_empty());
    }

    #[test]
    fn skips_reserved_header_bytes() {
        let bytes = [
            b'M', b'T', b'h', b'd', 0, 0, 0, 9, 0, 0, 0, 1, 0, 96, 0xAA, 0xBB, 0xCC, b'M',
        ];
        let mut reader = Reader::from_byte_slice(&bytes);
        let header = SequenceHeader::read(&mut reader).unwrap();
        assert_eq!(header.track_count(), 1);
        assert_eq!(reader.peek_byte().unwrap(), b'M');
    }

    #[test]
    fn unknown_format_passes_through() {
        let bytes = [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 7, 0, 0, 0, 96];
        let header = SequenceHeader::read(&mut Reader::from_byte_slice(&bytes)).unwrap();
        assert_eq!(header.format(), 7);
        assert_eq!(header.format_type(), None);
    }

    #[test]
    fn rejects_bad_tag() {
        let bytes = [b'R', b'I', b'F', b'F', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96];
        let err = SequenceHeader::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
        assert_eq!(err.position(), 0);
        assert_eq!(
            err.parse_error_kind(),
            Some(&ParseError::Chunk(ChunkError::InvalidHeaderTag(*b"RIFF")))
        );
    }

    #[test]
    fn rejects_short_length() {
        let bytes = [b'M', b'T', b'h', b'd', 0, 0, 0, 4, 0, 0, 0, 1];
        let err = SequenceHeader::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
        assert_eq!(
            err.parse_error_kind(),
            Some(&ParseError::Chunk(ChunkError::HeaderTooShort(4)))
        );
    }

    #[test]
    fn truncated_header() {
        let bytes = [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0];
        let err = SequenceHeader::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
        assert!(err.is_out_of_bounds());
    }
}
