#![doc = r#"
Rusty representation of a decoded MIDI file: a [`Sequence`] of note [`Track`]s
"#]

mod event;
pub use event::*;

mod header;
pub use header::*;

mod track;
pub use track::*;

mod timed_event_iter;
pub use timed_event_iter::*;

mod timing;
pub use timing::*;

use crate::reader::{ReadResult, Reader};
use alloc::{borrow::Cow, vec::Vec};

#[doc = r#"
A fully decoded MIDI file.

Built in one pass by [`Sequence::parse`]. A sequence is never partially built:
any framing error aborts the whole parse.
"#]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    header: SequenceHeader,
    tracks: Vec<Track>,
    max_time: u32,
}

impl Sequence {
    /// Parse a set of bytes into a sequence.
    ///
    /// Exactly as many track chunks as the header declares are read. Bytes following
    /// the last track are ignored.
    pub fn parse<'a, B>(bytes: B) -> ReadResult<Self>
    where
        B: Into<Cow<'a, [u8]>>,
    {
        let mut reader = Reader::from_bytes(bytes);
        let header = SequenceHeader::read(&mut reader)?;

        let tracks = (0..header.track_count())
            .map(|_| Track::read(&mut reader, header.timing()))
            .collect::<ReadResult<Vec<_>>>()?;

        #[cfg(feature = "tracing")]
        if !reader.is_empty() {
            tracing::warn!(
                "{} bytes after the last declared track were ignored",
                reader.remaining()
            );
        }

        Ok(Self::new(header, tracks))
    }

    /// Assemble a sequence from a header and tracks, computing the latest tick.
    pub fn new(header: SequenceHeader, tracks: Vec<Track>) -> Self {
        let max_time = tracks.iter().map(Track::max_time).max().unwrap_or(0);
        Self {
            header,
            tracks,
            max_time,
        }
    }

    /// Returns header info
    pub fn header(&self) -> &SequenceHeader {
        &self.header
    }

    /// Returns the timing of the file
    pub fn timing(&self) -> Timing {
        self.header.timing()
    }

    /// Returns the format type for the file, if it is a known one.
    pub fn format_type(&self) -> Option<FormatType> {
        self.header.format_type()
    }

    /// Returns the decoded tracks, in file order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The latest tick of any note event in any track; 0 if there are none.
    pub fn max_time(&self) -> u32 {
        self.max_time
    }

    /// Total note events across all tracks
    pub fn event_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// Returns every note event in the file, ordered by tick.
    ///
    /// Events sharing a tick keep their track order, then their order within the track.
    pub fn into_events(self) -> TimedEventIterator {
        TimedEventIterator::new(self.tracks)
    }
}
