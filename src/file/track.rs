use crate::{
    ChunkError, TrackError,
    file::{EventByte, NoteEvent, StatusByte, Ticked, Timing},
    reader::{ReadResult, Reader, ReaderError, invalid_at},
};
use alloc::vec::Vec;

/// The tag that opens every track chunk.
pub const TRACK_TAG: [u8; 4] = *b"MTrk";

#[doc = r#"
The note events of one `MTrk` chunk, in the order they appear.

Timestamps are absolute ticks from the start of the track, so they never decrease.
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Ticked<NoteEvent>>", into = "Vec<Ticked<NoteEvent>>")
)]
pub struct Track {
    events: Vec<Ticked<NoteEvent>>,
}

impl Track {
    /// Create a track from already-timed events.
    ///
    /// Events are put in tick order. The sort is stable, so events sharing a tick keep
    /// the order they were given in.
    pub fn new(mut events: Vec<Ticked<NoteEvent>>) -> Self {
        events.sort_by_key(Ticked::accumulated_ticks);
        Self { events }
    }

    /// Reads one track chunk.
    ///
    /// `timing` is not needed to extract notes; it is accepted so that tick conversion
    /// can happen here once tempo is tracked.
    pub(crate) fn read(reader: &mut Reader<'_>, _timing: Timing) -> ReadResult<Self> {
        let tag_position = reader.buffer_position();
        let tag: [u8; 4] = reader.read_exact_size()?;
        if tag != TRACK_TAG {
            return Err(ReaderError::new(tag_position, ChunkError::InvalidTrackTag(tag)));
        }
        let len = reader.read_u32_be()? as usize;
        let end = reader.buffer_position().saturating_add(len);

        let mut events = Vec::new();
        let mut running_status: Option<StatusByte> = None;
        let mut ticks: u32 = 0;

        while reader.buffer_position() < end {
            let delta = reader.read_varlen()?;
            let Some(next) = ticks.checked_add(delta) else {
                return Err(invalid_at(reader, TrackError::TickOverflow));
            };
            ticks = next;
            if let Some(event) = read_event(reader, &mut running_status)? {
                events.push(Ticked::new(ticks, event));
            }
            if reader.buffer_position() > end {
                return Err(ReaderError::new(
                    reader.buffer_position(),
                    TrackError::Overrun {
                        end,
                        position: reader.buffer_position(),
                    },
                ));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(len, notes = events.len(), ticks, "Read track");

        Ok(Self { events })
    }

    /// The note events of the track
    pub fn events(&self) -> &[Ticked<NoteEvent>] {
        &self.events
    }

    /// Consume the track, returning its events
    pub fn into_events(self) -> Vec<Ticked<NoteEvent>> {
        self.events
    }

    /// Number of note events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the track holds no note events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Tick of the latest note event, or 0 if there is none
    pub fn max_time(&self) -> u32 {
        self.events
            .iter()
            .map(Ticked::accumulated_ticks)
            .max()
            .unwrap_or(0)
    }
}

impl From<Vec<Ticked<NoteEvent>>> for Track {
    fn from(events: Vec<Ticked<NoteEvent>>) -> Self {
        Self::new(events)
    }
}

impl From<Track> for Vec<Ticked<NoteEvent>> {
    fn from(track: Track) -> Self {
        track.events
    }
}

/// Consumes one event body (everything after the delta time).
fn read_event(
    reader: &mut Reader<'_>,
    running_status: &mut Option<StatusByte>,
) -> ReadResult<Option<NoteEvent>> {
    match EventByte::classify(reader.peek_byte()?) {
        EventByte::Meta => {
            reader.read_next()?;
            let _meta_type = reader.read_next()?;
            let len = reader.read_varlen()?;
            reader.skip(len as usize)?;
            Ok(None)
        }
        EventByte::SystemExclusive => {
            reader.read_next()?;
            let len = reader.read_varlen()?;
            reader.skip(len as usize)?;
            Ok(None)
        }
        EventByte::Status(status) => {
            reader.read_next()?;
            *running_status = Some(status);
            read_voice_data(reader, status)
        }
        EventByte::Data(_) => {
            let Some(status) = *running_status else {
                return Err(invalid_at(reader, TrackError::MalformedRunningStatus));
            };
            read_voice_data(reader, status)
        }
    }
}

fn read_voice_data(reader: &mut Reader<'_>, status: StatusByte) -> ReadResult<Option<NoteEvent>> {
    let [data1, data2] = reader.read_exact_size::<2>()?;
    let event = status.note_event(data1, data2);
    #[cfg(feature = "tracing")]
    if event.is_none() {
        tracing::trace!(status = status.byte(), data1, data2, "Dropped channel message");
    }
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(ticks: u32, note: u8) -> Ticked<NoteEvent> {
        Ticked::new(
            ticks,
            NoteEvent::NoteOn {
                channel: 0,
                note,
                velocity: 100,
            },
        )
    }

    #[test]
    fn new_orders_events_by_tick() {
        let track = Track::new(alloc::vec![on(100, 60), on(5, 62), on(100, 64), on(5, 65)]);
        assert_eq!(
            track.events(),
            &[on(5, 62), on(5, 65), on(100, 60), on(100, 64)]
        );
        assert_eq!(track.max_time(), 100);
    }

    #[test]
    fn accumulated_ticks_may_not_overflow() {
        let bytes = [
            b'M', b'T', b'r', b'k', 0, 0, 0, 12, //
            0x8F, 0xFF, 0xFF, 0xFF, 0x7F, 0x90, 60, 64, // delta u32::MAX
            0x01, 0xFF, 0x2F, 0x00, // one tick later
        ];
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = Track::read(&mut reader, Timing::new(96)).unwrap_err();
        assert_eq!(
            err.parse_error_kind(),
            Some(&crate::ParseError::Track(TrackError::TickOverflow))
        );
    }

    #[test]
    fn reaches_u32_max_without_error() {
        let bytes = [
            b'M', b'T', b'r', b'k', 0, 0, 0, 8, //
            0x8F, 0xFF, 0xFF, 0xFF, 0x7F, 0x90, 60, 64,
        ];
        let track = Track::read(&mut Reader::from_byte_slice(&bytes), Timing::new(96)).unwrap();
        assert_eq!(track.len(), 1);
        assert_eq!(track.max_time(), u32::MAX);
        assert_eq!(track.events()[0].event().velocity(), 64);
    }
}
