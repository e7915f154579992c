use crate::file::{NoteEvent, Ticked, Track};
use alloc::vec::{IntoIter, Vec};
use core::iter::Peekable;

/// An iterator returned from [`Sequence::into_events`](crate::file::Sequence::into_events).
///
/// Performs a k-way merge over the tracks, which are each already ordered by tick.
pub struct TimedEventIterator {
    len_remaining: usize,
    tracks: Vec<Peekable<IntoIter<Ticked<NoteEvent>>>>,
}

impl TimedEventIterator {
    pub(super) fn new(tracks: Vec<Track>) -> Self {
        let len_remaining = tracks.iter().map(Track::len).sum();
        let tracks = tracks
            .into_iter()
            .map(|track| track.into_events().into_iter().peekable())
            .collect();
        Self {
            len_remaining,
            tracks,
        }
    }
}

impl Iterator for TimedEventIterator {
    type Item = Ticked<NoteEvent>;
    fn next(&mut self) -> Option<Self::Item> {
        let mut earliest: Option<(usize, u32)> = None;
        for (index, track) in self.tracks.iter_mut().enumerate() {
            let Some(event) = track.peek() else {
                continue;
            };
            let ticks = event.accumulated_ticks();
            // strict comparison so the lower track index wins ties
            if earliest.is_none_or(|(_, best)| ticks < best) {
                earliest = Some((index, ticks));
            }
        }
        let (index, _) = earliest?;
        self.len_remaining -= 1;
        self.tracks[index].next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len_remaining, Some(self.len_remaining))
    }
}

impl ExactSizeIterator for TimedEventIterator {}

#[cfg(test)]
fn note_on(ticks: u32, note: u8) -> Ticked<NoteEvent> {
    Ticked::new(
        ticks,
        NoteEvent::NoteOn {
            channel: 0,
            note,
            velocity: 100,
        },
    )
}

#[cfg(test)]
fn note_off(ticks: u32, note: u8) -> Ticked<NoteEvent> {
    Ticked::new(ticks, NoteEvent::NoteOff { channel: 0, note })
}

#[test]
fn test_empty_file_yields_nothing() {
    let mut iter = TimedEventIterator::new(alloc::vec![]);
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_single_track_keeps_order() {
    let track = Track::new(alloc::vec![note_on(0, 60), note_off(96, 60), note_on(96, 62)]);
    let events: Vec<_> = TimedEventIterator::new(alloc::vec![track]).collect();
    assert_eq!(
        events,
        alloc::vec![note_on(0, 60), note_off(96, 60), note_on(96, 62)]
    );
}

#[test]
fn test_tracks_are_merged_by_tick() {
    let track1 = Track::new(alloc::vec![note_on(0, 60), note_off(480, 60)]);
    let track2 = Track::new(alloc::vec![note_on(240, 36), note_off(480, 36)]);
    let track3 = Track::new(alloc::vec![]);

    let iter = TimedEventIterator::new(alloc::vec![track1, track2, track3]);
    assert_eq!(iter.len(), 4);
    let events: Vec<_> = iter.collect();

    assert_eq!(
        events,
        alloc::vec![
            note_on(0, 60),
            note_on(240, 36),
            note_off(480, 60),
            note_off(480, 36),
        ]
    );
}
