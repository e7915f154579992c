/// The header timing type.
///
/// The division word is carried through untouched. When its high bit is clear it is the
/// number of ticks per quarter note; otherwise it is an SMPTE frame rate and ticks per frame,
/// which this crate does not interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing(u16);

impl Timing {
    /// Wrap a raw division word
    pub const fn new(division: u16) -> Self {
        Self(division)
    }

    /// The raw division word as read from the header
    pub const fn division(&self) -> u16 {
        self.0
    }

    /// True if the division is in SMPTE form
    pub const fn is_smpte(&self) -> bool {
        self.0 & 0x8000 != 0
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        if self.is_smpte() { None } else { Some(self.0) }
    }
}

impl From<u16> for Timing {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

#[test]
fn ticks_per_quarter_note() {
    let timing = Timing::new(96);
    assert!(!timing.is_smpte());
    assert_eq!(timing.ticks_per_quarter_note(), Some(96));
}

#[test]
fn smpte_is_opaque() {
    // -25 fps, 40 ticks per frame
    let timing = Timing::new(0xE728);
    assert!(timing.is_smpte());
    assert_eq!(timing.ticks_per_quarter_note(), None);
    assert_eq!(timing.division(), 0xE728);
}
