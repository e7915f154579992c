use num_enum::TryFromPrimitive;

/// An event stamped with the absolute tick at which it occurs within its track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticked<T> {
    accumulated_ticks: u32,
    event: T,
}

impl<T> Ticked<T> {
    /// Stamp an event with an absolute tick
    pub const fn new(accumulated_ticks: u32, event: T) -> Self {
        Self {
            accumulated_ticks,
            event,
        }
    }
    /// Sum of every delta time up to and including this event
    pub const fn accumulated_ticks(&self) -> u32 {
        self.accumulated_ticks
    }
    /// The event
    pub const fn event(&self) -> &T {
        &self.event
    }
    /// Discard the timestamp
    pub fn into_event(self) -> T {
        self.event
    }
}

/// A note being pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteEvent {
    /// A key was pressed with a non-zero velocity
    NoteOn {
        /// Channel, 0-15
        channel: u8,
        /// Key number
        note: u8,
        /// Always greater than zero
        velocity: u8,
    },
    /// A key was released.
    ///
    /// A note on with velocity zero decodes as this.
    NoteOff {
        /// Channel, 0-15
        channel: u8,
        /// Key number
        note: u8,
    },
}

impl NoteEvent {
    /// The key number of the event
    pub const fn note(&self) -> u8 {
        match self {
            Self::NoteOn { note, .. } | Self::NoteOff { note, .. } => *note,
        }
    }
    /// The channel of the event
    pub const fn channel(&self) -> u8 {
        match self {
            Self::NoteOn { channel, .. } | Self::NoteOff { channel, .. } => *channel,
        }
    }
    /// Velocity of a note on, zero for note off
    pub const fn velocity(&self) -> u8 {
        match self {
            Self::NoteOn { velocity, .. } => *velocity,
            Self::NoteOff { .. } => 0,
        }
    }
    /// True for [`NoteEvent::NoteOn`]
    pub const fn is_note_on(&self) -> bool {
        matches!(self, Self::NoteOn { .. })
    }
    /// True for [`NoteEvent::NoteOff`]
    pub const fn is_note_off(&self) -> bool {
        matches!(self, Self::NoteOff { .. })
    }
}

/// The upper nibble of a channel voice status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u8)]
pub enum VoiceKind {
    /// 0x8n
    NoteOff = 0x80,
    /// 0x9n
    NoteOn = 0x90,
    /// 0xAn
    Aftertouch = 0xA0,
    /// 0xBn
    ControlChange = 0xB0,
    /// 0xCn
    ProgramChange = 0xC0,
    /// 0xDn
    ChannelPressure = 0xD0,
    /// 0xEn
    PitchBend = 0xE0,
    /// 0xFn other than the meta and sysex markers.
    ///
    /// Still framed as status plus two data bytes.
    System = 0xF0,
}

/// A byte with its high bit set that establishes running status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusByte(u8);

impl StatusByte {
    /// Returns None if the high bit is clear
    pub const fn new(byte: u8) -> Option<Self> {
        if byte & 0x80 == 0 { None } else { Some(Self(byte)) }
    }
    /// The raw byte
    pub const fn byte(&self) -> u8 {
        self.0
    }
    /// The message family in the upper nibble
    pub fn kind(&self) -> VoiceKind {
        // every high nibble from 0x8 through 0xF is a variant
        VoiceKind::try_from(self.0 & 0xF0).unwrap_or(VoiceKind::System)
    }
    /// The channel in the lower nibble
    pub const fn channel(&self) -> u8 {
        self.0 & 0x0F
    }

    /// Interpret a pair of data bytes under this status.
    ///
    /// Returns None for messages that are not note on/off.
    pub fn note_event(&self, data1: u8, data2: u8) -> Option<NoteEvent> {
        let channel = self.channel();
        match self.kind() {
            VoiceKind::NoteOn if data2 > 0 => Some(NoteEvent::NoteOn {
                channel,
                note: data1,
                velocity: data2,
            }),
            VoiceKind::NoteOn | VoiceKind::NoteOff => Some(NoteEvent::NoteOff {
                channel,
                note: data1,
            }),
            _ => None,
        }
    }
}

/// What the first byte of an event body says about its framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventByte {
    /// 0xFF: type byte, length, payload
    Meta,
    /// 0xF0 or 0xF7: length, payload
    SystemExclusive,
    /// A new status byte followed by two data bytes
    Status(StatusByte),
    /// The first of two data bytes under running status
    Data(u8),
}

impl EventByte {
    /// Classify a leading byte
    pub const fn classify(byte: u8) -> Self {
        match byte {
            0xFF => Self::Meta,
            0xF0 | 0xF7 => Self::SystemExclusive,
            0x80..=0xFE => Self::Status(StatusByte(byte)),
            0x00..=0x7F => Self::Data(byte),
        }
    }
}
