use thiserror::Error;

/// Errors produced while interpreting bytes that were successfully read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A variable length quantity had more than the allowed number of continuation
    /// bytes, or its value does not fit in 32 bits.
    #[error(
        "Variable length quantity has more than {} continuation bytes or exceeds 32 bits",
        crate::reader::MAX_VARLEN_CONTINUATIONS
    )]
    MalformedVarLength,
    /// Chunk framing errors
    #[error("Chunk: {0}")]
    Chunk(#[from] ChunkError),
    /// Track body errors
    #[error("Track: {0}")]
    Track(#[from] TrackError),
}

/// Errors in the tag or length prefix of a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The file did not begin with `MThd`
    #[error("Invalid header tag {0:?}")]
    InvalidHeaderTag([u8; 4]),
    /// A track chunk did not begin with `MTrk`
    #[error("Invalid track tag {0:?}")]
    InvalidTrackTag([u8; 4]),
    /// The header declared fewer bytes than its three mandatory fields occupy
    #[error("Header length {0} is shorter than the required 6 bytes")]
    HeaderTooShort(u32),
}

/// Errors found while decoding the events of a single track.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// An event ended beyond the track's declared length.
    #[error("Event ended at {position}, past the track end at {end}")]
    Overrun {
        /// Offset the track chunk declared as its end
        end: usize,
        /// Offset the cursor reached
        position: usize,
    },
    /// The sum of the track's delta times does not fit in 32 bits.
    #[error("Accumulated ticks exceed u32::MAX")]
    TickOverflow,
    /// A data byte appeared before any status byte was established in the track.
    #[error("Data byte with no running status")]
    MalformedRunningStatus,
}
