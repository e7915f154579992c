#![doc = r#"
A streaming decoder for Standard MIDI Files that keeps only what a player needs: the notes.

# Overview

A MIDI file is a header chunk (`MThd`) followed by track chunks (`MTrk`). Each track is a
run of delta-time prefixed events. This crate walks those bytes once and produces a
[`Sequence`](crate::file::Sequence): the header fields, one [`Track`](crate::file::Track)
per track chunk holding [`NoteEvent`](crate::file::NoteEvent)s stamped with their absolute
tick, and the latest tick seen anywhere in the file.

Meta events and system exclusive messages are framed and skipped. Channel voice messages
other than note on/off are consumed and dropped.

# Example
```rust
use midinote::prelude::*;

let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 12,
    0x00, 0x90, 60, 64,
    0x60, 0x80, 60, 0,
    0x00, 0xFF, 0x2F, 0x00,
];

let sequence = Sequence::parse(&bytes[..]).unwrap();
assert_eq!(sequence.tracks().len(), 1);
assert_eq!(sequence.max_time(), 96);
```
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::*;

pub mod file;
pub mod reader;

/// Commonly used types
pub mod prelude {
    pub use crate::error::*;
    pub use crate::file::*;
    pub use crate::reader::{ReadResult, Reader, ReaderError, ReaderErrorKind};
}
