//! Tape device abstractions.
//!
//! This module provides the sequential-medium architecture:
//! - `Tape`: the four-operation device contract (write/read/rewind/shift)
//! - `FileTape`: file-backed implementation with artificial latency
//! - `MemoryTape`: in-memory implementation for tests and staging

mod file_tape;
mod memory_tape;

pub use file_tape::FileTape;
pub use memory_tape::MemoryTape;

use crate::error::TapeResult;

/// The unit a tape medium stores.
pub type Record = i32;

/// Device interface for one sequential medium.
///
/// A tape has two disjoint cursors: reads and shifts consume from the input
/// side, writes append to the output side. There is no random access. Every
/// operation blocks for its configured delay before taking effect.
pub trait Tape {
    /// Append `value` on the output side and advance the write cursor.
    fn write(&mut self, value: Record) -> TapeResult<()>;

    /// Read the record under the read cursor and advance past it.
    /// Returns `None` once the medium is exhausted; nothing is consumed in
    /// that case, so the call is safe to repeat.
    fn read(&mut self) -> TapeResult<Option<Record>>;

    /// Reset the read cursor to the start of the medium.
    fn rewind(&mut self) -> TapeResult<()>;

    /// Advance the read cursor one record without producing a value.
    /// Past the end of the medium this is a no-op.
    fn shift(&mut self) -> TapeResult<()>;

    /// True when no further record can be read from the current position.
    /// Pure query, no delay.
    fn eof(&self) -> bool;

    /// Records consumed from the read side since the last rewind.
    fn position(&self) -> u64;
}
