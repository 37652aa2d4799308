//! In-memory tape implementation.

use super::{Record, Tape};
use crate::delays::Delays;
use crate::error::TapeResult;

/// Tape device backed by in-memory record vectors.
///
/// Mirrors [`super::FileTape`]'s split media: reads consume a pre-loaded
/// input side, writes append to a captured output side. Delays are zero by
/// default, making this the test double of choice; timing tests can opt in
/// with [`MemoryTape::with_delays`].
#[derive(Clone)]
pub struct MemoryTape {
    input: Vec<Record>,
    output: Vec<Record>,
    pos: usize,
    delays: Delays,
}

impl Default for MemoryTape {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTape {
    pub fn new() -> Self {
        Self {
            input: Vec::new(),
            output: Vec::new(),
            pos: 0,
            delays: Delays::zero(),
        }
    }

    /// Create with pre-loaded input records.
    pub fn with_records(records: impl Into<Vec<Record>>) -> Self {
        Self {
            input: records.into(),
            ..Self::new()
        }
    }

    /// Replace the delay settings.
    pub fn with_delays(mut self, delays: Delays) -> Self {
        self.delays = delays;
        self
    }

    /// Records appended to the output side so far.
    pub fn written(&self) -> &[Record] {
        &self.output
    }
}

impl Tape for MemoryTape {
    fn write(&mut self, value: Record) -> TapeResult<()> {
        self.delays.before_write();
        self.output.push(value);
        Ok(())
    }

    fn read(&mut self) -> TapeResult<Option<Record>> {
        self.delays.before_read();
        match self.input.get(self.pos).copied() {
            Some(value) => {
                self.pos += 1;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn rewind(&mut self) -> TapeResult<()> {
        self.delays.before_rewind();
        self.pos = 0;
        Ok(())
    }

    fn shift(&mut self) -> TapeResult<()> {
        self.delays.before_shift();
        if self.pos < self.input.len() {
            self.pos += 1;
        }
        Ok(())
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn position(&self) -> u64 {
        self.pos as u64
    }
}
