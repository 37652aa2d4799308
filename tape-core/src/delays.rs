//! Per-operation delay configuration.
//!
//! Every tape operation blocks the calling thread for a fixed duration before
//! taking effect, modeling physical seek/transfer latency. Delays are
//! constructor-time configuration and apply unconditionally on every
//! invocation, independent of data size.

use std::path::Path;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TapeResult;

/// Delay settings for the four tape operations, in milliseconds.
///
/// Deserializable from a JSON file with kebab-case keys:
///
/// ```json
/// { "write-delay": 100, "read-delay": 100, "rewind-delay": 500, "shift-delay": 100 }
/// ```
///
/// Missing keys fall back to the defaults (100/100/500/100; rewind is larger,
/// reflecting physical reality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Delays {
    pub write_delay: u64,
    pub read_delay: u64,
    pub rewind_delay: u64,
    pub shift_delay: u64,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            write_delay: 100,
            read_delay: 100,
            rewind_delay: 500,
            shift_delay: 100,
        }
    }
}

impl Delays {
    /// All delays zero. Useful for tests and staging tapes.
    pub fn zero() -> Self {
        Self {
            write_delay: 0,
            read_delay: 0,
            rewind_delay: 0,
            shift_delay: 0,
        }
    }

    /// Load delay settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> TapeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Block for the write delay.
    pub fn before_write(&self) {
        pause(self.write_delay);
    }

    /// Block for the read delay.
    pub fn before_read(&self) {
        pause(self.read_delay);
    }

    /// Block for the rewind delay.
    pub fn before_rewind(&self) {
        pause(self.rewind_delay);
    }

    /// Block for the shift delay.
    pub fn before_shift(&self) {
        pause(self.shift_delay);
    }
}

fn pause(millis: u64) {
    if millis > 0 {
        thread::sleep(Duration::from_millis(millis));
    }
}
