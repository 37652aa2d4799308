//! Tape Device Emulator Core
//!
//! This crate provides the core components for emulating sequential-access
//! tape storage:
//! - Tape device contract with per-operation artificial latency
//! - File-backed and in-memory tape media
//! - A tape-to-tape sorter working exclusively through the device contract
//!
//! # Architecture
//!
//! The emulator uses a layered design:
//! - `Tape` trait: the four-operation device contract (write/read/rewind/shift)
//!   plus end-of-medium and position queries
//! - `FileTape` / `MemoryTape`: concrete media
//! - `Delays`: per-operation latency configuration
//! - `TapeSorter`: drains one tape, orders the records, fills another

pub mod delays;
pub mod error;
pub mod sorter;
pub mod tape;

pub use delays::Delays;
pub use error::{TapeError, TapeResult};
pub use sorter::TapeSorter;
pub use tape::{FileTape, MemoryTape, Record, Tape};
