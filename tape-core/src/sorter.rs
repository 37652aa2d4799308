//! Tape-to-tape sorting.

use crate::error::TapeResult;
use crate::tape::{Record, Tape};

/// Sorts all records from an input tape onto an output tape.
///
/// All I/O goes through the [`Tape`] contract; the sorter never touches a
/// backing store directly. The whole dataset is materialized in memory for
/// one pass, so it must fit; a bounded-memory multi-pass merge is out of
/// scope here.
pub struct TapeSorter<'a> {
    input: &'a mut dyn Tape,
    output: &'a mut dyn Tape,
}

impl<'a> TapeSorter<'a> {
    pub fn new(input: &'a mut dyn Tape, output: &'a mut dyn Tape) -> Self {
        Self { input, output }
    }

    /// Drain the input tape, order the records ascending, and write them all
    /// to the output tape. Returns the number of records transferred.
    ///
    /// Expects the input tape positioned at its start. Device failures
    /// propagate immediately; no partial-output guarantee is made.
    pub fn sort(&mut self) -> TapeResult<u64> {
        let mut buffer: Vec<Record> = Vec::new();
        while let Some(value) = self.input.read()? {
            buffer.push(value);
        }

        // Values carry no identity beyond themselves, so stability is moot.
        buffer.sort_unstable();

        let count = buffer.len() as u64;
        for value in buffer {
            self.output.write(value)?;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delays::Delays;
    use crate::tape::MemoryTape;
    use std::time::{Duration, Instant};

    fn sort_records(records: &[Record]) -> Vec<Record> {
        let mut input = MemoryTape::with_records(records.to_vec());
        let mut output = MemoryTape::new();
        let count = TapeSorter::new(&mut input, &mut output).sort().unwrap();
        assert_eq!(count as usize, records.len());
        output.written().to_vec()
    }

    #[test]
    fn test_sorts_ascending() {
        assert_eq!(sort_records(&[5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_already_sorted_is_unchanged() {
        assert_eq!(sort_records(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(sort_records(&[3, 1, 3, 1]), vec![1, 1, 3, 3]);
    }

    #[test]
    fn test_single_record() {
        assert_eq!(sort_records(&[42]), vec![42]);
    }

    #[test]
    fn test_empty_input_completes_normally() {
        assert_eq!(sort_records(&[]), Vec::<Record>::new());
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(sort_records(&[0, -5, 7, -1]), vec![-5, -1, 0, 7]);
    }

    #[test]
    fn test_sort_takes_at_least_per_record_delays() {
        let delays = Delays {
            read_delay: 10,
            write_delay: 10,
            ..Delays::zero()
        };
        let mut input = MemoryTape::with_records([4, 1, 3]).with_delays(delays);
        let mut output = MemoryTape::new().with_delays(delays);

        let start = Instant::now();
        TapeSorter::new(&mut input, &mut output).sort().unwrap();

        // 3 reads + 1 end-of-medium read + 3 writes, 10ms each.
        assert!(start.elapsed() >= Duration::from_millis(60));
        assert_eq!(output.written(), &[1, 3, 4]);
    }
}
