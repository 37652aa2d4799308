//! File-backed tape device.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::{Record, Tape};
use crate::delays::Delays;
use crate::error::{TapeError, TapeResult};

/// Suffix appended to the backing file's name to form the output-side store.
pub const OUTPUT_SUFFIX: &str = ".out";

/// Tape device backed by a file of whitespace-separated integer records.
///
/// The read side is the named file, scanned sequentially. The write side is a
/// separate file named `<file>.out`, freshly created when the tape is opened,
/// one record per line. Each operation blocks for its configured delay.
///
/// The device keeps one record of lookahead, so [`Tape::eof`] is accurate
/// before any read is attempted.
pub struct FileTape {
    reader: BufReader<File>,
    writer: BufWriter<File>,
    out_path: PathBuf,
    /// Lookahead slot; `None` means the medium is exhausted.
    next: Option<Record>,
    pos: u64,
    written: u64,
    delays: Delays,
}

impl FileTape {
    /// Open a tape bound to `path`. Fails with [`TapeError::TapeNotFound`] if
    /// the file does not exist. The `<path>.out` write-side store is created
    /// (truncated) immediately.
    pub fn open(path: impl AsRef<Path>, delays: Delays) -> TapeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TapeError::TapeNotFound(path.to_path_buf()));
        }
        let input = File::open(path)?;
        let out_path = output_path_for(path);
        let output = File::create(&out_path)?;

        let mut tape = Self {
            reader: BufReader::new(input),
            writer: BufWriter::new(output),
            out_path,
            next: None,
            pos: 0,
            written: 0,
            delays,
        };
        tape.fill_lookahead()?;
        Ok(tape)
    }

    /// Open a tape bound to `path`, creating an empty backing file first if
    /// none exists. Used for the output tape of a run, whose medium starts
    /// blank.
    pub fn create(path: impl AsRef<Path>, delays: Delays) -> TapeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            File::create(path)?;
        }
        Self::open(path, delays)
    }

    /// Path of the write-side store (`<file>.out`).
    pub fn output_path(&self) -> &Path {
        &self.out_path
    }

    /// Records appended to the output side so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush buffered writes to the output-side store.
    pub fn flush(&mut self) -> TapeResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Scan the next whitespace-separated token from the read side.
    fn scan_token(&mut self) -> TapeResult<Option<String>> {
        let mut token = String::new();
        loop {
            let (used, done) = {
                let buf = self.reader.fill_buf()?;
                if buf.is_empty() {
                    return Ok(if token.is_empty() { None } else { Some(token) });
                }
                let mut used = 0;
                let mut done = false;
                for &byte in buf {
                    used += 1;
                    if byte.is_ascii_whitespace() {
                        if !token.is_empty() {
                            done = true;
                            break;
                        }
                    } else {
                        token.push(byte as char);
                    }
                }
                (used, done)
            };
            self.reader.consume(used);
            if done {
                return Ok(Some(token));
            }
        }
    }

    /// Refill the lookahead slot from the read side.
    fn fill_lookahead(&mut self) -> TapeResult<()> {
        self.next = match self.scan_token()? {
            Some(token) => {
                let value = token.parse().map_err(|_| TapeError::MalformedRecord {
                    text: token.clone(),
                    position: self.pos,
                })?;
                Some(value)
            }
            None => None,
        };
        Ok(())
    }
}

impl Tape for FileTape {
    fn write(&mut self, value: Record) -> TapeResult<()> {
        self.delays.before_write();
        writeln!(self.writer, "{value}")?;
        self.written += 1;
        Ok(())
    }

    fn read(&mut self) -> TapeResult<Option<Record>> {
        self.delays.before_read();
        match self.next.take() {
            Some(value) => {
                self.pos += 1;
                self.fill_lookahead()?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn rewind(&mut self) -> TapeResult<()> {
        self.delays.before_rewind();
        self.reader.seek(SeekFrom::Start(0))?;
        self.pos = 0;
        self.fill_lookahead()
    }

    fn shift(&mut self) -> TapeResult<()> {
        self.delays.before_shift();
        if self.next.is_some() {
            self.pos += 1;
            self.fill_lookahead()?;
        }
        Ok(())
    }

    fn eof(&self) -> bool {
        self.next.is_none()
    }

    fn position(&self) -> u64 {
        self.pos
    }
}

fn output_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}
