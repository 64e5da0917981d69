//! Writers that observe or sabotage the output stream.

use std::io::{self, Write};

/// Collects written bytes and counts write calls.
#[derive(Default)]
pub struct RecordingWriter {
    pub bytes: Vec<u8>,
    pub writes: usize,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails every write.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "disk on fire"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
