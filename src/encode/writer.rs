use std::io::Write;

use crate::foundation::error::{EmfError, EmfResult};

/// Little-endian integer writer over a borrowed byte sink.
///
/// Byte order never depends on the host. A sink that stops accepting bytes
/// (`write` returning `Ok(0)` or an error) fails the write with
/// [`EmfError::SinkWrite`]; nothing is retried.
pub struct LeWriter<'w> {
    inner: &'w mut dyn Write,
    written: u64,
}

impl<'w> LeWriter<'w> {
    /// Wrap `inner`. The byte counter starts at zero.
    pub fn new(inner: &'w mut dyn Write) -> Self {
        Self { inner, written: 0 }
    }

    /// Write one byte.
    pub fn write_u8(&mut self, v: u8) -> EmfResult<()> {
        self.write_bytes(&[v])
    }

    /// Write two bytes, least significant first.
    pub fn write_u16(&mut self, v: u16) -> EmfResult<()> {
        self.write_bytes(&v.to_le_bytes())
    }

    /// Write four bytes, least significant first.
    pub fn write_u32(&mut self, v: u32) -> EmfResult<()> {
        self.write_bytes(&v.to_le_bytes())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> EmfResult<()> {
        self.inner
            .write_all(bytes)
            .map_err(|source| EmfError::SinkWrite {
                offset: self.written,
                source,
            })?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    /// Total bytes accepted by the sink through this writer.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> EmfResult<()> {
        self.inner.flush().map_err(|source| EmfError::SinkWrite {
            offset: self.written,
            source,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/writer.rs"]
mod tests;
