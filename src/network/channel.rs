//! Channel
//!
//! Buffered duplex byte stream carrying ACP values.
//!
//! Every `put_*` writes and then flushes, so the peer can observe the value as
//! soon as the call returns. Every `get_*` blocks until the whole field has
//! arrived; short reads from the underlying stream are retried until the field
//! is complete, the stream ends, or an error occurs.

use std::io::{self, BufReader, BufWriter, Read, Stdin, Stdout, Write};

use crate::error::{AcpError, Result};
use crate::protocol::{
    decode_bool, decode_i16, decode_u16, decode_u32, encode_bool, encode_string, encode_u16,
    FieldKind,
};

/// Duplex stream with independent read and write buffering
pub struct Channel<R: Read, W: Write> {
    /// Inbound half (buffered for efficiency)
    reader: BufReader<R>,

    /// Outbound half (flushed after every value)
    writer: BufWriter<W>,
}

impl Channel<Stdin, Stdout> {
    /// Bind a channel to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W: Write> Channel<R, W> {
    /// Wrap an already-open reader and writer
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer: BufWriter::new(writer),
        }
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Write raw bytes and flush
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.put_field(FieldKind::Bytes, bytes)
    }

    /// Flush any buffered output
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Send a bool (0x00 for true, 0x01 for false)
    pub fn put_bool(&mut self, value: bool) -> Result<()> {
        self.put_field(FieldKind::Bool, &[encode_bool(value)])
    }

    /// Send an unsigned 16-bit value
    pub fn put_u16(&mut self, value: u16) -> Result<()> {
        self.put_field(FieldKind::UInt16, &encode_u16(value))
    }

    /// Send a length-prefixed string
    ///
    /// Rejects values over 65535 bytes before anything is written.
    pub fn put_string(&mut self, value: impl AsRef<[u8]>) -> Result<()> {
        let frame = encode_string(value.as_ref())?;
        self.put_field(FieldKind::String, &frame)
    }

    fn put_field(&mut self, kind: FieldKind, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .and_then(|()| self.writer.flush())
            .map_err(|e| AcpError::field(kind, bytes.len(), e))
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Receive a bool
    pub fn get_bool(&mut self) -> Result<bool> {
        let [byte] = self.read_field::<1>(FieldKind::Bool)?;
        decode_bool(byte)
    }

    /// Receive an unsigned 16-bit value
    pub fn get_u16(&mut self) -> Result<u16> {
        Ok(decode_u16(self.read_field(FieldKind::UInt16)?))
    }

    /// Receive a signed 16-bit value
    pub fn get_i16(&mut self) -> Result<i16> {
        Ok(decode_i16(self.read_field(FieldKind::Int16)?))
    }

    /// Receive an unsigned 32-bit value
    pub fn get_u32(&mut self) -> Result<u32> {
        Ok(decode_u32(self.read_field(FieldKind::UInt32)?))
    }

    /// Receive a length-prefixed string as raw bytes
    ///
    /// No text validation is applied; callers decide how to interpret them.
    pub fn get_string(&mut self) -> Result<Vec<u8>> {
        let len = decode_u16(self.read_field(FieldKind::StringLength)?) as usize;
        tracing::trace!("Reading string body of {} bytes", len);
        self.read_exact_vec(FieldKind::StringBody, len)
    }

    /// Receive exactly `len` raw bytes
    pub fn get_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        self.read_exact_vec(FieldKind::Bytes, len)
    }

    fn read_field<const N: usize>(&mut self, kind: FieldKind) -> Result<[u8; N]> {
        debug_assert_eq!(kind.width(), Some(N));
        let mut buf = [0u8; N];
        self.reader
            .read_exact(&mut buf)
            .map_err(|e| AcpError::field(kind, N, e))?;
        Ok(buf)
    }

    fn read_exact_vec(&mut self, kind: FieldKind, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        if len > 0 {
            self.reader
                .read_exact(&mut buf)
                .map_err(|e| AcpError::field(kind, len, e))?;
        }
        Ok(buf)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Flush and unwrap the channel
    ///
    /// The reader is returned still buffered so no inbound bytes are lost.
    pub fn into_inner(self) -> Result<(BufReader<R>, W)> {
        let writer = self
            .writer
            .into_inner()
            .map_err(|e| AcpError::Io(e.into_error()))?;
        Ok((self.reader, writer))
    }
}
