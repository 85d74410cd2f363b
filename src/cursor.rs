//! The seekable byte substrate that encode/decode runs on.
//!
//! [`Cursor`] knows nothing about tags; it is pure I/O plumbing. It exists
//! because speculative decoding needs a cheap position snapshot ([`Cursor::cur`])
//! and restore ([`Cursor::seek`]) on top of the usual sequential reads, which a
//! plain `Bytes` handle cannot express.
//!
//! All multi-byte values are big-endian, per the wire format.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::{NbtError, Result};

/// An opaque position marker captured with [`Cursor::cur`].
///
/// Only meaningful for the cursor it was obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// A sequential big-endian reader/writer over an in-memory buffer.
///
/// Writes always append to the end of the buffer; the position tracked by
/// [`Cursor::cur`]/[`Cursor::seek`] only governs reads. `peek` and `cur` never
/// advance the position; `get` and every typed read do.
#[derive(Debug, Default, Clone)]
pub struct Cursor {
    buf: BytesMut,
    pos: usize,
}

impl Cursor {
    /// Creates an empty cursor, ready for encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor over a copy of `data`, positioned at its start.
    pub fn from_slice(data: &[u8]) -> Self {
        Cursor {
            buf: BytesMut::from(data),
            pos: 0,
        }
    }

    /// Total number of bytes in the backing buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the backing buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of unread bytes between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The full contents of the backing buffer, independent of position.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the cursor and freezes the buffer.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    // --- Position ---

    /// Returns the next unread byte without advancing the position.
    pub fn peek(&self) -> Result<u8> {
        self.buf.get(self.pos).copied().ok_or(NbtError::EndOfBuffer)
    }

    /// Returns the next unread byte and advances the position by one.
    pub fn get(&mut self) -> Result<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Captures the current read position.
    pub fn cur(&self) -> Mark {
        Mark(self.pos)
    }

    /// Restores the read position to a previously captured mark.
    pub fn seek(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    /// Resets the read position to the start of the buffer.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Consumes and returns the next `n` unread bytes.
    pub fn get_slice(&mut self, n: usize) -> Result<&[u8]> {
        if self.remaining() < n {
            return Err(NbtError::EndOfBuffer);
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    // --- Typed reads ---

    pub fn get_u8(&mut self) -> Result<u8> {
        self.get()
    }

    pub fn get_i8(&mut self) -> Result<i8> {
        Ok(self.get()? as i8)
    }

    pub fn get_u16(&mut self) -> Result<u16> {
        let mut bytes = self.get_slice(2)?;
        Ok(bytes.get_u16())
    }

    pub fn get_i16(&mut self) -> Result<i16> {
        let mut bytes = self.get_slice(2)?;
        Ok(bytes.get_i16())
    }

    pub fn get_i32(&mut self) -> Result<i32> {
        let mut bytes = self.get_slice(4)?;
        Ok(bytes.get_i32())
    }

    pub fn get_i64(&mut self) -> Result<i64> {
        let mut bytes = self.get_slice(8)?;
        Ok(bytes.get_i64())
    }

    pub fn get_f32(&mut self) -> Result<f32> {
        let mut bytes = self.get_slice(4)?;
        Ok(bytes.get_f32())
    }

    pub fn get_f64(&mut self) -> Result<f64> {
        let mut bytes = self.get_slice(8)?;
        Ok(bytes.get_f64())
    }

    /// Reads a length-prefixed UTF-8 string (16-bit big-endian length).
    pub fn get_string(&mut self) -> Result<String> {
        let len = self.get_u16()? as usize;
        let bytes = self.get_slice(len)?.to_vec();
        Ok(String::from_utf8(bytes)?)
    }

    // --- Typed writes ---

    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn put_i8(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    pub fn put_i16(&mut self, value: i16) {
        self.buf.put_i16(value);
    }

    pub fn put_i32(&mut self, value: i32) {
        self.buf.put_i32(value);
    }

    pub fn put_i64(&mut self, value: i64) {
        self.buf.put_i64(value);
    }

    pub fn put_f32(&mut self, value: f32) {
        self.buf.put_f32(value);
    }

    pub fn put_f64(&mut self, value: f64) {
        self.buf.put_f64(value);
    }

    pub fn put_slice(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Writes a length-prefixed UTF-8 string (16-bit big-endian length).
    ///
    /// # Errors
    /// Returns `StringTooLong` if the string has more bytes than the 16-bit
    /// length prefix can express.
    pub fn put_string(&mut self, value: &str) -> Result<()> {
        if value.len() > u16::MAX as usize {
            return Err(NbtError::StringTooLong(value.len()));
        }
        self.buf.put_u16(value.len() as u16);
        self.buf.put_slice(value.as_bytes());
        Ok(())
    }
}

impl From<&[u8]> for Cursor {
    fn from(data: &[u8]) -> Self {
        Cursor::from_slice(data)
    }
}

impl From<Vec<u8>> for Cursor {
    fn from(data: Vec<u8>) -> Self {
        Cursor::from_slice(&data)
    }
}
