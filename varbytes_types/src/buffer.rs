//! Ordered queue of encoded variant records over one contiguous byte
//! sequence: [`OutputBuffer`] accumulates on the write side, [`InputBuffer`]
//! replays on the read side, strictly in push order.


use crate::errors::{CodecError, Result};
use crate::serde::{ReadResult, Variant, WriteLen};
use std::io::Cursor;

/// Write-side accumulator. `push` copies the variant's encoding and retains
/// no reference to the pushed value. Heterogeneous sequences are allowed.
pub struct OutputBuffer {
    buf: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self { buf: vec![] }
    }

    /// Encodes one variant record and appends it to the accumulator.
    pub fn push(&mut self, variant: &Variant) -> Result<WriteLen> {
        variant.ser(&mut self.buf)
    }

    /// Stable snapshot of everything accumulated so far; never resets.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-side cursor over an immutable byte sequence. Construction decodes
/// nothing; each `pop` decodes exactly one record and advances only on
/// success, so work is bounded by the variants actually popped.
pub struct InputBuffer {
    buf: Vec<u8>,
    offset: usize,
}

impl From<Vec<u8>> for InputBuffer {
    fn from(buf: Vec<u8>) -> Self {
        Self { buf, offset: 0 }
    }
}

impl InputBuffer {
    pub fn from_bytes(buf: Vec<u8>) -> Self {
        Self::from(buf)
    }

    /// Decodes and removes the next variant. Popping past the end, or into
    /// a record with fewer bytes than its header and payload require, is a
    /// [`CodecError::BufferUnderflow`]; the offset does not move on failure.
    pub fn pop(&mut self) -> Result<Variant> {
        let mut r = Cursor::new(&self.buf[self.offset..]);
        match Variant::deser(&mut r)? {
            ReadResult::EOF => Err(CodecError::BufferUnderflow("variant record")),
            ReadResult::Some(r_len, variant) => {
                self.offset += r_len;
                Ok(variant)
            }
        }
    }

    /// Pure position comparison; validates nothing about the remainder.
    pub fn is_empty(&self) -> bool {
        self.offset == self.buf.len()
    }
}
