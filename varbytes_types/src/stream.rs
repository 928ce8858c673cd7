//! Sequential, type-tagged field stream.
//!
//! Each field carries its own kind byte: the tag byte for the scalar form,
//! the tag byte with the high bit set for the vector form. A read that
//! requests a different tag or form than the kind byte records fails
//! without consuming anything.
//!
//! ```text
//! struct ScalarField {
//!     kind:       u8,             // tag byte
//!     payload:    elem,
//! }
//!
//! struct VectorField {
//!     kind:       u8,             // tag byte | 0x80
//!     len:        u32,
//!     payload:    [elem; len],
//! }
//! ```

mod field;
mod stream_test;

pub use field::*;

use crate::errors::{underflow, CodecError, Result};
use crate::serde::{deser_elems, ser_elems, Element};
use std::io::{Cursor, Write};

/// An append-only sequence of tagged fields with an independent read cursor.
///
/// Writes accumulate strictly in call order; reads consume fields in that
/// same order. A stream reconstructed with [`Bytes::from_bytes`] is
/// read-only. Reading and writing one instance from multiple threads is not
/// supported; wrap it in external synchronization instead. Distinct
/// instances are fully independent.
pub struct Bytes {
    buf: Vec<u8>,
    cursor: usize,
    writable: bool,
}

impl Bytes {
    pub fn new() -> Self {
        Self {
            buf: vec![],
            cursor: 0,
            writable: true,
        }
    }

    /// Reconstructs a stream from an export, cursor at offset 0. The result
    /// rejects every write with [`CodecError::ReadOnlyStream`].
    pub fn from_bytes(buf: Vec<u8>) -> Self {
        Self {
            buf,
            cursor: 0,
            writable: false,
        }
    }

    /// The full accumulated byte sequence, independent of the read cursor.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buf.clone()
    }

    /// Appends one scalar field of `T`'s tag.
    pub fn set<T: Element>(&mut self, val: T) -> Result<()> {
        let w = self.writable_buf()?;
        w.write_all(&[FieldKind::Scalar(T::TAG).to_byte()])?;
        val.ser_elem(w)?;
        Ok(())
    }

    /// Appends one vector field of `T`'s tag, with a `u32` length prefix.
    pub fn set_vec<T: Element>(&mut self, vals: &[T]) -> Result<()> {
        let len = VecLen::from_elems(vals)?;
        let w = self.writable_buf()?;
        w.write_all(&[FieldKind::Vector(T::TAG).to_byte()])?;
        w.write_all(&len.to_le_bytes())?;
        ser_elems(vals, w)?;
        Ok(())
    }

    /// Reads the scalar field at the cursor. A mismatched tag or form is a
    /// [`CodecError::TypeMismatch`] and leaves the cursor in place; reading
    /// past the last field is a [`CodecError::BufferUnderflow`].
    pub fn get<T: Element>(&mut self) -> Result<T> {
        let mut r = Cursor::new(&self.buf[self.cursor..]);
        let (mut r_len, found) = FieldKind::deser(&mut r)?;
        let requested = FieldKind::Scalar(T::TAG);
        if found != requested {
            return Err(CodecError::TypeMismatch {
                expected: requested.to_string(),
                found: found.to_string(),
            });
        }
        let (delta_r_len, val) = T::deser_elem(&mut r)?;
        r_len += delta_r_len;
        self.cursor += r_len;
        Ok(val)
    }

    /// Reads the vector field at the cursor; same failure contract as
    /// [`Bytes::get`].
    pub fn get_vec<T: Element>(&mut self) -> Result<Vec<T>> {
        let mut r = Cursor::new(&self.buf[self.cursor..]);
        let (mut r_len, found) = FieldKind::deser(&mut r)?;
        let requested = FieldKind::Vector(T::TAG);
        if found != requested {
            return Err(CodecError::TypeMismatch {
                expected: requested.to_string(),
                found: found.to_string(),
            });
        }
        let (delta_r_len, len) = VecLen::deser(&mut r).map_err(underflow("vector length prefix"))?;
        r_len += delta_r_len;
        let (delta_r_len, vals) = deser_elems(&mut r, *len as usize)?;
        r_len += delta_r_len;
        self.cursor += r_len;
        Ok(vals)
    }

    fn writable_buf(&mut self) -> Result<&mut Vec<u8>> {
        if self.writable {
            Ok(&mut self.buf)
        } else {
            Err(CodecError::ReadOnlyStream)
        }
    }
}

impl Default for Bytes {
    fn default() -> Self {
        Self::new()
    }
}
