use crate::errors::{underflow, Result};
use crate::serde::{StrByteLen, TypeTag};
use std::io::{Read, Write};
use std::mem;

/// Per-element wire codec for one supported tag. The variant payload codec
/// and the field stream both encode elements through this seam, so the two
/// record formats can never disagree on an element's encoding.
pub trait Element: Sized {
    const TAG: TypeTag;
    fn ser_elem<W: Write>(&self, w: &mut W) -> Result<usize>;
    fn deser_elem<R: Read>(r: &mut R) -> Result<(usize, Self)>;
}

macro_rules! fixed_width_element {
    ($($ty:ty => $tag:expr),+ $(,)?) => {$(
        impl Element for $ty {
            const TAG: TypeTag = $tag;
            fn ser_elem<W: Write>(&self, w: &mut W) -> Result<usize> {
                let w_len = w.write(&self.to_le_bytes())?;
                Ok(w_len)
            }
            fn deser_elem<R: Read>(r: &mut R) -> Result<(usize, Self)> {
                let mut buf = [0u8; mem::size_of::<$ty>()];
                r.read_exact(&mut buf)
                    .map_err(underflow(concat!(stringify!($ty), " element")))?;
                Ok((buf.len(), <$ty>::from_le_bytes(buf)))
            }
        }
    )+};
}

fixed_width_element! {
    i8 => TypeTag::Int8,
    u8 => TypeTag::UInt8,
    i16 => TypeTag::Int16,
    u16 => TypeTag::UInt16,
    i32 => TypeTag::Int32,
    u32 => TypeTag::UInt32,
    i64 => TypeTag::Int64,
    u64 => TypeTag::UInt64,
    f32 => TypeTag::Float32,
    f64 => TypeTag::Float64,
}

impl Element for bool {
    const TAG: TypeTag = TypeTag::Bool;
    fn ser_elem<W: Write>(&self, w: &mut W) -> Result<usize> {
        let w_len = w.write(&[*self as u8])?;
        Ok(w_len)
    }
    fn deser_elem<R: Read>(r: &mut R) -> Result<(usize, Self)> {
        let mut buf = [0u8; 1];
        r.read_exact(&mut buf).map_err(underflow("bool element"))?;
        // Any nonzero byte decodes as true; encoding always emits 0 or 1.
        Ok((buf.len(), buf[0] != 0))
    }
}

impl Element for String {
    const TAG: TypeTag = TypeTag::String;
    fn ser_elem<W: Write>(&self, w: &mut W) -> Result<usize> {
        let body_len = StrByteLen::from_str_body(self.as_bytes())?;
        let mut w_len = w.write(&body_len.to_le_bytes())?;
        w_len += w.write(self.as_bytes())?;
        Ok(w_len)
    }
    fn deser_elem<R: Read>(r: &mut R) -> Result<(usize, Self)> {
        let (mut r_len, body_len) =
            StrByteLen::deser(r).map_err(underflow("string length prefix"))?;
        let mut buf = vec![0u8; *body_len as usize];
        r.read_exact(&mut buf).map_err(underflow("string payload"))?;
        r_len += buf.len();
        let s = String::from_utf8(buf)?;
        Ok((r_len, s))
    }
}

/// Appends every element in order; returns the total written length.
pub fn ser_elems<T: Element, W: Write>(elems: &[T], w: &mut W) -> Result<usize> {
    let mut w_len = 0;
    for elem in elems {
        w_len += elem.ser_elem(w)?;
    }
    Ok(w_len)
}

/// Reads exactly `count` elements; returns the total consumed length.
pub fn deser_elems<T: Element, R: Read>(r: &mut R, count: usize) -> Result<(usize, Vec<T>)> {
    let mut r_len = 0;
    let mut elems = Vec::with_capacity(count);
    for _ in 0..count {
        let (delta_r_len, elem) = T::deser_elem(r)?;
        r_len += delta_r_len;
        elems.push(elem);
    }
    Ok((r_len, elems))
}
