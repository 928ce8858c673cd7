use crate::errors::{underflow, CodecError, Result};
use crate::serde::{TypeTag, TypeTagInt};
use derive_more::Deref;
use std::fmt;
use std::io::{self, Read};
use std::mem;

/// High bit of the kind byte marks the vector form of a field.
const VEC_FLAG: u8 = 0x80;

/// The declared form of one stream field: a bare element, or a
/// length-prefixed vector of one tag's elements.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FieldKind {
    Scalar(TypeTag),
    Vector(TypeTag),
}

impl FieldKind {
    pub(crate) fn to_byte(self) -> u8 {
        match self {
            Self::Scalar(tag) => *TypeTagInt::from(tag),
            Self::Vector(tag) => *TypeTagInt::from(tag) | VEC_FLAG,
        }
    }

    pub(crate) fn try_from_byte(byte: u8) -> Result<Self> {
        let tag_int = TypeTagInt::from(byte & !VEC_FLAG);
        let tag =
            TypeTag::try_from(tag_int).map_err(|_| CodecError::UnsupportedType(byte))?;
        if byte & VEC_FLAG == 0 {
            Ok(Self::Scalar(tag))
        } else {
            Ok(Self::Vector(tag))
        }
    }

    pub(crate) fn deser(r: &mut impl Read) -> Result<(usize, Self)> {
        let mut buf = [0u8; 1];
        r.read_exact(&mut buf).map_err(underflow("field kind byte"))?;
        let kind = Self::try_from_byte(buf[0])?;
        Ok((buf.len(), kind))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(tag) => write!(f, "scalar {}", tag),
            Self::Vector(tag) => write!(f, "vector of {}", tag),
        }
    }
}

#[derive(Deref, Clone, Copy)]
pub(crate) struct VecLen(u32);
impl VecLen {
    pub fn from_elems<T>(elems: &[T]) -> Result<Self> {
        let int = u32::try_from(elems.len()).map_err(|_| CodecError::LengthOverflow)?;
        Ok(Self(int))
    }
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; mem::size_of::<u32>()];
        r.read_exact(&mut buf)?;
        let int = u32::from_le_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}
