use crate::errors::CodecError;
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt;
use std::io::{self, Read};
use std::mem;

#[derive(From, Deref, Clone, Copy)]
pub struct TypeTagInt(u8);
impl From<TypeTag> for TypeTagInt {
    fn from(tag: TypeTag) -> Self {
        let int = tag.to_u8().unwrap();
        Self(int)
    }
}
impl TypeTagInt {
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; mem::size_of::<u8>()];
        r.read_exact(&mut buf)?;
        let int = u8::from_le_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}

/// We manually map enum members to tag bytes because:
/// - The wire format pins each tag byte forever; an automatic discriminant
///   may change w/ enum definition change or compilation, according to
///   [`std::mem::discriminant()`] doc.
/// - The set is closed and totally ordered; decoding any byte outside it is
///   a fatal format error.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum TypeTag {
    Bool = 0,
    Int8 = 1,
    UInt8 = 2,
    Int16 = 3,
    UInt16 = 4,
    Int32 = 5,
    UInt32 = 6,
    Int64 = 7,
    UInt64 = 8,
    Float32 = 9,
    Float64 = 10,
    String = 11,
}
impl TryFrom<TypeTagInt> for TypeTag {
    type Error = CodecError;
    fn try_from(int: TypeTagInt) -> Result<Self, CodecError> {
        TypeTag::from_u8(int.0).ok_or(CodecError::UnsupportedType(int.0))
    }
}

impl TypeTag {
    /// Fixed per-element encoding width in bytes. `None` for `string`, whose
    /// elements carry their own length prefix.
    pub fn elem_width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float32 => Some(4),
            Self::Int64 | Self::UInt64 | Self::Float64 => Some(8),
            Self::String => None,
        }
    }

    /// The whole closed set, in tag-byte order.
    pub fn all() -> [Self; 12] {
        [
            Self::Bool,
            Self::Int8,
            Self::UInt8,
            Self::Int16,
            Self::UInt16,
            Self::Int32,
            Self::UInt32,
            Self::Int64,
            Self::UInt64,
            Self::Float32,
            Self::Float64,
            Self::String,
        ]
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
        };
        f.write_str(name)
    }
}
