use crate::errors::{CodecError, Result};
use derive_more::Deref;
use std::io::{self, Read};
use std::mem;

#[derive(Deref, Clone, Copy)]
pub struct ShapeRank(u8);
impl ShapeRank {
    pub fn from_shape(shape: &[u32]) -> Result<Self> {
        let rank = u8::try_from(shape.len()).map_err(|_| CodecError::RankOverflow(shape.len()))?;
        Ok(Self(rank))
    }
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; mem::size_of::<u8>()];
        r.read_exact(&mut buf)?;
        Ok((buf.len(), Self(buf[0])))
    }
}

#[derive(Deref, Clone, Copy)]
pub struct DimLen(u32);
impl DimLen {
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; mem::size_of::<u32>()];
        r.read_exact(&mut buf)?;
        let int = u32::from_le_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}

#[derive(Deref, Clone, Copy)]
pub struct StrByteLen(u32);
impl StrByteLen {
    pub fn from_str_body(buf: &[u8]) -> Result<Self> {
        let int = u32::try_from(buf.len()).map_err(|_| CodecError::LengthOverflow)?;
        Ok(Self(int))
    }
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; mem::size_of::<u32>()];
        r.read_exact(&mut buf)?;
        let int = u32::from_le_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}
