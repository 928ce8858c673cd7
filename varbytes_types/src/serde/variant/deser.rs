use super::elem_count;
use crate::errors::{underflow, CodecError, Result};
use crate::serde::{deser_elems, DimLen, ShapeRank, TypeTag, TypeTagInt, Variant, VariantData};
use std::io::{ErrorKind, Read};

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

impl Variant {
    /// Reads exactly one record. A clean EOF at the tag byte reports stream
    /// exhaustion; EOF at any later point is an underflow. Decoding funnels
    /// through [`Variant::from_data`], so a failed decode never yields a
    /// partial or zero-valued variant.
    pub fn deser<R: Read>(r: &mut R) -> Result<ReadResult<Self>> {
        /* type_tag */
        let (mut r_len, tag_int) = match TypeTagInt::deser(r) {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(ReadResult::EOF),
            Err(e) => return Err(CodecError::Io(e)),
            Ok((r_len, tag_int)) => (r_len, tag_int),
        };
        let tag = TypeTag::try_from(tag_int)?;

        /* rank, dims */
        let (delta_r_len, rank) = ShapeRank::deser(r).map_err(underflow("shape rank"))?;
        r_len += delta_r_len;
        let mut shape = Vec::with_capacity(*rank as usize);
        for _ in 0..*rank {
            let (delta_r_len, dim) = DimLen::deser(r).map_err(underflow("shape dimension"))?;
            r_len += delta_r_len;
            shape.push(*dim);
        }
        let count = elem_count(&shape)?;
        let count = usize::try_from(count).map_err(|_| CodecError::LengthOverflow)?;

        /* payload */
        let (delta_r_len, data) = Self::deser_payload(r, tag, count)?;
        r_len += delta_r_len;

        let variant = Self::from_data(data, shape)?;
        Ok(ReadResult::Some(r_len, variant))
    }

    fn deser_payload<R: Read>(
        r: &mut R,
        tag: TypeTag,
        count: usize,
    ) -> Result<(usize, VariantData)> {
        let (r_len, data) = match tag {
            TypeTag::Bool => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::Bool(v))
            }
            TypeTag::Int8 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::Int8(v))
            }
            TypeTag::UInt8 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::UInt8(v))
            }
            TypeTag::Int16 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::Int16(v))
            }
            TypeTag::UInt16 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::UInt16(v))
            }
            TypeTag::Int32 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::Int32(v))
            }
            TypeTag::UInt32 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::UInt32(v))
            }
            TypeTag::Int64 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::Int64(v))
            }
            TypeTag::UInt64 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::UInt64(v))
            }
            TypeTag::Float32 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::Float32(v))
            }
            TypeTag::Float64 => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::Float64(v))
            }
            TypeTag::String => {
                let (r_len, v) = deser_elems(r, count)?;
                (r_len, VariantData::Str(v))
            }
        };
        Ok((r_len, data))
    }
}
