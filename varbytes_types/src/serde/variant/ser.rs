use crate::errors::Result;
use crate::serde::{ser_elems, ShapeRank, TypeTagInt, Variant, VariantData};
use derive_more::Deref;
use std::io::Write;

#[derive(Deref)]
pub struct WriteLen(usize);

impl Variant {
    /// Appends exactly one record: tag, rank, dims, then the flat payload.
    pub fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        let mut w_len = 0;

        /* type_tag */
        let tag = TypeTagInt::from(self.tag());
        w_len += w.write(&tag.to_le_bytes())?;

        /* rank, dims */
        let rank = ShapeRank::from_shape(self.shape())?;
        w_len += w.write(&rank.to_le_bytes())?;
        for dim in self.shape() {
            w_len += w.write(&dim.to_le_bytes())?;
        }

        /* payload */
        w_len += match &self.data {
            VariantData::Bool(v) => ser_elems(v, w)?,
            VariantData::Int8(v) => ser_elems(v, w)?,
            VariantData::UInt8(v) => ser_elems(v, w)?,
            VariantData::Int16(v) => ser_elems(v, w)?,
            VariantData::UInt16(v) => ser_elems(v, w)?,
            VariantData::Int32(v) => ser_elems(v, w)?,
            VariantData::UInt32(v) => ser_elems(v, w)?,
            VariantData::Int64(v) => ser_elems(v, w)?,
            VariantData::UInt64(v) => ser_elems(v, w)?,
            VariantData::Float32(v) => ser_elems(v, w)?,
            VariantData::Float64(v) => ser_elems(v, w)?,
            VariantData::Str(v) => ser_elems(v, w)?,
        };

        Ok(WriteLen(w_len))
    }
}
