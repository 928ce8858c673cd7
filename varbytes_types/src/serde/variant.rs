use crate::errors::{CodecError, Result};
use crate::serde::TypeTag;
use crate::types::{Scalar, Value};

mod deser;
mod ser;
mod variant_test;
pub use deser::*;
pub use ser::*;

/// Flat element storage for one variant. The arm implies the tag, so the
/// tag and the runtime representation of the elements cannot disagree.
#[derive(PartialEq, Clone, Debug)]
pub enum VariantData {
    Bool(Vec<bool>),
    Int8(Vec<i8>),
    UInt8(Vec<u8>),
    Int16(Vec<i16>),
    UInt16(Vec<u16>),
    Int32(Vec<i32>),
    UInt32(Vec<u32>),
    Int64(Vec<i64>),
    UInt64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Str(Vec<String>),
}

impl From<&VariantData> for TypeTag {
    fn from(data: &VariantData) -> Self {
        match data {
            VariantData::Bool(_) => TypeTag::Bool,
            VariantData::Int8(_) => TypeTag::Int8,
            VariantData::UInt8(_) => TypeTag::UInt8,
            VariantData::Int16(_) => TypeTag::Int16,
            VariantData::UInt16(_) => TypeTag::UInt16,
            VariantData::Int32(_) => TypeTag::Int32,
            VariantData::UInt32(_) => TypeTag::UInt32,
            VariantData::Int64(_) => TypeTag::Int64,
            VariantData::UInt64(_) => TypeTag::UInt64,
            VariantData::Float32(_) => TypeTag::Float32,
            VariantData::Float64(_) => TypeTag::Float64,
            VariantData::Str(_) => TypeTag::String,
        }
    }
}

impl From<Scalar> for VariantData {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(v) => Self::Bool(vec![v]),
            Scalar::Int8(v) => Self::Int8(vec![v]),
            Scalar::UInt8(v) => Self::UInt8(vec![v]),
            Scalar::Int16(v) => Self::Int16(vec![v]),
            Scalar::UInt16(v) => Self::UInt16(vec![v]),
            Scalar::Int32(v) => Self::Int32(vec![v]),
            Scalar::UInt32(v) => Self::UInt32(vec![v]),
            Scalar::Int64(v) => Self::Int64(vec![v]),
            Scalar::UInt64(v) => Self::UInt64(vec![v]),
            Scalar::Float32(v) => Self::Float32(vec![v]),
            Scalar::Float64(v) => Self::Float64(vec![v]),
            Scalar::Str(v) => Self::Str(vec![v]),
        }
    }
}

impl VariantData {
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::Int8(v) => v.len(),
            Self::UInt8(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::UInt16(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::UInt32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::UInt64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Str(v) => v.len(),
        }
    }

    /// Converts native values into the exact representation `tag` declares.
    /// Integers narrow with a range check, never by truncation.
    fn from_scalars(tag: TypeTag, scalars: Vec<Scalar>) -> Result<Self> {
        fn conv<T>(scalars: Vec<Scalar>, f: impl Fn(Scalar) -> Result<T>) -> Result<Vec<T>> {
            scalars.into_iter().map(f).collect()
        }

        let data = match tag {
            TypeTag::Bool => Self::Bool(conv(scalars, |s| s.into_bool())?),
            TypeTag::Int8 => Self::Int8(conv(scalars, |s| s.narrow_int(tag))?),
            TypeTag::UInt8 => Self::UInt8(conv(scalars, |s| s.narrow_int(tag))?),
            TypeTag::Int16 => Self::Int16(conv(scalars, |s| s.narrow_int(tag))?),
            TypeTag::UInt16 => Self::UInt16(conv(scalars, |s| s.narrow_int(tag))?),
            TypeTag::Int32 => Self::Int32(conv(scalars, |s| s.narrow_int(tag))?),
            TypeTag::UInt32 => Self::UInt32(conv(scalars, |s| s.narrow_int(tag))?),
            TypeTag::Int64 => Self::Int64(conv(scalars, |s| s.narrow_int(tag))?),
            TypeTag::UInt64 => Self::UInt64(conv(scalars, |s| s.narrow_int(tag))?),
            TypeTag::Float32 => Self::Float32(conv(scalars, |s| s.narrow_f32())?),
            TypeTag::Float64 => Self::Float64(conv(scalars, |s| s.narrow_f64())?),
            TypeTag::String => Self::Str(conv(scalars, |s| s.into_string())?),
        };
        Ok(data)
    }

    fn to_scalars(&self) -> Vec<Scalar> {
        match self {
            Self::Bool(v) => v.iter().map(|x| Scalar::Bool(*x)).collect(),
            Self::Int8(v) => v.iter().map(|x| Scalar::Int8(*x)).collect(),
            Self::UInt8(v) => v.iter().map(|x| Scalar::UInt8(*x)).collect(),
            Self::Int16(v) => v.iter().map(|x| Scalar::Int16(*x)).collect(),
            Self::UInt16(v) => v.iter().map(|x| Scalar::UInt16(*x)).collect(),
            Self::Int32(v) => v.iter().map(|x| Scalar::Int32(*x)).collect(),
            Self::UInt32(v) => v.iter().map(|x| Scalar::UInt32(*x)).collect(),
            Self::Int64(v) => v.iter().map(|x| Scalar::Int64(*x)).collect(),
            Self::UInt64(v) => v.iter().map(|x| Scalar::UInt64(*x)).collect(),
            Self::Float32(v) => v.iter().map(|x| Scalar::Float32(*x)).collect(),
            Self::Float64(v) => v.iter().map(|x| Scalar::Float64(*x)).collect(),
            Self::Str(v) => v.iter().cloned().map(Scalar::Str).collect(),
        }
    }
}

/// A typed, shaped, immutable value container. `shape == [1]` denotes a
/// scalar; [`Variant::scalar`] and [`Variant::list`] only ever produce rank
/// 1, but the representation and the wire format carry an explicit rank so
/// higher ranks need no format change.
#[derive(PartialEq, Clone, Debug)]
pub struct Variant {
    shape: Vec<u32>,
    data: VariantData,
}

impl Variant {
    /// The checked core all construction and decoding funnel through:
    /// rejects zero elements and any shape whose dim product disagrees with
    /// the element count.
    pub fn from_data(data: VariantData, shape: Vec<u32>) -> Result<Self> {
        if data.len() == 0 {
            return Err(CodecError::EmptyValue);
        }
        // Rank 0 never matches a non-empty payload.
        let expected = if shape.is_empty() {
            0
        } else {
            elem_count(&shape)?
        };
        let actual = data.len() as u64;
        if expected != actual {
            return Err(CodecError::ShapeMismatch {
                shape,
                expected,
                actual,
            });
        }
        Ok(Self { shape, data })
    }

    /// One native value, shape `[1]`. The tag is the value's exact width.
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Self {
            shape: vec![1],
            data: VariantData::from(value.into()),
        }
    }

    /// A native list, shape `[len]`. The tag is inferred from the first
    /// element; a mixed-kind list fails fast rather than taking the first
    /// element's kind on faith.
    pub fn list(values: Vec<Scalar>) -> Result<Self> {
        let first = match values.first() {
            None => return Err(CodecError::EmptyValue),
            Some(first) => first.tag(),
        };
        if let Some(other) = values.iter().map(Scalar::tag).find(|tag| *tag != first) {
            return Err(CodecError::HeterogeneousList { first, other });
        }
        let len = u32::try_from(values.len()).map_err(|_| CodecError::LengthOverflow)?;
        let data = VariantData::from_scalars(first, values)?;
        Ok(Self {
            shape: vec![len],
            data,
        })
    }

    /// Explicit-tag factory over native values: each value must be of the
    /// declared kind and inside the declared width.
    pub fn from_values(tag: TypeTag, shape: Vec<u32>, values: Vec<Scalar>) -> Result<Self> {
        let data = VariantData::from_scalars(tag, values)?;
        Self::from_data(data, shape)
    }

    pub fn tag(&self) -> TypeTag {
        TypeTag::from(&self.data)
    }

    pub fn shape(&self) -> &[u32] {
        &self.shape
    }

    pub fn is_scalar(&self) -> bool {
        self.shape == [1]
    }

    pub fn data(&self) -> &VariantData {
        &self.data
    }

    /// The native rendering: a bare scalar iff the shape is `[1]`, else a
    /// list. Dispatches on the stored shape, never on the caller.
    pub fn value(&self) -> Value {
        let mut scalars = self.data.to_scalars();
        if self.is_scalar() {
            Value::Scalar(scalars.remove(0))
        } else {
            Value::List(scalars)
        }
    }
}

pub(crate) fn elem_count(shape: &[u32]) -> Result<u64> {
    shape
        .iter()
        .try_fold(1u64, |acc, dim| acc.checked_mul(u64::from(*dim)))
        .ok_or(CodecError::LengthOverflow)
}
