use crate::errors::{CodecError, Result};
use crate::serde::TypeTag;
use derive_more::From;

/// One native element value at its exact width.
///
/// `From` is implemented per Rust primitive, so tag inference is simply the
/// value's own width: `i64` infers `int64`, `u16` infers `uint16`, `f64`
/// infers `float64`, text infers `string`.
#[derive(From, PartialEq, Clone, Debug)]
pub enum Scalar {
    Bool(bool),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Str(String),
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl Scalar {
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Bool(_) => TypeTag::Bool,
            Self::Int8(_) => TypeTag::Int8,
            Self::UInt8(_) => TypeTag::UInt8,
            Self::Int16(_) => TypeTag::Int16,
            Self::UInt16(_) => TypeTag::UInt16,
            Self::Int32(_) => TypeTag::Int32,
            Self::UInt32(_) => TypeTag::UInt32,
            Self::Int64(_) => TypeTag::Int64,
            Self::UInt64(_) => TypeTag::UInt64,
            Self::Float32(_) => TypeTag::Float32,
            Self::Float64(_) => TypeTag::Float64,
            Self::Str(_) => TypeTag::String,
        }
    }

    fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int8(v) => Some(i128::from(*v)),
            Self::UInt8(v) => Some(i128::from(*v)),
            Self::Int16(v) => Some(i128::from(*v)),
            Self::UInt16(v) => Some(i128::from(*v)),
            Self::Int32(v) => Some(i128::from(*v)),
            Self::UInt32(v) => Some(i128::from(*v)),
            Self::Int64(v) => Some(i128::from(*v)),
            Self::UInt64(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    pub(crate) fn into_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            other => Err(other.mismatch(TypeTag::Bool)),
        }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        match self {
            Self::Str(v) => Ok(v),
            other => Err(other.mismatch(TypeTag::String)),
        }
    }

    /// Any integer kind narrows to `tag`'s width iff the value fits exactly.
    pub(crate) fn narrow_int<T: TryFrom<i128>>(self, tag: TypeTag) -> Result<T> {
        let wide = match self.as_int() {
            None => return Err(self.mismatch(tag)),
            Some(wide) => wide,
        };
        T::try_from(wide).map_err(|_| CodecError::OutOfRange {
            tag,
            value: wide.to_string(),
        })
    }

    pub(crate) fn narrow_f32(self) -> Result<f32> {
        match self {
            Self::Float32(v) => Ok(v),
            Self::Float64(v) => {
                let narrowed = v as f32;
                if narrowed.is_infinite() && v.is_finite() {
                    return Err(CodecError::OutOfRange {
                        tag: TypeTag::Float32,
                        value: v.to_string(),
                    });
                }
                Ok(narrowed)
            }
            other => Err(other.mismatch(TypeTag::Float32)),
        }
    }

    pub(crate) fn narrow_f64(self) -> Result<f64> {
        match self {
            Self::Float32(v) => Ok(f64::from(v)),
            Self::Float64(v) => Ok(v),
            other => Err(other.mismatch(TypeTag::Float64)),
        }
    }

    fn mismatch(&self, want: TypeTag) -> CodecError {
        CodecError::TypeMismatch {
            expected: want.to_string(),
            found: self.tag().to_string(),
        }
    }
}
