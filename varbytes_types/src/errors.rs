use crate::serde::TypeTag;
use std::io;
use thiserror::Error;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Everything that can go wrong inside the codec. Nothing is retried and
/// nothing is coerced; every failure is reported to the immediate caller.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A tag or kind byte outside the closed set.
    #[error("unknown type tag byte {0:#04x}")]
    UnsupportedType(u8),

    #[error("a variant may not hold zero elements")]
    EmptyValue,

    #[error("shape {shape:?} calls for {expected} elements, got {actual}")]
    ShapeMismatch {
        shape: Vec<u32>,
        expected: u64,
        actual: u64,
    },

    #[error("value {value} does not fit {tag}")]
    OutOfRange { tag: TypeTag, value: String },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Fewer bytes remained than the next header or payload requires.
    #[error("ran out of bytes while reading {0}")]
    BufferUnderflow(&'static str),

    #[error("list mixes {first} and {other} elements")]
    HeterogeneousList { first: TypeTag, other: TypeTag },

    /// A stream reconstructed from bytes accepts no further writes.
    #[error("stream was reconstructed for reading and rejects writes")]
    ReadOnlyStream,

    #[error("rank {0} exceeds the wire format's 255 limit")]
    RankOverflow(usize),

    #[error("a length exceeds the wire format's u32 limit")]
    LengthOverflow,

    #[error("string payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Maps a reader's `UnexpectedEof` onto an underflow with context; any other
/// I/O failure propagates as-is.
pub(crate) fn underflow(what: &'static str) -> impl FnOnce(io::Error) -> CodecError {
    move |e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::BufferUnderflow(what)
        } else {
            CodecError::Io(e)
        }
    }
}
