//! Strongly-typed binary codec for heterogeneous scalar and vector payloads.
//!
//! [`serde::Variant`] is the typed, shaped value container; [`Bytes`] is the
//! sequential type-tagged field stream; [`OutputBuffer`] and [`InputBuffer`]
//! carry an ordered queue of encoded variants over one contiguous byte
//! sequence. The wire format is documented in [`serde`].
//!
//! Every operation is synchronous and in-memory. Each instance exclusively
//! owns its byte storage; sharing one instance across threads requires
//! external synchronization, while distinct instances are fully independent.

mod buffer;
mod errors;
pub mod serde;
mod stream;
pub mod types;

pub use buffer::*;
pub use errors::*;
pub use stream::*;
