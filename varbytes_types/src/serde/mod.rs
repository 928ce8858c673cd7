//! # Serialization format
//!
//! The primitive de/serializable type is [`Variant`].
//!
//! Every record starts with `type_tag`, which is encoded in `u8`.
//! In case we need to deprecate supported tags over time, this allows us
//! `(pow(2, 8) - count_of_active_tags)` deprecations, before rolling over
//! to zero.
//!
//! `rank` and the `u32` dims describe the payload's shape; the element
//! count is the product of the dims. Fixed-width elements are encoded
//! little-endian at their exact width. `string` elements each carry their
//! own byte-length prefix, so readers cannot size a string payload from the
//! shape alone.
//!
//! ```text
//! struct Variant {
//!     type_tag:   u8,
//!     rank:       u8,
//!     dims:       [u32; rank],
//!     payload:    [elem; product(dims)],
//! }
//!
//! elem (bool):                u8, 0 or 1
//! elem (int8 .. uint64):      exact width, little-endian
//! elem (float32 / float64):   IEEE-754, little-endian
//! elem (string):              { byte_len: u32, bytes: [u8; byte_len] }
//! ```

mod element;
mod lengths;
mod type_tag;
mod variant;

pub use element::*;
pub use type_tag::*;
pub use variant::*;
use lengths::*;
