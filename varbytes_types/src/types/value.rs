use crate::types::Scalar;
use derive_more::From;

/// What [`crate::serde::Variant::value`] hands back: a bare scalar for
/// shape `[1]`, a list for every other shape.
#[derive(From, PartialEq, Clone, Debug)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Scalar>),
}
