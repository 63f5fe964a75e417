//! Serialized form of [`Array`]
//!
//! Arrays serialize as `{ "shape": [..], "data": [..] }`. Deserialization goes
//! through [`Array::from_vec`], so malformed input is rejected with the same
//! errors as direct construction and strides are always recomputed. The empty
//! state serializes as an empty shape with no data.

use serde::{Deserialize, Serialize};

use super::types::Array;
use crate::error::ArrayError;

#[derive(Serialize, Deserialize)]
pub(crate) struct ArrayRepr {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl TryFrom<ArrayRepr> for Array {
    type Error = ArrayError;

    fn try_from(repr: ArrayRepr) -> Result<Self, Self::Error> {
        if repr.shape.is_empty() && repr.data.is_empty() {
            return Ok(Array::default());
        }
        Array::from_vec(repr.data, &repr.shape)
    }
}

impl From<Array> for ArrayRepr {
    fn from(array: Array) -> Self {
        Self {
            shape: array.shape().to_vec(),
            data: array.into_vec(),
        }
    }
}
