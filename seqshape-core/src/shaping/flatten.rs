use crate::error::SeqShapeError;
use crate::ops::view::reshape_op;
use crate::tensor::Tensor;

/// Merges the two leading dimensions into one, leaving the others as is.
///
/// A `(time, batch, ...)` tensor becomes `(time * batch, ...)`. Rows stay in
/// time-major order, so reshaping the result back to `(time, batch, ...)`
/// recovers the input exactly.
pub fn flatten_time_batch(source: &Tensor) -> Result<Tensor, SeqShapeError> {
    let shape = source.shape();
    if shape.len() < 2 {
        return Err(SeqShapeError::RankMismatch {
            operation: "flatten_time_batch".to_string(),
            expected: 2,
            actual: shape.len(),
        });
    }

    let mut new_shape = Vec::with_capacity(shape.len() - 1);
    new_shape.push(shape[0] * shape[1]);
    new_shape.extend_from_slice(&shape[2..]);
    reshape_op(source, new_shape)
}
