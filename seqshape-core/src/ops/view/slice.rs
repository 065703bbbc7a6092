use crate::error::SeqShapeError;
use crate::ops::{axis_blocks, check_axis};
use crate::tensor::Tensor;

/// Copies the `start..end` sub-range of one axis, leaving other axes intact.
pub fn slice_axis_op(
    input: &Tensor,
    axis: usize,
    start: usize,
    end: usize,
) -> Result<Tensor, SeqShapeError> {
    let shape = input.shape();
    check_axis(&shape, axis)?;
    let (outer, axis_len, inner) = axis_blocks(&shape, axis);
    if start > end || end > axis_len {
        return Err(SeqShapeError::SliceOutOfRange {
            start,
            end,
            axis_len,
        });
    }

    let guard = input.read_data();
    let kept = end - start;
    let mut out = Vec::with_capacity(outer * kept * inner);
    for o in 0..outer {
        let base = (o * axis_len + start) * inner;
        out.extend_from_slice(&guard.buffer()[base..base + kept * inner]);
    }
    drop(guard);

    let mut out_shape = shape;
    out_shape[axis] = kept;
    Tensor::new(out, out_shape)
}
