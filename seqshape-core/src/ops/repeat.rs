use crate::error::SeqShapeError;
use crate::ops::{axis_blocks, check_axis};
use crate::tensor::Tensor;

/// Repeats each slice along `axis` `repeats` times, in place along the axis.
///
/// `[a, b]` repeated twice along its axis becomes `[a, a, b, b]`.
pub fn repeat_op(input: &Tensor, repeats: usize, axis: usize) -> Result<Tensor, SeqShapeError> {
    let shape = input.shape();
    check_axis(&shape, axis)?;
    let (outer, axis_len, inner) = axis_blocks(&shape, axis);

    let guard = input.read_data();
    let mut out = Vec::with_capacity(outer * axis_len * repeats * inner);
    for o in 0..outer {
        for k in 0..axis_len {
            let start = (o * axis_len + k) * inner;
            for _ in 0..repeats {
                out.extend_from_slice(&guard.buffer()[start..start + inner]);
            }
        }
    }
    drop(guard);

    let mut out_shape = shape;
    out_shape[axis] = axis_len * repeats;
    Tensor::new(out, out_shape)
}

/// Repeats the whole extent of `axis` `reps` times.
///
/// `[a, b]` tiled twice along its axis becomes `[a, b, a, b]`.
pub fn tile_op(input: &Tensor, reps: usize, axis: usize) -> Result<Tensor, SeqShapeError> {
    let shape = input.shape();
    check_axis(&shape, axis)?;
    let (outer, axis_len, inner) = axis_blocks(&shape, axis);

    let guard = input.read_data();
    let block = axis_len * inner;
    let mut out = Vec::with_capacity(outer * block * reps);
    for o in 0..outer {
        let start = o * block;
        for _ in 0..reps {
            out.extend_from_slice(&guard.buffer()[start..start + block]);
        }
    }
    drop(guard);

    let mut out_shape = shape;
    out_shape[axis] = axis_len * reps;
    Tensor::new(out, out_shape)
}
