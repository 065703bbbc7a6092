use crate::error::SeqShapeError;
use crate::ops::check_axis;
use crate::ops::concat::concat_op;
use crate::ops::repeat::{repeat_op, tile_op};
use crate::ops::view::slice_axis_op;
use crate::tensor::Tensor;

/// Grows or shrinks one axis to exactly `target_axis_len`.
///
/// When the target exceeds the current length, the missing tail is filled
/// with repeated `pad_value` slices (zeros by default). A custom `pad_value`
/// must have size 1 along `axis`; its other dimensions must match the source
/// or be 1, in which case they are broadcast up. When the target does not
/// exceed the current length, the source is simply truncated and no padding
/// slice is ever materialized.
pub fn pad_axis(
    source: &Tensor,
    axis: usize,
    target_axis_len: usize,
    pad_value: Option<&Tensor>,
) -> Result<Tensor, SeqShapeError> {
    let shape = source.shape();
    check_axis(&shape, axis)?;

    let current = shape[axis];
    if target_axis_len <= current {
        return slice_axis_op(source, axis, 0, target_axis_len);
    }
    let num_missing = target_axis_len - current;

    let filler_shape: Vec<usize> = shape
        .iter()
        .enumerate()
        .map(|(dim, &size)| if dim == axis { 1 } else { size })
        .collect();

    let filler = match pad_value {
        None => Tensor::zeros(filler_shape)?,
        Some(value) => broadcast_filler(value, &shape, &filler_shape, axis)?,
    };

    let tail = repeat_op(&filler, num_missing, axis)?;
    concat_op(&[source.clone(), tail], axis)
}

/// Validates a custom pad value and broadcasts its size-1 dimensions up to
/// the source's sizes.
fn broadcast_filler(
    value: &Tensor,
    source_shape: &[usize],
    filler_shape: &[usize],
    axis: usize,
) -> Result<Tensor, SeqShapeError> {
    let value_shape = value.shape();
    if value_shape.len() != source_shape.len() || value_shape[axis] != 1 {
        return Err(SeqShapeError::ShapeMismatch {
            expected: filler_shape.to_vec(),
            actual: value_shape,
            operation: "pad_axis (pad_value)".to_string(),
        });
    }

    let mut filler = value.clone();
    for dim in 0..source_shape.len() {
        if dim == axis {
            continue;
        }
        let have = filler.shape()[dim];
        if have == source_shape[dim] {
            continue;
        }
        if have == 1 {
            filler = tile_op(&filler, source_shape[dim], dim)?;
        } else {
            return Err(SeqShapeError::ShapeMismatch {
                expected: filler_shape.to_vec(),
                actual: value.shape(),
                operation: "pad_axis (pad_value)".to_string(),
            });
        }
    }
    Ok(filler)
}
