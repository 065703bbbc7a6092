use crate::error::SeqShapeError;
use crate::ops::check_axis;
use crate::ops::reduction::{max_axis_op, mean_axis_op, min_axis_op};
use crate::ops::repeat::repeat_op;
use crate::ops::view::{reshape_op, slice_axis_op};
use crate::shaping::pad::pad_axis;
use crate::tensor::Tensor;

/// How consecutive groups are reduced when downsampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownsampleMethod {
    Average,
    Max,
    Min,
}

/// How elements are expanded when upsampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsampleMethod {
    NearestNeighbor,
}

/// Shrinks one axis by an integer factor.
///
/// The axis is first truncated to the largest multiple of `factor`, then
/// every `factor` consecutive elements are reduced to a single value with
/// the chosen method, leaving `len / factor` entries.
pub fn downsample(
    source: &Tensor,
    axis: usize,
    factor: usize,
    method: DownsampleMethod,
) -> Result<Tensor, SeqShapeError> {
    let shape = source.shape();
    check_axis(&shape, axis)?;
    if factor == 0 {
        return Err(SeqShapeError::InvalidArgument {
            operation: "downsample".to_string(),
            message: "factor must be >= 1".to_string(),
        });
    }

    let groups = shape[axis] / factor;
    let truncated = slice_axis_op(source, axis, 0, groups * factor)?;

    // Split the axis into (groups, factor) and reduce the factor axis.
    let mut grouped_shape = shape.clone();
    grouped_shape[axis] = groups;
    grouped_shape.insert(axis + 1, factor);
    let grouped = reshape_op(&truncated, grouped_shape)?;

    match method {
        DownsampleMethod::Average => mean_axis_op(&grouped, axis + 1),
        DownsampleMethod::Max => max_axis_op(&grouped, axis + 1),
        DownsampleMethod::Min => min_axis_op(&grouped, axis + 1),
    }
}

/// Grows one axis by an integer factor, repeating each element `factor`
/// times (nearest-neighbor).
///
/// When `target_axis_len` is given, the result is brought to exactly that
/// length: a longer target is reached by replicating the *last original
/// slice* (not zeros), a shorter one by truncation.
pub fn upsample(
    source: &Tensor,
    axis: usize,
    factor: usize,
    method: UpsampleMethod,
    target_axis_len: Option<usize>,
) -> Result<Tensor, SeqShapeError> {
    match method {
        UpsampleMethod::NearestNeighbor => {}
    }

    let shape = source.shape();
    check_axis(&shape, axis)?;
    if factor == 0 {
        return Err(SeqShapeError::InvalidArgument {
            operation: "upsample".to_string(),
            message: "factor must be >= 1".to_string(),
        });
    }

    let repeated = repeat_op(source, factor, axis)?;
    let target = match target_axis_len {
        None => return Ok(repeated),
        Some(target) => target,
    };

    let repeated_len = repeated.shape()[axis];
    if target <= repeated_len {
        return slice_axis_op(&repeated, axis, 0, target);
    }

    // Tail extension replicates the final source slice, not zeros.
    let source_len = shape[axis];
    if source_len == 0 {
        return Err(SeqShapeError::InvalidArgument {
            operation: "upsample".to_string(),
            message: "cannot extend an empty axis to a target length".to_string(),
        });
    }
    let last = slice_axis_op(source, axis, source_len - 1, source_len)?;
    pad_axis(&repeated, axis, target, Some(&last))
}
