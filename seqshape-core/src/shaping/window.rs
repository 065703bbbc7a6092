use crate::error::SeqShapeError;
use crate::ops::concat::concat_op;
use crate::ops::view::slice_axis_op;
use crate::tensor::Tensor;

/// Stacks a sliding context window onto the feature axis of a
/// `(time, batch, dim)` batch.
///
/// Each output step `t` holds the concatenation of the `window` dim-vectors
/// centered on `t`, giving shape `(time, batch, window * dim)`. For even
/// windows the extra frame sits on the right: `w_right = window / 2`,
/// `w_left = window - w_right - 1`. Steps outside `[0, time)` read as zeros.
///
/// Built by zero-padding both ends and concatenating the `window` shifted
/// length-`time` slices of the padded sequence along the feature axis.
pub fn windowed_batch(source: &Tensor, window: usize) -> Result<Tensor, SeqShapeError> {
    let shape = source.shape();
    if shape.len() != 3 {
        return Err(SeqShapeError::RankMismatch {
            operation: "windowed_batch".to_string(),
            expected: 3,
            actual: shape.len(),
        });
    }
    if window == 0 {
        return Err(SeqShapeError::InvalidArgument {
            operation: "windowed_batch".to_string(),
            message: "window must be >= 1".to_string(),
        });
    }

    let (n_time, n_batch, n_dim) = (shape[0], shape[1], shape[2]);
    let w_right = window / 2;
    let w_left = window - w_right - 1;

    let pad_left = Tensor::zeros(vec![w_left, n_batch, n_dim])?;
    let pad_right = Tensor::zeros(vec![w_right, n_batch, n_dim])?;
    // padded length == n_time + window - 1
    let padded = concat_op(&[pad_left, source.clone(), pad_right], 0)?;

    let mut shifted = Vec::with_capacity(window);
    for w in 0..window {
        shifted.push(slice_axis_op(&padded, 0, w, w + n_time)?);
    }
    concat_op(&shifted, 2)
}
