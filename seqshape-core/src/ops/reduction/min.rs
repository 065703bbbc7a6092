use crate::error::SeqShapeError;
use crate::ops::reduction::utils::reduce_axis;
use crate::tensor::Tensor;

/// Calculates the minimum of elements along `axis`, removing the axis.
pub fn min_axis_op(input: &Tensor, axis: usize) -> Result<Tensor, SeqShapeError> {
    reduce_axis(input, axis, "min_axis", f32::min)
}
