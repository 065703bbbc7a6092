use crate::error::SeqShapeError;
use crate::ops::reduction::utils::reduce_axis;
use crate::tensor::Tensor;

/// Calculates the maximum of elements along `axis`, removing the axis.
pub fn max_axis_op(input: &Tensor, axis: usize) -> Result<Tensor, SeqShapeError> {
    reduce_axis(input, axis, "max_axis", f32::max)
}
