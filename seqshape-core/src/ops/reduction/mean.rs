use num_traits::FromPrimitive;

use crate::error::SeqShapeError;
use crate::ops::reduction::utils::reduce_axis;
use crate::tensor::Tensor;

/// Calculates the mean of elements along `axis`, removing the axis.
pub fn mean_axis_op(input: &Tensor, axis: usize) -> Result<Tensor, SeqShapeError> {
    let summed = reduce_axis(input, axis, "mean_axis", |acc, x| acc + x)?;

    let n = input.shape()[axis];
    let n_t = f32::from_usize(n).ok_or_else(|| {
        SeqShapeError::InternalError(
            "Failed to convert element count N to the tensor element type".to_string(),
        )
    })?;

    let data: Vec<f32> = summed.get_data().iter().map(|v| v / n_t).collect();
    Tensor::new(data, summed.shape())
}
