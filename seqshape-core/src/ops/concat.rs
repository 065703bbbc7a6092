use crate::error::SeqShapeError;
use crate::ops::{axis_blocks, check_axis};
use crate::tensor::Tensor;

/// Concatenates a list of tensors along an existing axis.
///
/// All tensors must have the same rank and the same size on every axis
/// except `axis`.
pub fn concat_op(tensors: &[Tensor], axis: usize) -> Result<Tensor, SeqShapeError> {
    if tensors.is_empty() {
        return Err(SeqShapeError::EmptyTensorList);
    }

    let first_shape = tensors[0].shape();
    check_axis(&first_shape, axis)?;
    for t in &tensors[1..] {
        let shape = t.shape();
        let compatible = shape.len() == first_shape.len()
            && shape
                .iter()
                .zip(first_shape.iter())
                .enumerate()
                .all(|(dim, (a, b))| dim == axis || a == b);
        if !compatible {
            return Err(SeqShapeError::ShapeMismatch {
                expected: first_shape,
                actual: shape,
                operation: "concat (non-axis dims must match)".to_string(),
            });
        }
    }

    let (outer, _, inner) = axis_blocks(&first_shape, axis);
    let total_axis_len: usize = tensors.iter().map(|t| t.shape()[axis]).sum();

    let guards: Vec<_> = tensors.iter().map(|t| t.read_data()).collect();
    let mut out = Vec::with_capacity(outer * total_axis_len * inner);
    for o in 0..outer {
        for guard in &guards {
            let block = guard.shape[axis] * inner;
            out.extend_from_slice(&guard.buffer()[o * block..(o + 1) * block]);
        }
    }
    drop(guards);

    let mut out_shape = first_shape;
    out_shape[axis] = total_axis_len;
    Tensor::new(out, out_shape)
}
