use crate::error::SeqShapeError;
use crate::ops::{axis_blocks, check_axis};
use crate::tensor::Tensor;

/// Gathers slices along `axis` in the order given by `indices`.
///
/// The output has `indices.len()` entries along `axis`; an index may appear
/// any number of times. Out-of-range indices are rejected up front.
pub fn index_select_op(
    input: &Tensor,
    axis: usize,
    indices: &[usize],
) -> Result<Tensor, SeqShapeError> {
    let shape = input.shape();
    check_axis(&shape, axis)?;
    let (outer, axis_len, inner) = axis_blocks(&shape, axis);

    for &index in indices {
        if index >= axis_len {
            return Err(SeqShapeError::IndexOutOfBounds { index, axis_len });
        }
    }

    let guard = input.read_data();
    let mut out = Vec::with_capacity(outer * indices.len() * inner);
    for o in 0..outer {
        for &index in indices {
            let start = (o * axis_len + index) * inner;
            out.extend_from_slice(&guard.buffer()[start..start + inner]);
        }
    }
    drop(guard);

    let mut out_shape = shape;
    out_shape[axis] = indices.len();
    Tensor::new(out, out_shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_select_dim0() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
        let out = index_select_op(&t, 0, &[1, 0]).unwrap();
        assert_eq!(out.shape(), vec![2, 2]);
        assert_eq!(out.get_data(), vec![3.0, 4.0, 1.0, 2.0]);
    }

    #[test]
    fn test_index_select_dim1_with_repeats() {
        let t = Tensor::new(vec![10.0, 20.0, 30.0, 40.0], vec![2, 2]).unwrap();
        let out = index_select_op(&t, 1, &[0, 0, 1]).unwrap();
        assert_eq!(out.shape(), vec![2, 3]);
        assert_eq!(out.get_data(), vec![10.0, 10.0, 20.0, 30.0, 30.0, 40.0]);
    }

    #[test]
    fn test_index_select_out_of_bounds() {
        let t = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
        assert!(matches!(
            index_select_op(&t, 0, &[2]),
            Err(SeqShapeError::IndexOutOfBounds {
                index: 2,
                axis_len: 2
            })
        ));
    }

    #[test]
    fn test_index_select_empty_indices() {
        let t = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
        let out = index_select_op(&t, 0, &[]).unwrap();
        assert_eq!(out.shape(), vec![0]);
    }
}
