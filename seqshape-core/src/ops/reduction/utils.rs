use crate::error::SeqShapeError;
use crate::ops::{axis_blocks, check_axis};
use crate::tensor::Tensor;

/// Reduces away one axis by folding its elements pairwise with `combine`,
/// starting from the first element of each group.
///
/// Reducing an empty axis is an error: with the fold seeded from the first
/// element there is no identity value to fall back on.
pub(crate) fn reduce_axis<F>(
    input: &Tensor,
    axis: usize,
    op_name: &str,
    mut combine: F,
) -> Result<Tensor, SeqShapeError>
where
    F: FnMut(f32, f32) -> f32,
{
    let shape = input.shape();
    check_axis(&shape, axis)?;
    let (outer, axis_len, inner) = axis_blocks(&shape, axis);
    if axis_len == 0 {
        return Err(SeqShapeError::InvalidArgument {
            operation: op_name.to_string(),
            message: "cannot reduce an empty axis".to_string(),
        });
    }

    let guard = input.read_data();
    let mut out = Vec::with_capacity(outer * inner);
    for o in 0..outer {
        for i in 0..inner {
            let mut acc = guard.buffer()[o * axis_len * inner + i];
            for k in 1..axis_len {
                acc = combine(acc, guard.buffer()[(o * axis_len + k) * inner + i]);
            }
            out.push(acc);
        }
    }
    drop(guard);

    let mut out_shape = shape;
    out_shape.remove(axis);
    Tensor::new(out, out_shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_empty_axis_errors() {
        let t = Tensor::new(vec![], vec![2, 0]).unwrap();
        assert!(matches!(
            reduce_axis(&t, 1, "sum_axis", |a, b| a + b),
            Err(SeqShapeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_reduce_sum_axis0() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        let out = reduce_axis(&t, 0, "sum_axis", |a, b| a + b).unwrap();
        assert_eq!(out.shape(), vec![3]);
        assert_eq!(out.get_data(), vec![5.0, 7.0, 9.0]);
    }
}
