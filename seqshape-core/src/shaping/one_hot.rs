use num_traits::ToPrimitive;

use crate::error::SeqShapeError;
use crate::ops::view::{index_select_op, reshape_op};
use crate::tensor::Tensor;

/// Expands a tensor of class indices into one-hot vectors.
///
/// The output gains one trailing dimension of size `num_classes`;
/// element `[..., k]` is `1.0` where the original index equals `k` and `0.0`
/// elsewhere. Built as an identity-matrix row lookup: indices are truncated
/// to integers and gathered from `eye(num_classes)`.
///
/// Indices outside `[0, num_classes)` are rejected; negative or non-finite
/// values fail the integer cast.
pub fn one_hot(indices: &Tensor, num_classes: usize) -> Result<Tensor, SeqShapeError> {
    if num_classes == 0 {
        return Err(SeqShapeError::InvalidArgument {
            operation: "one_hot".to_string(),
            message: "num_classes must be >= 1".to_string(),
        });
    }

    let values = indices.get_data();
    let mut rows = Vec::with_capacity(values.len());
    for &value in &values {
        let row = value.to_usize().ok_or_else(|| SeqShapeError::InvalidArgument {
            operation: "one_hot".to_string(),
            message: format!("class index {value} cannot be cast to a non-negative integer"),
        })?;
        rows.push(row);
    }

    let eye = Tensor::eye(num_classes)?;
    let selected = index_select_op(&eye, 0, &rows)?;

    let mut out_shape = indices.shape();
    out_shape.push(num_classes);
    reshape_op(&selected, out_shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot_1d() {
        let idx = Tensor::new(vec![0.0, 2.0, 1.0], vec![3]).unwrap();
        let out = one_hot(&idx, 3).unwrap();
        assert_eq!(out.shape(), vec![3, 3]);
        #[rustfmt::skip]
        let expected = vec![
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
            0.0, 1.0, 0.0,
        ];
        assert_eq!(out.get_data(), expected);
    }

    #[test]
    fn test_one_hot_2d_keeps_leading_shape() {
        let idx = Tensor::new(vec![1.0, 0.0, 1.0, 1.0], vec![2, 2]).unwrap();
        let out = one_hot(&idx, 2).unwrap();
        assert_eq!(out.shape(), vec![2, 2, 2]);
        assert_eq!(out.get(&[0, 0, 1]).unwrap(), 1.0);
        assert_eq!(out.get(&[0, 1, 0]).unwrap(), 1.0);
        assert_eq!(out.get(&[0, 1, 1]).unwrap(), 0.0);
    }

    #[test]
    fn test_one_hot_truncates_fractional_index() {
        // Mirrors an integer cast: 1.9 selects class 1.
        let idx = Tensor::new(vec![1.9], vec![1]).unwrap();
        let out = one_hot(&idx, 3).unwrap();
        assert_eq!(out.get_data(), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_one_hot_rejects_negative() {
        let idx = Tensor::new(vec![-1.0], vec![1]).unwrap();
        assert!(matches!(
            one_hot(&idx, 3),
            Err(SeqShapeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_one_hot_rejects_out_of_range() {
        let idx = Tensor::new(vec![3.0], vec![1]).unwrap();
        assert!(matches!(
            one_hot(&idx, 3),
            Err(SeqShapeError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_one_hot_zero_classes() {
        let idx = Tensor::new(vec![0.0], vec![1]).unwrap();
        assert!(matches!(
            one_hot(&idx, 0),
            Err(SeqShapeError::InvalidArgument { .. })
        ));
    }
}
