use crate::error::SeqShapeError;
use crate::ops::view::{index_select_op, reshape_op, slice_axis_op};
use crate::shaping::pad::pad_axis;
use crate::tensor::Tensor;

/// Reverses the leading (time) axis chunk by chunk, not as a whole.
///
/// The axis is partitioned into consecutive chunks of `chunk_size` (the last
/// chunk zero-padded at the tail when the length is ragged), the order of
/// elements *within* each chunk is flipped, and the result is truncated back
/// to the original length. E.g. `[0, 1, 2, 3, 4, 5, 6]` with `chunk_size=3`
/// yields `[2, 1, 0, 5, 4, 3, 0]`.
///
/// On ragged lengths the padding zeros displace tail elements, so applying
/// the transform twice does not recover the input. That asymmetry is
/// inherent to the pad-then-reverse construction.
pub fn chunked_time_reverse(source: &Tensor, chunk_size: usize) -> Result<Tensor, SeqShapeError> {
    let shape = source.shape();
    if shape.is_empty() {
        return Err(SeqShapeError::RankMismatch {
            operation: "chunked_time_reverse".to_string(),
            expected: 1,
            actual: 0,
        });
    }
    if chunk_size == 0 {
        return Err(SeqShapeError::InvalidArgument {
            operation: "chunked_time_reverse".to_string(),
            message: "chunk_size must be >= 1".to_string(),
        });
    }

    let n_time = shape[0];
    let num_chunks = (n_time + chunk_size - 1) / chunk_size;
    let needed_time = num_chunks * chunk_size;

    let padded = pad_axis(source, 0, needed_time, None)?;

    let mut grouped_shape = vec![num_chunks, chunk_size];
    grouped_shape.extend_from_slice(&shape[1..]);
    let grouped = reshape_op(&padded, grouped_shape)?;

    let reversed_within: Vec<usize> = (0..chunk_size).rev().collect();
    let reversed = index_select_op(&grouped, 1, &reversed_within)?;

    let mut flat_shape = vec![needed_time];
    flat_shape.extend_from_slice(&shape[1..]);
    let flat = reshape_op(&reversed, flat_shape)?;
    slice_axis_op(&flat, 0, 0, n_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let t = Tensor::new((0..7).map(|x| x as f32).collect(), vec![7]).unwrap();
        let out = chunked_time_reverse(&t, 3).unwrap();
        assert_eq!(out.shape(), vec![7]);
        assert_eq!(out.get_data(), vec![2.0, 1.0, 0.0, 5.0, 4.0, 3.0, 0.0]);
    }

    #[test]
    fn test_exact_multiple() {
        let t = Tensor::new((0..6).map(|x| x as f32).collect(), vec![6]).unwrap();
        let out = chunked_time_reverse(&t, 3).unwrap();
        assert_eq!(out.get_data(), vec![2.0, 1.0, 0.0, 5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_chunk_larger_than_length() {
        let t = Tensor::new(vec![0.0, 1.0], vec![2]).unwrap();
        let out = chunked_time_reverse(&t, 3).unwrap();
        // Padded to [0, 1, 0], reversed to [0, 1, 0], truncated back.
        assert_eq!(out.get_data(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_trailing_dims_preserved() {
        let t = Tensor::new((0..8).map(|x| x as f32).collect(), vec![4, 2]).unwrap();
        let out = chunked_time_reverse(&t, 2).unwrap();
        assert_eq!(out.shape(), vec![4, 2]);
        // Rows swap pairwise; values within a row stay put.
        assert_eq!(
            out.get_data(),
            vec![2.0, 3.0, 0.0, 1.0, 6.0, 7.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_not_an_involution_on_ragged_length() {
        let t = Tensor::new((0..7).map(|x| x as f32).collect(), vec![7]).unwrap();
        let once = chunked_time_reverse(&t, 3).unwrap();
        let twice = chunked_time_reverse(&once, 3).unwrap();
        // The padding zero displaced the original 6.0.
        assert_eq!(
            twice.get_data(),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 0.0]
        );
        assert_ne!(twice.get_data(), t.get_data());
    }

    #[test]
    fn test_chunk_size_zero() {
        let t = Tensor::new(vec![1.0], vec![1]).unwrap();
        assert!(matches!(
            chunked_time_reverse(&t, 0),
            Err(SeqShapeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_scalar_rank_rejected() {
        let t = Tensor::new(vec![1.0], vec![]).unwrap();
        assert!(matches!(
            chunked_time_reverse(&t, 2),
            Err(SeqShapeError::RankMismatch { .. })
        ));
    }
}
