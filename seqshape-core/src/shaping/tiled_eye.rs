use crate::error::SeqShapeError;
use crate::ops::repeat::tile_op;
use crate::ops::view::slice_axis_op;
use crate::tensor::Tensor;

/// Builds an `n1 x n2` matrix by tiling the `min(n1, n2)` identity matrix
/// until it covers the requested shape, then cropping.
///
/// For `n1 == n2` this is exactly the identity; for mismatched sizes it
/// yields an identity-like projection between the two dimensions.
pub fn tiled_eye(n1: usize, n2: usize) -> Result<Tensor, SeqShapeError> {
    if n1 == 0 || n2 == 0 {
        return Err(SeqShapeError::InvalidArgument {
            operation: "tiled_eye".to_string(),
            message: "both sizes must be >= 1".to_string(),
        });
    }

    let small = n1.min(n2);
    let small_eye = Tensor::eye(small)?;
    let r1 = (n1 + small - 1) / small;
    let r2 = (n2 + small - 1) / small;

    let tiled = tile_op(&small_eye, r1, 0)?;
    let tiled = tile_op(&tiled, r2, 1)?;
    let cropped = slice_axis_op(&tiled, 0, 0, n1)?;
    slice_axis_op(&cropped, 1, 0, n2)
}
