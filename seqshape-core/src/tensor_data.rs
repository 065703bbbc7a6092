// seqshape-core/src/tensor_data.rs
use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::error::SeqShapeError;
use crate::tensor::Tensor;

/// Internal storage and metadata for a Tensor.
///
/// Holds the shared data buffer, the shape, and autograd-related metadata.
/// It is wrapped in `Arc<RwLock<TensorData>>` by the `Tensor` struct to allow
/// shared ownership and interior mutability.
///
/// Storage is always a contiguous, row-major `f32` buffer on the CPU. The
/// buffer itself lives behind an `Arc` so that shape-only operations
/// (reshape, identity-forward ops) can share it without copying.
#[derive(Debug)]
pub struct TensorData {
    /// The underlying data buffer, shared between shape-views of the same storage.
    pub(crate) data: Arc<Vec<f32>>,
    /// The shape (dimensions) of the tensor.
    pub(crate) shape: Vec<usize>,

    // --- Autograd Metadata ---
    /// Flag indicating if the tensor participates in gradient computation.
    pub(crate) requires_grad: bool,
    /// The accumulated gradient, populated during the backward pass.
    pub(crate) grad: Option<Tensor>,
    /// The backward operation that produced this tensor, if any.
    /// Leaf tensors (created directly by the user) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp>>,
}

impl TensorData {
    /// Creates a new `TensorData` from raw data and shape.
    ///
    /// # Errors
    /// Returns `SeqShapeError::TensorCreationError` if the length of `data_vec`
    /// does not match the total number of elements specified by `shape`.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, SeqShapeError> {
        let numel: usize = shape.iter().product();
        let data_len = data_vec.len();
        if data_len != numel {
            return Err(SeqShapeError::TensorCreationError { data_len, shape });
        }

        Ok(TensorData {
            data: Arc::new(data_vec),
            shape,
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    /// Creates a new `TensorData` sharing an existing buffer under a new shape.
    ///
    /// Does **not** allocate new memory; used by reshape and by identity-forward
    /// operators. The result does not require gradients and has no `grad_fn`;
    /// callers set those up themselves when appropriate.
    pub(crate) fn new_shared(
        buffer: Arc<Vec<f32>>,
        shape: Vec<usize>,
    ) -> Result<Self, SeqShapeError> {
        let numel: usize = shape.iter().product();
        if buffer.len() != numel {
            return Err(SeqShapeError::TensorCreationError {
                data_len: buffer.len(),
                shape,
            });
        }

        Ok(TensorData {
            data: buffer,
            shape,
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    /// Provides access to the underlying shared data buffer.
    pub(crate) fn buffer(&self) -> &Arc<Vec<f32>> {
        &self.data
    }

    /// Total number of elements, derived from the shape.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }
}
