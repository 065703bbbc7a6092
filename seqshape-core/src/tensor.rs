// seqshape-core/src/tensor.rs
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::autograd;
use crate::error::SeqShapeError;
use crate::tensor_data::TensorData;

/// The public, user-facing Tensor type.
///
/// Wraps the internal `TensorData` in an `Arc<RwLock<>>` to allow shared
/// ownership and the interior mutability needed for gradient accumulation.
/// Cloning a `Tensor` is cheap and yields a handle to the same storage.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new `Tensor` from raw data and shape.
    /// Gradient tracking is disabled by default.
    ///
    /// # Errors
    /// Returns `SeqShapeError::TensorCreationError` if the data length does
    /// not match the product of the shape dimensions.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self, SeqShapeError> {
        TensorData::new(data, shape).map(Self::from_data)
    }

    pub(crate) fn from_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Temporary read access to the internal `TensorData`.
    /// The guard acts like a read lock; ensure it's dropped promptly.
    pub(crate) fn read_data(&self) -> RwLockReadGuard<'_, TensorData> {
        self.data.read().unwrap()
    }

    /// Temporary write access to the internal `TensorData`.
    /// The guard acts like a write lock; ensure it's dropped promptly.
    pub(crate) fn write_data(&self) -> RwLockWriteGuard<'_, TensorData> {
        self.data.write().unwrap()
    }

    // --- Accessors ---

    /// Returns the shape of the tensor as a `Vec<usize>` (cloned).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns a clone of the underlying data buffer as a `Vec<f32>`.
    pub fn get_data(&self) -> Vec<f32> {
        self.read_data().data.as_ref().clone()
    }

    /// Returns the element at the given multi-dimensional index.
    pub fn get(&self, indices: &[usize]) -> Result<f32, SeqShapeError> {
        let guard = self.read_data();
        if indices.len() != guard.shape.len() {
            return Err(SeqShapeError::RankMismatch {
                operation: "get".to_string(),
                expected: guard.shape.len(),
                actual: indices.len(),
            });
        }
        let mut flat = 0;
        for (dim, (&ix, &size)) in indices.iter().zip(guard.shape.iter()).enumerate() {
            if ix >= size {
                return Err(SeqShapeError::IndexOutOfBounds {
                    index: ix,
                    axis_len: guard.shape[dim],
                });
            }
            flat = flat * size + ix;
        }
        Ok(guard.data[flat])
    }

    /// Checks if the tensor requires gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Enables or disables gradient tracking for this tensor.
    /// If set to `false`, clears any existing gradient and grad_fn.
    /// Takes `&self` due to interior mutability.
    pub fn set_requires_grad(&self, requires_grad: bool) {
        let mut tensor_data = self.write_data();
        tensor_data.requires_grad = requires_grad;
        if !requires_grad {
            tensor_data.grad = None;
            tensor_data.grad_fn = None;
        }
    }

    /// Returns a handle to the accumulated gradient, if one has been computed.
    pub fn grad(&self) -> Option<Tensor> {
        self.read_data().grad.clone()
    }

    /// Whether this tensor was produced by a gradient-tracked operation.
    pub fn has_grad_fn(&self) -> bool {
        self.read_data().grad_fn.is_some()
    }

    // --- Autograd entry point ---

    /// Runs the backward pass from this tensor through the recorded graph.
    ///
    /// For non-scalar tensors an explicit seed `gradient` of the same shape
    /// must be supplied; for scalar tensors the seed defaults to ones.
    /// Gradients accumulate by element-wise addition into every node that
    /// requires them.
    pub fn backward(&self, gradient: Option<Tensor>) -> Result<(), SeqShapeError> {
        if !self.requires_grad() {
            return Err(SeqShapeError::RequiresGradNotMet);
        }

        let seed = match gradient {
            Some(grad) => {
                if grad.shape() != self.shape() {
                    return Err(SeqShapeError::GradientAccumulationShapeMismatch {
                        expected: self.shape(),
                        actual: grad.shape(),
                    });
                }
                grad
            }
            None => {
                if self.numel() != 1 {
                    return Err(SeqShapeError::BackwardNonScalar);
                }
                Tensor::ones(self.shape())?
            }
        };

        autograd::graph::run_backward(self, seed)
    }
}

// --- Trait Implementations for the Tensor Wrapper ---

impl Clone for Tensor {
    /// Clones the `Tensor` wrapper (bumps the `Arc` count).
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let td = self.read_data();
        f.debug_struct("Tensor")
            .field("data", &td.data)
            .field("shape", &td.shape)
            .field("requires_grad", &td.requires_grad)
            .field("grad_defined", &td.grad.is_some())
            .field("grad_fn_defined", &td.grad_fn.is_some())
            .finish()
    }
}

/// PartialEq for Tensor is based on pointer equality, consistent with Hash.
/// Two Tensors are considered equal only if they share the same storage node.
impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Tensor {}

impl Hash for Tensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.data).hash(state);
    }
}

// --- Tests for the Public Tensor Wrapper ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_test_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
        Tensor::new(data, shape).expect("Failed to create test tensor")
    }

    #[test]
    fn test_tensor_creation() {
        let tensor = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        let td = tensor.read_data();
        assert_eq!(*td.data, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(td.shape, vec![2, 2]);
        assert!(!td.requires_grad);
        assert!(td.grad.is_none());
        assert!(td.grad_fn.is_none());
    }

    #[test]
    fn test_tensor_creation_len_mismatch() {
        let result = Tensor::new(vec![1.0, 2.0, 3.0], vec![2, 2]);
        assert!(matches!(
            result,
            Err(SeqShapeError::TensorCreationError { data_len: 3, .. })
        ));
    }

    #[test]
    fn test_tensor_equality_is_pointer_based() {
        let t1 = create_test_tensor(vec![1.0, 2.0], vec![2]);
        let t2 = create_test_tensor(vec![1.0, 2.0], vec![2]);

        // Same content, different storage nodes.
        assert_ne!(t1, t2);
        assert_eq!(t1.get_data(), t2.get_data());

        let t1_clone = t1.clone();
        assert_eq!(t1, t1_clone);
    }

    #[test]
    fn test_tensor_hash_eq_for_set() {
        let t1 = create_test_tensor(vec![1.0, 2.0], vec![2]);
        let t2 = create_test_tensor(vec![1.0, 2.0], vec![2]);
        let t3 = t1.clone();

        let mut set: HashSet<Tensor> = HashSet::new();
        assert!(set.insert(t1.clone()));
        assert!(set.contains(&t1));
        assert!(set.contains(&t3));
        assert!(!set.contains(&t2));
        assert_eq!(set.len(), 1);

        assert!(set.insert(t2.clone()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_get() {
        let t = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
        assert_eq!(t.get(&[0, 0]).unwrap(), 1.0);
        assert_eq!(t.get(&[1, 2]).unwrap(), 6.0);
        assert!(matches!(
            t.get(&[2, 0]),
            Err(SeqShapeError::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            t.get(&[0]),
            Err(SeqShapeError::RankMismatch { .. })
        ));
    }

    #[test]
    fn test_backward_requires_grad() {
        let t = create_test_tensor(vec![1.0], vec![1]);
        assert!(matches!(
            t.backward(None),
            Err(SeqShapeError::RequiresGradNotMet)
        ));
    }

    #[test]
    fn test_backward_non_scalar_needs_seed() {
        let t = create_test_tensor(vec![1.0, 2.0], vec![2]);
        t.set_requires_grad(true);
        assert!(matches!(
            t.backward(None),
            Err(SeqShapeError::BackwardNonScalar)
        ));
    }
}
