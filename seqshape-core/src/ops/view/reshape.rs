use std::any::Any;
use std::sync::{Arc, RwLock};

use crate::autograd::BackwardOp;
use crate::error::SeqShapeError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Reinterprets the tensor under a new shape with the same number of elements.
///
/// Storage is always contiguous here, so the result shares the input's buffer
/// without copying. Participates in gradient tracking: the backward pass
/// reshapes the gradient back to the input shape.
pub fn reshape_op(input: &Tensor, new_shape: Vec<usize>) -> Result<Tensor, SeqShapeError> {
    let guard = input.read_data();

    let original_numel = guard.numel();
    let new_numel: usize = new_shape.iter().product();
    if original_numel != new_numel {
        return Err(SeqShapeError::ShapeMismatch {
            expected: guard.shape.clone(),
            actual: new_shape,
            operation: "reshape (numel mismatch)".to_string(),
        });
    }

    let requires_grad = guard.requires_grad;
    let input_shape = guard.shape.clone();
    let view_td = TensorData::new_shared(Arc::clone(guard.buffer()), new_shape)?;
    drop(guard);

    let output = Tensor::from_data(view_td);
    if requires_grad {
        let backward_context = ReshapeBackward {
            input_node: Arc::clone(&input.data),
            input_shape,
        };
        let mut output_guard = output.write_data();
        output_guard.requires_grad = true;
        output_guard.grad_fn = Some(Arc::new(backward_context));
    }
    Ok(output)
}

// --- Reshape Backward Operation ---

#[derive(Debug)]
struct ReshapeBackward {
    input_node: Arc<RwLock<TensorData>>,
    input_shape: Vec<usize>,
}

impl BackwardOp for ReshapeBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, SeqShapeError> {
        reshape_op(grad_output, self.input_shape.clone()).map(|grad_input| vec![grad_input])
    }

    fn inputs(&self) -> Vec<Arc<RwLock<TensorData>>> {
        vec![Arc::clone(&self.input_node)]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_shares_buffer() {
        let t = Tensor::new((0..6).map(|x| x as f32).collect(), vec![2, 3]).unwrap();
        let r = reshape_op(&t, vec![3, 2]).unwrap();
        assert_eq!(r.shape(), vec![3, 2]);
        assert_eq!(r.get_data(), t.get_data());
        assert!(!r.requires_grad());
    }

    #[test]
    fn test_reshape_numel_mismatch() {
        let t = Tensor::new((0..6).map(|x| x as f32).collect(), vec![2, 3]).unwrap();
        let result = reshape_op(&t, vec![2, 2]);
        assert!(matches!(result, Err(SeqShapeError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_reshape_to_scalar() {
        let t = Tensor::new(vec![5.0], vec![1]).unwrap();
        let r = reshape_op(&t, vec![]).unwrap();
        assert_eq!(r.shape(), Vec::<usize>::new());
        assert_eq!(r.numel(), 1);
    }

    // --- Autograd Tests ---
    #[test]
    fn test_reshape_backward() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
        t.set_requires_grad(true);
        let r = reshape_op(&t, vec![4]).unwrap();
        assert!(r.requires_grad());

        let seed = Tensor::new(vec![0.1, 0.2, 0.3, 0.4], vec![4]).unwrap();
        r.backward(Some(seed)).unwrap();

        let grad = t.grad().expect("input gradient missing");
        assert_eq!(grad.shape(), vec![2, 2]);
        assert_eq!(grad.get_data(), vec![0.1, 0.2, 0.3, 0.4]);
    }
}
