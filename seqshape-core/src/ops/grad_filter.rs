//! Identity-forward operator that discards out-of-bound gradients.
//!
//! The forward pass returns its input unchanged (sharing the buffer). During
//! the backward pass, every gradient element outside `[lower_bound,
//! upper_bound]` is replaced with zero before propagation continues; elements
//! inside the range pass through untouched. Useful to keep a single exploding
//! path from poisoning the rest of a training step without rescaling the
//! surviving gradients.

use std::any::Any;
use std::sync::{Arc, RwLock};

use log::trace;

use crate::autograd::BackwardOp;
use crate::error::SeqShapeError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Wraps `input` with discard-out-of-bound gradient semantics.
///
/// Requires `lower_bound <= upper_bound` (fails with `InvalidGradBounds`
/// otherwise, including when either bound is NaN).
///
/// Applying the operator twice in a row with the same bounds is a no-op
/// composition; the second application returns the already-wrapped tensor
/// instead of stacking another node.
pub fn grad_discard_out_of_bound(
    input: &Tensor,
    lower_bound: f32,
    upper_bound: f32,
) -> Result<Tensor, SeqShapeError> {
    if !(lower_bound <= upper_bound) {
        return Err(SeqShapeError::InvalidGradBounds {
            lower: lower_bound,
            upper: upper_bound,
        });
    }

    let guard = input.read_data();

    if let Some(grad_fn) = &guard.grad_fn {
        if let Some(previous) = grad_fn.as_any().downcast_ref::<GradFilterBackward>() {
            if previous.lower_bound == lower_bound && previous.upper_bound == upper_bound {
                trace!(
                    "grad_discard_out_of_bound: collapsing duplicate filter [{}, {}]",
                    lower_bound,
                    upper_bound
                );
                return Ok(input.clone());
            }
        }
    }

    let requires_grad = guard.requires_grad;
    let view_td = TensorData::new_shared(Arc::clone(guard.buffer()), guard.shape.clone())?;
    drop(guard);

    let output = Tensor::from_data(view_td);
    if requires_grad {
        let backward_context = GradFilterBackward {
            input_node: Arc::clone(&input.data),
            lower_bound,
            upper_bound,
        };
        let mut output_guard = output.write_data();
        output_guard.requires_grad = true;
        output_guard.grad_fn = Some(Arc::new(backward_context));
    }
    Ok(output)
}

// --- Gradient Filter Backward Operation ---

#[derive(Debug)]
pub(crate) struct GradFilterBackward {
    input_node: Arc<RwLock<TensorData>>,
    pub(crate) lower_bound: f32,
    pub(crate) upper_bound: f32,
}

impl BackwardOp for GradFilterBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, SeqShapeError> {
        let guard = grad_output.read_data();
        // NaN gradients compare false on both sides and pass through.
        let filtered: Vec<f32> = guard
            .buffer()
            .iter()
            .map(|&g| {
                if g < self.lower_bound || g > self.upper_bound {
                    0.0
                } else {
                    g
                }
            })
            .collect();
        let shape = guard.shape.clone();
        drop(guard);
        Ok(vec![Tensor::new(filtered, shape)?])
    }

    fn inputs(&self) -> Vec<Arc<RwLock<TensorData>>> {
        vec![Arc::clone(&self.input_node)]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
