use std::any::Any;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

use crate::error::SeqShapeError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Defines the interface for the backward pass of a gradient-tracked operation.
///
/// An operation that creates a non-leaf `Tensor` stores an implementation of
/// this trait in the output tensor's `grad_fn` field; the `backward()` driver
/// uses it to propagate gradients according to the chain rule.
///
/// `Debug + Send + Sync` bounds are required because the `Arc<dyn BackwardOp>`
/// holding the state might be shared across threads during the backward pass.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes the gradients of the operation's inputs, given the gradient
    /// of the operation's output.
    ///
    /// # Returns
    /// A `Vec` with one gradient `Tensor` per input, in the same order as
    /// [`inputs`](Self::inputs). Each gradient has the shape of the
    /// corresponding input.
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, SeqShapeError>;

    /// Returns handles to the input nodes that participated in the forward
    /// operation, in the same order as the gradients from
    /// [`backward`](Self::backward). Keeping `Arc` handles here is what keeps
    /// the upstream graph alive for the duration of the backward pass.
    fn inputs(&self) -> Vec<Arc<RwLock<TensorData>>>;

    /// Concrete-type access, used by call-site rewrites that need to
    /// recognize which operator produced a tensor.
    fn as_any(&self) -> &dyn Any;
}
