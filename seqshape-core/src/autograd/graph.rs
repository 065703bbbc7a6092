use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use log::trace;

use crate::error::SeqShapeError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Recursively builds a topological sort of the recorded graph.
/// Nodes are keyed by storage pointer, consistent with `Tensor`'s `Hash` impl.
fn build_topo(
    node: &Tensor,
    visited: &mut HashSet<*const RwLock<TensorData>>,
    sorted_list: &mut Vec<Tensor>,
) {
    let node_ptr = Arc::as_ptr(&node.data);
    if !visited.insert(node_ptr) {
        return;
    }

    let grad_fn = node.read_data().grad_fn.clone();
    if let Some(grad_fn) = grad_fn {
        for input in grad_fn.inputs() {
            let input_tensor = Tensor { data: input };
            build_topo(&input_tensor, visited, sorted_list);
        }
    }
    // Add the node *after* its inputs.
    sorted_list.push(node.clone());
}

/// Adds `grad` into `node`'s accumulated gradient (element-wise).
fn accumulate_grad(node: &Tensor, grad: Tensor) -> Result<(), SeqShapeError> {
    let node_shape = node.shape();
    if grad.shape() != node_shape {
        return Err(SeqShapeError::GradientAccumulationShapeMismatch {
            expected: node_shape,
            actual: grad.shape(),
        });
    }

    let existing = node.read_data().grad.clone();
    let new_grad = match existing {
        None => grad,
        Some(current) => {
            let summed: Vec<f32> = current
                .get_data()
                .iter()
                .zip(grad.get_data().iter())
                .map(|(a, b)| a + b)
                .collect();
            Tensor::new(summed, node_shape)?
        }
    };
    node.write_data().grad = Some(new_grad);
    Ok(())
}

/// Drives the reverse pass: seeds the root gradient, then walks the graph in
/// reverse topological order, asking each node's `grad_fn` for its input
/// gradients and accumulating them.
pub(crate) fn run_backward(root: &Tensor, seed: Tensor) -> Result<(), SeqShapeError> {
    let mut visited = HashSet::new();
    let mut sorted = Vec::new();
    build_topo(root, &mut visited, &mut sorted);
    trace!("backward: processing {} nodes in topological order", sorted.len());

    accumulate_grad(root, seed)?;

    for node in sorted.iter().rev() {
        let (grad, grad_fn) = {
            let guard = node.read_data();
            (guard.grad.clone(), guard.grad_fn.clone())
        };

        let grad_fn = match grad_fn {
            Some(grad_fn) => grad_fn,
            None => continue, // Leaf node.
        };
        let grad = match grad {
            Some(grad) => grad,
            // Reachable but not on any gradient path from the root.
            None => continue,
        };

        let input_grads = grad_fn.backward(&grad)?;
        let inputs = grad_fn.inputs();
        if input_grads.len() != inputs.len() {
            return Err(SeqShapeError::InternalError(format!(
                "backward produced {} gradients for {} inputs",
                input_grads.len(),
                inputs.len()
            )));
        }
        for (input, input_grad) in inputs.into_iter().zip(input_grads) {
            let input_tensor = Tensor { data: input };
            if input_tensor.requires_grad() {
                accumulate_grad(&input_tensor, input_grad)?;
            }
        }
    }
    Ok(())
}
