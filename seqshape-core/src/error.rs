use thiserror::Error;

/// Custom error type for the SeqShape crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing, Clone added
pub enum SeqShapeError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("{operation} requires rank {expected}, got rank {actual}")]
    RankMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Axis {axis} is out of bounds for rank {rank}")]
    AxisOutOfBounds { axis: usize, rank: usize },

    #[error("Index {index} is out of bounds for axis of size {axis_len}")]
    IndexOutOfBounds { index: usize, axis_len: usize },

    #[error("Slice range {start}..{end} is invalid for axis of size {axis_len}")]
    SliceOutOfRange {
        start: usize,
        end: usize,
        axis_len: usize,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Invalid argument for {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    #[error("Invalid gradient bounds: lower ({lower}) must not exceed upper ({upper})")]
    InvalidGradBounds { lower: f32, upper: f32 },

    #[error("Operation requires tensor to require grad, but it doesn't.")]
    RequiresGradNotMet,

    #[error("Backward called on non-scalar tensor without explicit gradient.")]
    BackwardNonScalar,

    #[error("Shape mismatch during gradient accumulation: expected {expected:?}, got {actual:?}")]
    GradientAccumulationShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Cannot concatenate an empty list of tensors")]
    EmptyTensorList,

    #[error("Internal error: {0}")]
    InternalError(String),
}
