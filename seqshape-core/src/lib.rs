// Déclare les modules principaux de la crate
pub mod autograd;
mod creation;
pub mod error;
pub mod ops;
pub mod shaping;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

// Ré-exporte le type Tensor pour qu'il soit accessible directement via `seqshape_core::Tensor`
pub use tensor::Tensor;

pub use error::SeqShapeError;

// The gradient filter sits with the other ops but is part of the public
// shaping surface.
pub use ops::grad_filter::grad_discard_out_of_bound;
pub use shaping::{
    chunked_time_reverse, downsample, flatten_time_batch, one_hot, pad_axis, tiled_eye, upsample,
    windowed_batch, DownsampleMethod, UpsampleMethod,
};
