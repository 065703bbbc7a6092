//! # Sequence shaping helpers (`shaping`)
//!
//! A flat set of pure shape-recipe functions for sequence batches, built by
//! composing the [`ops`](crate::ops) primitives. The common layout is
//! `(time, batch, feature...)` with time as the leading axis.
//!
//! All functions return a freshly shaped tensor and never mutate their
//! input. Parameters that must be exact positive integers are `usize`;
//! reduction/expansion methods are enums, so an unknown method cannot be
//! expressed.

pub mod chunk;
pub mod flatten;
pub mod one_hot;
pub mod pad;
pub mod resample;
pub mod tiled_eye;
pub mod window;

pub use chunk::chunked_time_reverse;
pub use flatten::flatten_time_batch;
pub use one_hot::one_hot;
pub use pad::pad_axis;
pub use resample::{downsample, upsample, DownsampleMethod, UpsampleMethod};
pub use tiled_eye::tiled_eye;
pub use window::windowed_batch;
