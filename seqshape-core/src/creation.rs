use crate::error::SeqShapeError;
use crate::tensor::Tensor;

// Implementation block for Tensor creation methods (zeros, ones, full, eye).
impl Tensor {
    /// Creates a new `Tensor` filled with zeros with the specified shape.
    pub fn zeros(shape: Vec<usize>) -> Result<Self, SeqShapeError> {
        Self::full(shape, 0.0)
    }

    /// Creates a new `Tensor` filled with ones with the specified shape.
    pub fn ones(shape: Vec<usize>) -> Result<Self, SeqShapeError> {
        Self::full(shape, 1.0)
    }

    /// Creates a new `Tensor` filled with `value` with the specified shape.
    pub fn full(shape: Vec<usize>, value: f32) -> Result<Self, SeqShapeError> {
        let numel = shape.iter().product();
        Tensor::new(vec![value; numel], shape)
    }

    /// Creates the `n x n` identity matrix.
    pub fn eye(n: usize) -> Result<Self, SeqShapeError> {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Tensor::new(data, vec![n, n])
    }
}
