use smallvec::SmallVec;

/// Concrete tensor shape: every dimension resolved to a positive size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape(pub SmallVec<[i64; 4]>);

impl Shape {
    pub fn from_slice(dims: &[i64]) -> Self {
        Self(dims.iter().copied().collect())
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn dims(&self) -> &[i64] {
        &self.0
    }

    pub fn numel(&self) -> usize {
        self.0.iter().product::<i64>() as usize
    }
}

/// Owned f32 buffer exchanged with the execution engine. The buffer has
/// exactly one owner at a time; handing a `Tensor` to the engine moves it,
/// and `Drop` releases it on every exit path.
#[derive(Clone, Debug)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f32>,
}

impl Tensor {
    /// `data` must hold exactly `shape.numel()` elements.
    pub fn new(shape: Shape, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), shape.numel());
        Self { shape, data }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    pub fn byte_len(&self) -> usize {
        self.data.len() * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numel_is_the_dim_product() {
        assert_eq!(Shape::from_slice(&[1, 224, 224, 3]).numel(), 150_528);
        assert_eq!(Shape::from_slice(&[1, 0]).numel(), 0);
        assert_eq!(Shape::from_slice(&[]).numel(), 1);
    }

    #[test]
    fn byte_len_tracks_the_buffer() {
        let tensor = Tensor::new(Shape::from_slice(&[2, 3]), vec![0.0; 6]);
        assert_eq!(tensor.byte_len(), 24);
        assert_eq!(tensor.shape().rank(), 2);
    }
}
