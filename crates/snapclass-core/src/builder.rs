use crate::error::Error;
use crate::preprocess::NormalizedImage;
use crate::spec::TensorSpec;
use crate::tensor::Tensor;

/// Validates the image against the declared input shape and moves its
/// buffer into the input tensor. The batch dimension is pinned to 1; no
/// resizing or other coercion is attempted on a mismatch.
pub fn build_input_tensor(declared: &TensorSpec, image: NormalizedImage) -> Result<Tensor, Error> {
    let mut shape = declared.normalized();
    let actual = [
        i64::from(image.width),
        i64::from(image.height),
        i64::from(image.channels),
    ];

    if shape.rank() != 4 || shape.dims()[1..4] != actual {
        return Err(Error::ShapeMismatch {
            declared: shape.dims().to_vec(),
            actual: actual.to_vec(),
        });
    }

    shape.0[0] = 1;
    Ok(Tensor::new(shape, image.data))
}

/// Zero-initialized output tensor sized from the declared output shape.
pub fn build_output_tensor(declared: &TensorSpec) -> Result<Tensor, Error> {
    let shape = declared.normalized();
    let numel = shape.numel();

    let mut data = Vec::new();
    data.try_reserve_exact(numel)
        .map_err(|source| Error::Resource {
            what: "output tensor buffer",
            source,
        })?;
    data.resize(numel, 0.0);

    Ok(Tensor::new(shape, data))
}
