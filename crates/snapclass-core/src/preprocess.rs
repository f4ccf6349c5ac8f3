use crate::error::Error;

/// Decoded 8-bit RGB pixels: row-major, channels interleaved,
/// `data.len() == width * height * channels`.
#[derive(Clone, Debug)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub data: Vec<u8>,
}

/// Pixels mapped into `[-1, 1]`, same layout as the raw image. The buffer
/// moves into the input tensor when the run is built.
#[derive(Clone, Debug)]
pub struct NormalizedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub data: Vec<f32>,
}

/// Maps each byte through `(b / 255 - 0.5) * 2`, consuming the raw image.
pub fn normalize(image: RawImage) -> Result<NormalizedImage, Error> {
    let mut data = Vec::new();
    data.try_reserve_exact(image.data.len())
        .map_err(|source| Error::Resource {
            what: "normalized pixel buffer",
            source,
        })?;
    data.extend(image.data.iter().map(|&b| (f32::from(b) / 255.0 - 0.5) * 2.0));

    Ok(NormalizedImage {
        width: image.width,
        height: image.height,
        channels: image.channels,
        data,
    })
}
