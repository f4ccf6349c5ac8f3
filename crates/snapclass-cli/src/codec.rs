use std::path::Path;

use image::{ColorType, ImageDecoder, ImageFormat, ImageReader};
use snapclass_core::{Error, RawImage};

/// Header metadata validated by the first pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatInfo {
    pub width: u32,
    pub height: u32,
}

const CHANNELS: u32 = 3;

/// First pass: metadata only. Anything but an 8-bit RGB PNG is rejected
/// here, before the pixel buffer exists.
pub fn probe_header(path: &Path) -> Result<FormatInfo, Error> {
    let decoder = open_decoder(path)?;
    let (width, height) = decoder.dimensions();
    check_color(decoder.color_type())?;

    Ok(FormatInfo { width, height })
}

/// Second pass: full pixel read into a buffer sized from the probed header.
pub fn decode_pixels(path: &Path, header: &FormatInfo) -> Result<RawImage, Error> {
    let decoder = open_decoder(path)?;

    // The file may have changed between the two passes.
    check_color(decoder.color_type())?;
    if decoder.dimensions() != (header.width, header.height) {
        return Err(Error::ImageLoad {
            path: path.to_path_buf(),
            source: "image dimensions changed between reads".into(),
        });
    }

    let len = decoder.total_bytes() as usize;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|source| Error::Resource {
            what: "pixel buffer",
            source,
        })?;
    data.resize(len, 0);

    decoder
        .read_image(&mut data)
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;

    Ok(RawImage {
        width: header.width,
        height: header.height,
        channels: CHANNELS,
        data,
    })
}

fn open_decoder(path: &Path) -> Result<impl ImageDecoder, Error> {
    let reader = ImageReader::open(path)
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

    if reader.format() != Some(ImageFormat::Png) {
        let found = match reader.format() {
            Some(format) => format!("{format:?}"),
            None => "unrecognized data".to_string(),
        };
        return Err(Error::UnsupportedFormat { found });
    }

    reader.into_decoder().map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

fn check_color(color: ColorType) -> Result<(), Error> {
    if color != ColorType::Rgb8 {
        return Err(Error::UnsupportedFormat {
            found: format!("{color:?}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("snapclass_codec_{name}_{stamp}.png"))
    }

    #[test]
    fn probes_and_decodes_rgb() {
        let path = scratch_path("rgb");
        let pixels =
            image::RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8, y as u8, 200]));
        pixels.save(&path).unwrap();

        let header = probe_header(&path).unwrap();
        assert_eq!((header.width, header.height), (3, 2));

        let raw = decode_pixels(&path, &header).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(raw.channels, 3);
        assert_eq!(raw.data.len(), 3 * 2 * 3);
        // First pixel is (0, 0, 200), row-major interleaved.
        assert_eq!(&raw.data[..3], &[0, 0, 200]);
    }

    #[test]
    fn rejects_grayscale_at_probe() {
        let path = scratch_path("gray");
        let pixels = image::GrayImage::from_pixel(4, 4, image::Luma([7]));
        pixels.save(&path).unwrap();

        let err = probe_header(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn rejects_rgba_at_probe() {
        let path = scratch_path("rgba");
        let pixels = image::RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 4]));
        pixels.save(&path).unwrap();

        let err = probe_header(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn rejects_non_png_container() {
        let path = scratch_path("container").with_extension("jpg");
        let pixels = image::RgbImage::from_pixel(4, 4, image::Rgb([9, 9, 9]));
        pixels.save(&path).unwrap();

        let err = probe_header(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("snapclass_codec_does_not_exist.png");
        assert!(matches!(probe_header(&path), Err(Error::Io { .. })));
    }
}
