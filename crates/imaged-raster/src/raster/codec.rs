// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Load and save rasters through the `image` codecs. The output format is
// chosen from the file extension.

use std::path::Path;

use image::{DynamicImage, ImageFormat};
use imaged_core::error::{ImagedError, Result};
use imaged_core::types::SaveFormat;
use tracing::{debug, info, instrument};

use super::buffer::Raster;

impl Raster {
    /// Decode the image file at `path` into an RGB raster.
    ///
    /// Alpha is dropped. Missing, unreadable, corrupt or unsupported files all
    /// fail with `ImagedError::Decode`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            ImagedError::Decode(format!("failed to open {}: {}", path.as_ref().display(), err))
        })?;
        info!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self::from_rgb(img.to_rgb8()))
    }

    /// Decode raw encoded bytes (PNG, JPEG, ...) into an RGB raster.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| ImagedError::Decode(format!("failed to decode image: {}", err)))?;
        debug!(width = img.width(), height = img.height(), "Image decoded from bytes");
        Ok(Self::from_rgb(img.to_rgb8()))
    }

    /// Encode the raster in `format`. `jpeg_quality` is only used for JPEG.
    pub fn encode(&self, format: SaveFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
        match format {
            SaveFormat::Jpeg => {
                // JPEG has no alpha channel.
                let mut buffer = Vec::new();
                let rgb = self.rgb_view();
                let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                    &mut buffer,
                    jpeg_quality.clamp(1, 100),
                );
                rgb.write_with_encoder(encoder)
                    .map_err(|err| ImagedError::Encode(format!("JPEG encoding failed: {}", err)))?;
                Ok(buffer)
            }
            SaveFormat::Png => encode_to_format(&self.to_dynamic(), ImageFormat::Png),
            SaveFormat::Bmp => encode_to_format(&self.to_dynamic(), ImageFormat::Bmp),
            SaveFormat::Tiff => encode_to_format(&self.to_dynamic(), ImageFormat::Tiff),
        }
    }

    /// Write the raster to `path`. The format is inferred from the extension.
    ///
    /// Unknown or missing extensions fail with `UnsupportedFormat` before
    /// anything is written; encoder and filesystem failures fail with `Encode`.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>, jpeg_quality: u8) -> Result<()> {
        let path = path.as_ref();
        let format = SaveFormat::from_path(path)?;
        let bytes = self.encode(format, jpeg_quality)?;
        std::fs::write(path, &bytes).map_err(|err| {
            ImagedError::Encode(format!("failed to save image to {}: {}", path.display(), err))
        })?;
        info!(format = format.mime_type(), bytes = bytes.len(), "Image saved");
        Ok(())
    }
}

/// Encode a `DynamicImage` into the specified format, returning the raw bytes.
fn encode_to_format(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, format)
        .map_err(|err| ImagedError::Encode(format!("image encoding failed: {}", err)))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    /// Smooth gradient; JPEG handles it with little loss.
    fn gradient(width: u32, height: u32) -> Raster {
        Raster::from_rgb(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 4) as u8, (y * 4) as u8, 128])
        }))
    }

    #[test]
    fn png_round_trip_is_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.png");
        let raster = gradient(32, 16);

        raster.save(&path, 95).unwrap();
        let loaded = Raster::open(&path).unwrap();

        assert_eq!(loaded, raster);
    }

    #[test]
    fn jpeg_round_trip_is_within_tolerance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.JPG");
        let raster = gradient(32, 32);

        raster.save(&path, 95).unwrap();
        let loaded = Raster::open(&path).unwrap();

        assert_eq!(loaded.dimensions(), raster.dimensions());
        let total: u64 = loaded
            .as_bytes()
            .iter()
            .zip(raster.as_bytes())
            .map(|(a, b)| u64::from(a.abs_diff(*b)))
            .sum();
        let mean = total as f64 / raster.as_bytes().len() as f64;
        assert!(mean <= 8.0, "mean absolute error {mean} exceeds tolerance");
    }

    #[test]
    fn load_drops_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(2, 2, Rgba([50, 60, 70, 10]))
            .save(&path)
            .unwrap();

        let loaded = Raster::open(&path).unwrap();
        assert_eq!(loaded.channel_count(), 3);
        assert_eq!(loaded.pixel(0, 0), Some(&[50u8, 60, 70][..]));
    }

    #[test]
    fn rgba_raster_saves_as_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flat.jpeg");
        let raster = Raster::from_rgba(RgbaImage::from_pixel(8, 8, Rgba([200, 10, 10, 128])));
        raster.save(&path, 90).unwrap();
        assert_eq!(Raster::open(&path).unwrap().dimensions(), (8, 8));
    }

    #[test]
    fn missing_file_is_decode_error() {
        let dir = tempdir().unwrap();
        let err = Raster::open(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, ImagedError::Decode(_)));
    }

    #[test]
    fn corrupt_file_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(Raster::open(&path), Err(ImagedError::Decode(_))));
        assert!(matches!(
            Raster::from_bytes(b"\x89PNG garbage"),
            Err(ImagedError::Decode(_))
        ));
    }

    #[test]
    fn unknown_extension_is_unsupported_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("picture.xyz");
        let err = gradient(4, 4).save(&path, 95).unwrap_err();
        assert!(matches!(err, ImagedError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn missing_directory_is_encode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.png");
        let err = gradient(4, 4).save(&path, 95).unwrap_err();
        assert!(matches!(err, ImagedError::Encode(_)));
    }

    #[test]
    fn encoded_bytes_decode_back() {
        let raster = gradient(8, 8);
        for format in [SaveFormat::Png, SaveFormat::Bmp, SaveFormat::Tiff] {
            let bytes = raster.encode(format, 95).unwrap();
            assert_eq!(Raster::from_bytes(&bytes).unwrap(), raster, "{format:?}");
        }
    }
}
