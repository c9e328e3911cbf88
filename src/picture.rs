// src/picture.rs
//! Profile picture canonicalization.
//!
//! Every picture goes through the same fixed transform: decode, reject
//! anything that is not close to square, stretch to a fixed square edge and
//! drop alpha/palette so the result is plain 8-bit RGB. Writing the result is
//! left to the caller (see `store`), which owns the naming scheme.

use image::imageops::FilterType;
use image::RgbImage;
use tracing::debug;

use crate::config::ImageSpec;
use crate::core::net;
use crate::error::ImageError;
use crate::record::ImageFailure;

/// Anything that can turn an image URL into a canonical picture.
/// The runner only ever talks to this trait; tests plug in fakes.
pub trait ImageSource: Sync {
    fn canonicalize(&self, url: &str) -> Result<RgbImage, ImageError>;
}

/// Fetches over HTTP, then canonicalizes.
pub struct HttpImageSource {
    spec: ImageSpec,
}

impl HttpImageSource {
    pub fn new(spec: ImageSpec) -> Self { Self { spec } }
}

impl ImageSource for HttpImageSource {
    fn canonicalize(&self, url: &str) -> Result<RgbImage, ImageError> {
        canonicalize(url, &self.spec)
    }
}

/// Fetch `url` and canonicalize the body.
pub fn canonicalize(url: &str, spec: &ImageSpec) -> Result<RgbImage, ImageError> {
    let bytes = net::http_get_bytes(url)?;
    debug!("Fetched {} bytes from {url}", bytes.len());
    canonicalize_bytes(&bytes, spec)
}

/// Decode, check aspect, resize, convert.
pub fn canonicalize_bytes(bytes: &[u8], spec: &ImageSpec) -> Result<RgbImage, ImageError> {
    let img = image::load_from_memory(bytes).map_err(ImageError::Decode)?;

    let (width, height) = (img.width(), img.height());
    if !spec.accepts(width, height) {
        return Err(ImageError::AspectRatio { width, height });
    }

    // Stretch: the source is already near-square.
    let resized = img.resize_exact(spec.size, spec.size, FilterType::CatmullRom);
    Ok(resized.to_rgb8())
}

impl ImageError {
    /// The human-facing class of this failure.
    pub fn failure(&self) -> ImageFailure {
        match self {
            ImageError::Fetch(_) => ImageFailure::Fetch,
            ImageError::Decode(_) => ImageFailure::Decode,
            ImageError::AspectRatio { .. } => ImageFailure::NotSquare,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 128]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn rgba_png_becomes_fixed_square_rgb() {
        let spec = ImageSpec::default();
        let out = canonicalize_bytes(&png(1000, 960), &spec).unwrap();
        assert_eq!(out.dimensions(), (256, 256));
        // RgbImage is 3 bytes per pixel by construction
        assert_eq!(out.as_raw().len(), 256 * 256 * 3);
    }

    #[test]
    fn aspect_just_inside_window_is_accepted() {
        let spec = ImageSpec::default();
        assert!(canonicalize_bytes(&png(104, 100), &spec).is_ok());
        assert!(canonicalize_bytes(&png(100, 104), &spec).is_ok());
    }

    #[test]
    fn aspect_just_outside_window_is_rejected() {
        let spec = ImageSpec::default();
        let err = canonicalize_bytes(&png(106, 100), &spec).unwrap_err();
        assert!(matches!(err, ImageError::AspectRatio { width: 106, height: 100 }));
        assert_eq!(err.failure(), ImageFailure::NotSquare);

        // 1000x950 is ~1.053, outside the window
        let err = canonicalize_bytes(&png(1000, 950), &spec).unwrap_err();
        assert_eq!(err.failure(), ImageFailure::NotSquare);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = canonicalize_bytes(b"<html>not an image</html>", &ImageSpec::default()).unwrap_err();
        assert_eq!(err.failure(), ImageFailure::Decode);
    }

    #[test]
    fn custom_edge_size_is_honoured() {
        let spec = ImageSpec { size: 32, ..ImageSpec::default() };
        let out = canonicalize_bytes(&png(64, 64), &spec).unwrap();
        assert_eq!(out.dimensions(), (32, 32));
    }
}
