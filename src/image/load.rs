//! Image loading utilities.

use std::io::ErrorKind;
use std::path::Path;

use image::{GenericImageView, ImageError, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk as an 8-bit RGBA buffer.
///
/// The image is:
/// 1. Decoded from the specified path (format inferred from content and extension)
/// 2. Converted to RGBA if it uses any other colour type
///
/// Images without an alpha channel come back fully opaque.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the path does not exist and
/// [`Error::ImageLoad`] if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| match source {
        ImageError::IoError(ref io) if io.kind() == ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        source => Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let (width, height) = img.dimensions();
    tracing::debug!(
        "Loaded {} ({width}x{height}, {:?})",
        path.display(),
        img.color()
    );

    Ok(img.into_rgba8())
}
