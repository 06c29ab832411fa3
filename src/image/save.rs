//! Image saving utilities.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Save an RGBA buffer as a PNG file.
///
/// PNG is always used regardless of the path's extension, so the alpha
/// channel survives.
///
/// # Errors
///
/// Returns [`Error::ImageSave`] if the destination cannot be created or
/// the image cannot be encoded.
pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_alpha_survives_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]));
        img.put_pixel(0, 0, Rgba([1, 2, 3, 0]));

        save_png(&img, &path).unwrap();
        let decoded = image::open(&path).unwrap().into_rgba8();

        assert_eq!(decoded, img);
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let img = RgbaImage::new(2, 2);

        let err = save_png(&img, &path).unwrap_err();
        assert!(matches!(err, Error::ImageSave { .. }));
    }
}
