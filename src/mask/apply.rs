//! Compositing a mask onto an image's alpha channel.

use image::{GrayImage, RgbaImage};

use crate::error::{Error, Result};
use crate::image::ALPHA_CHANNEL;

/// Overwrite the alpha channel of `image` with the intensity of `mask`.
///
/// Colour channels are left untouched. Applying the same mask twice gives
/// the same result as applying it once.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the mask and image sizes differ.
pub fn apply_mask(image: &mut RgbaImage, mask: &GrayImage) -> Result<()> {
    if image.dimensions() != mask.dimensions() {
        let (image_width, image_height) = image.dimensions();
        let (mask_width, mask_height) = mask.dimensions();
        return Err(Error::DimensionMismatch {
            image_width,
            image_height,
            mask_width,
            mask_height,
        });
    }

    for (pixel, intensity) in image.pixels_mut().zip(mask.pixels()) {
        pixel[ALPHA_CHANNEL] = intensity[0];
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{compute_rounded_mask, EdgeMode};
    use image::{Luma, Rgba};

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 7) as u8, (y * 5) as u8, (x ^ y) as u8, 128])
        })
    }

    #[test]
    fn test_alpha_replaced_colour_kept() {
        let original = gradient(20, 10);
        let mut img = original.clone();
        let mask = GrayImage::from_fn(20, 10, |x, _| Luma([(x * 10) as u8]));

        apply_mask(&mut img, &mask).unwrap();

        for ((after, before), m) in img.pixels().zip(original.pixels()).zip(mask.pixels()) {
            assert_eq!(after.0[..3], before.0[..3]);
            assert_eq!(after[3], m[0]);
        }
    }

    #[test]
    fn test_idempotent() {
        let mask = compute_rounded_mask(32, 32, 8, EdgeMode::Antialiased);
        let mut once = gradient(32, 32);
        apply_mask(&mut once, &mask).unwrap();

        let mut twice = once.clone();
        apply_mask(&mut twice, &mask).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_dimension_mismatch() {
        let original = gradient(10, 10);
        for (w, h) in [(9, 10), (10, 11), (1, 1), (20, 5)] {
            let mut img = original.clone();
            let mask = GrayImage::new(w, h);

            let err = apply_mask(&mut img, &mask).unwrap_err();

            assert!(matches!(
                err,
                Error::DimensionMismatch {
                    image_width: 10,
                    image_height: 10,
                    ..
                }
            ));
            assert_eq!(img, original, "image must not be modified");
        }
    }
}
