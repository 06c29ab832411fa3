//! The icon transparency pipeline: load, mask, save.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};
use crate::image::{load_image, save_png};
use crate::mask::{apply_mask, compute_rounded_mask, EdgeMode};

/// Configuration for rounding icon corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskConfig {
    /// Corner radius as a fraction of the shorter image side (0.0-0.5).
    pub radius_factor: f64,

    /// How the corner arcs are rendered.
    pub edge_mode: EdgeMode,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            radius_factor: 0.2,
            edge_mode: EdgeMode::Hard,
        }
    }
}

impl MaskConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius factor is outside [0.0, 0.5].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=0.5).contains(&self.radius_factor) {
            return Err(Error::InvalidParameter {
                name: "radius_factor".to_string(),
                reason: "must be between 0.0 and 0.5".to_string(),
            });
        }

        Ok(())
    }

    /// Corner radius in pixels for an image of the given size.
    ///
    /// Negative and NaN factors give 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn radius_for(&self, width: u32, height: u32) -> u32 {
        let shorter = f64::from(width.min(height));
        // Float-to-int `as` saturates, so out-of-range factors cannot wrap
        (shorter * self.radius_factor).floor() as u32
    }
}

/// Round the corners of an in-memory RGBA image.
///
/// # Errors
///
/// Only fails if the mask and image disagree on size, which the pipeline
/// rules out by construction.
pub fn round_corners(image: &mut RgbaImage, config: &MaskConfig) -> Result<()> {
    let (width, height) = image.dimensions();
    let radius = config.radius_for(width, height);

    let mask = compute_rounded_mask(width, height, radius, config.edge_mode);
    apply_mask(image, &mask)
}

/// Give the icon at `input` rounded transparent corners and write it to
/// `output` as an RGBA PNG.
///
/// The radius factor is not validated here; see [`MaskConfig::validate`].
///
/// # Errors
///
/// Returns an error if the input cannot be found or decoded, or if the
/// output cannot be written.
pub fn fix_icon_transparency<P, Q>(input: P, output: Q, config: &MaskConfig) -> Result<RgbaImage>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());

    let mut image = load_image(input)?;
    round_corners(&mut image, config)?;
    save_png(&image, output)?;

    tracing::info!("Fixed icon: {}", output.display());

    Ok(image)
}
