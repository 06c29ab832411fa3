//! Rounded-rectangle geometry and mask rasterization.

use image::{GrayImage, Luma};

/// Intensity of a fully opaque mask position.
pub const OPAQUE: u8 = 255;

/// Intensity of a fully transparent mask position.
pub const TRANSPARENT: u8 = 0;

/// How pixels straddling a corner arc are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Binary mask: every pixel is either opaque or transparent.
    #[default]
    Hard,
    /// Pixels on the arc boundary get intermediate intensity.
    Antialiased,
}

/// A rectangle covering a whole image, with its four corners replaced by
/// quarter-circle arcs tangent to both adjacent edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub width: u32,
    pub height: u32,
    pub radius: u32,
}

impl RoundedRect {
    #[must_use]
    pub const fn new(width: u32, height: u32, radius: u32) -> Self {
        Self {
            width,
            height,
            radius,
        }
    }

    /// Whether any corner is actually rounded.
    ///
    /// A shape one pixel thick has no corner to cut.
    #[must_use]
    pub fn rounds_corners(&self) -> bool {
        self.radius > 0 && self.width.min(self.height) >= 2
    }

    /// Radius used when rasterizing on the pixel lattice.
    ///
    /// Arc centres sit `radius` lattice steps in from each edge, so the
    /// radius may not exceed half of the shorter lattice span. A rounded
    /// shape keeps a radius of at least 1.
    #[must_use]
    pub fn lattice_radius(&self) -> u32 {
        let shorter = self.width.min(self.height);
        let clamped = self.radius.min(shorter.saturating_sub(1) / 2);
        if self.rounds_corners() {
            clamped.max(1)
        } else {
            clamped
        }
    }

    /// Whether (x, y) is one of the four exact corner pixels.
    #[must_use]
    pub fn is_corner(&self, x: u32, y: u32) -> bool {
        let on_x_edge = x == 0 || x + 1 == self.width;
        let on_y_edge = y == 0 || y + 1 == self.height;
        on_x_edge && on_y_edge
    }

    /// Whether the lattice point (x, y) lies inside the shape.
    ///
    /// The rectangle spans `[0, width - 1] x [0, height - 1]`.
    #[must_use]
    pub fn contains_lattice(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let r = i64::from(self.lattice_radius());
        let (x, y) = (i64::from(x), i64::from(y));
        let right = i64::from(self.width) - 1 - r;
        let bottom = i64::from(self.height) - 1 - r;

        // Nearest point on the inner rectangle of arc centres.
        let cx = x.clamp(r, right.max(r));
        let cy = y.clamp(r, bottom.max(r));
        let (dx, dy) = (x - cx, y - cy);

        dx * dx + dy * dy <= r * r
    }

    /// Signed distance from the continuous point (px, py) to the shape
    /// boundary, negative inside.
    ///
    /// The rectangle spans `[0, width] x [0, height]` and the radius is
    /// clamped to half the shorter side.
    #[must_use]
    pub fn signed_distance(&self, px: f64, py: f64) -> f64 {
        let half_w = f64::from(self.width) / 2.0;
        let half_h = f64::from(self.height) / 2.0;
        let r = f64::from(self.radius).min(half_w).min(half_h);

        let qx = (px - half_w).abs() - (half_w - r);
        let qy = (py - half_h).abs() - (half_h - r);

        let outside = qx.max(0.0).hypot(qy.max(0.0));
        let inside = qx.max(qy).min(0.0);

        outside + inside - r
    }

    /// Mask intensity for pixel (x, y) under the given edge mode.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn intensity(&self, x: u32, y: u32, mode: EdgeMode) -> u8 {
        // Exact corner pixels always lie outside the arc, even when a small
        // arc would only partially cut them.
        if self.rounds_corners() && self.is_corner(x, y) {
            return TRANSPARENT;
        }

        match mode {
            EdgeMode::Hard => {
                if self.contains_lattice(x, y) {
                    OPAQUE
                } else {
                    TRANSPARENT
                }
            }
            EdgeMode::Antialiased => {
                let d = self.signed_distance(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let coverage = (0.5 - d).clamp(0.0, 1.0);
                // Safe: coverage is in [0, 1] so the product fits in u8
                (coverage * f64::from(OPAQUE)).round() as u8
            }
        }
    }
}

/// Rasterize a rounded-rectangle mask covering a `width` x `height` image.
///
/// Out-of-range radii are clamped, never rejected.
#[must_use]
pub fn compute_rounded_mask(width: u32, height: u32, radius: u32, mode: EdgeMode) -> GrayImage {
    let shape = RoundedRect::new(width, height, radius);
    tracing::debug!(
        "Rasterizing {width}x{height} mask, radius {radius} (lattice {}), {mode:?}",
        shape.lattice_radius()
    );

    GrayImage::from_fn(width, height, |x, y| Luma([shape.intensity(x, y, mode)]))
}
