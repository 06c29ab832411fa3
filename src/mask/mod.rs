//! Rounded-corner transparency masks.

mod apply;
mod geometry;

pub use apply::apply_mask;
pub use geometry::{compute_rounded_mask, EdgeMode, RoundedRect, OPAQUE, TRANSPARENT};
