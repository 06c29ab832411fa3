//! Icon corner-rounding pipeline.

mod transparency;

pub use transparency::{fix_icon_transparency, round_corners, MaskConfig};
