//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::save_png;

/// Index of the alpha channel within an RGBA pixel.
pub const ALPHA_CHANNEL: usize = 3;
