//! # iconmask
//!
//! Give application icons rounded, transparent corners and package them into
//! multi-resolution ICNS bundles.
//!
//! The corner mask is a rounded rectangle covering the whole image; its
//! intensity replaces the icon's alpha channel while colour channels are left
//! alone.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use iconmask::bundle::{create_icon_bundle, default_packager, DEFAULT_SIZES};
//! use iconmask::{fix_icon_transparency, MaskConfig};
//!
//! # fn main() -> iconmask::Result<()> {
//! fix_icon_transparency("icon.png", "icon_fixed.png", &MaskConfig::default())?;
//!
//! let packager = default_packager();
//! create_icon_bundle(
//!     packager.as_ref(),
//!     Path::new("icon_fixed.png"),
//!     Path::new("MyApp_fixed.icns"),
//!     &DEFAULT_SIZES,
//! );
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod error;
pub mod image;
pub mod mask;
pub mod pipeline;

pub use error::{Error, Result};
pub use mask::{apply_mask, compute_rounded_mask, EdgeMode};
pub use pipeline::{fix_icon_transparency, round_corners, MaskConfig};
