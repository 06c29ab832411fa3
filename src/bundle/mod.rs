//! Packaging a finished icon into a multi-resolution ICNS container.
//!
//! The masking pipeline knows nothing about how bundles are produced; it
//! hands a PNG path to an [`IconPackager`]. Two packagers are provided:
//!
//! - [`SipsPackager`] shells out to the macOS `sips` utility.
//! - [`NativePackager`] resizes and encodes the icon family in-process.

mod native;
mod sips;

use std::path::Path;

pub use native::NativePackager;
pub use sips::SipsPackager;

use crate::error::Result;

/// Pixel sizes requested by default.
pub const DEFAULT_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Something that turns a PNG into an icon container.
pub trait IconPackager {
    /// Short name used in log messages and diagnostics.
    fn name(&self) -> &str;

    /// Package `png` into `icns`, covering the requested pixel `sizes`.
    ///
    /// Packagers that delegate resolution handling to an external tool may
    /// ignore `sizes`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ExternalTool`] with non-empty diagnostics on
    /// any failure.
    fn package(&self, png: &Path, icns: &Path, sizes: &[u32]) -> Result<()>;
}

/// The packager suited to the current platform.
#[must_use]
pub fn default_packager() -> Box<dyn IconPackager> {
    if cfg!(target_os = "macos") {
        Box::new(SipsPackager::default())
    } else {
        Box::new(NativePackager)
    }
}

/// Run `packager` and report success as a boolean.
///
/// Failures are logged with the packager's diagnostics instead of being
/// propagated; the PNG at `png` is left in place either way.
pub fn create_icon_bundle(
    packager: &dyn IconPackager,
    png: &Path,
    icns: &Path,
    sizes: &[u32],
) -> bool {
    match packager.package(png, icns, sizes) {
        Ok(()) => {
            tracing::info!("Created ICNS icon: {}", icns.display());
            true
        }
        Err(err) => {
            tracing::error!("Failed to create ICNS with {}: {err}", packager.name());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Failing;

    impl IconPackager for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn package(&self, _png: &Path, _icns: &Path, _sizes: &[u32]) -> Result<()> {
            Err(Error::external_tool("failing", "boom"))
        }
    }

    #[test]
    fn test_failure_reported_as_false() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("icon.png");
        std::fs::write(&png, b"kept").unwrap();

        let ok = create_icon_bundle(&Failing, &png, &dir.path().join("a.icns"), &DEFAULT_SIZES);

        assert!(!ok);
        assert!(png.exists());
    }

    #[test]
    fn test_default_packager_name() {
        let name = default_packager().name().to_string();
        if cfg!(target_os = "macos") {
            assert_eq!(name, "sips");
        } else {
            assert_eq!(name, "native");
        }
    }
}
