//! In-process ICNS packaging using the `icns` crate.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use icns::{IconFamily, PixelFormat};
use image::imageops::{self, FilterType};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};

use super::IconPackager;

/// Resizes the icon to every requested size and writes an ICNS family.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePackager;

impl NativePackager {
    const NAME: &'static str = "native";

    fn fail(diagnostics: impl Into<String>) -> Error {
        Error::external_tool(Self::NAME, diagnostics)
    }

    fn build_family(png: &Path, sizes: &[u32]) -> Result<IconFamily> {
        if sizes.is_empty() {
            return Err(Self::fail("no icon sizes requested"));
        }

        let source = image::open(png)
            .map_err(|err| Self::fail(format!("could not read {}: {err}", png.display())))?
            .into_rgba8();

        let pb = ProgressBar::new(sizes.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("valid template")
                .progress_chars("#>-"),
        );

        let mut family = IconFamily::new();
        for &size in sizes {
            pb.set_message(format!("{size}x{size}"));

            let resized = imageops::resize(&source, size, size, FilterType::Lanczos3);
            let icon = icns::Image::from_data(PixelFormat::RGBA, size, size, resized.into_raw())
                .map_err(|err| Self::fail(format!("could not encode {size}x{size}: {err}")))?;
            family
                .add_icon(&icon)
                .map_err(|err| Self::fail(format!("unsupported icon size {size}x{size}: {err}")))?;

            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(family)
    }
}

impl IconPackager for NativePackager {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn package(&self, png: &Path, icns: &Path, sizes: &[u32]) -> Result<()> {
        let family = Self::build_family(png, sizes)?;

        // Write to a temporary file first, then rename for atomicity
        let temp_path = icns.with_extension("icns.tmp");
        let file = fs::File::create(&temp_path)
            .map_err(|err| Self::fail(format!("could not create {}: {err}", icns.display())))?;

        let mut writer = BufWriter::new(file);
        if let Err(err) = family.write(&mut writer).and_then(|()| writer.flush()) {
            drop(writer);
            let _ = fs::remove_file(&temp_path);
            return Err(Self::fail(format!("could not write {}: {err}", icns.display())));
        }
        drop(writer);

        fs::rename(&temp_path, icns).map_err(|err| {
            let _ = fs::remove_file(&temp_path);
            Self::fail(format!("could not move into {}: {err}", icns.display()))
        })?;

        tracing::debug!("Wrote {} icons to {}", sizes.len(), icns.display());

        Ok(())
    }
}
