//! Custom error types for iconmask.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the iconmask library.
#[derive(Error, Debug)]
pub enum Error {
    /// The input image does not exist.
    #[error("input image not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to load or decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image and mask dimensions differ.
    #[error("mask is {mask_width}x{mask_height} but image is {image_width}x{image_height}")]
    DimensionMismatch {
        image_width: u32,
        image_height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    /// The icon packaging step failed or could not be launched.
    #[error("{tool} failed: {diagnostics}")]
    ExternalTool { tool: String, diagnostics: String },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl Error {
    pub(crate) fn external_tool(tool: &str, diagnostics: impl Into<String>) -> Self {
        let diagnostics = diagnostics.into();
        let diagnostics = if diagnostics.trim().is_empty() {
            "no diagnostic output".to_string()
        } else {
            diagnostics.trim().to_string()
        };
        Self::ExternalTool {
            tool: tool.to_string(),
            diagnostics,
        }
    }
}

/// Result type alias for iconmask operations.
pub type Result<T> = std::result::Result<T, Error>;
