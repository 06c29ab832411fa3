//! ICNS packaging through the macOS `sips` utility.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

use super::{IconPackager, DEFAULT_SIZES};

/// `sips` always emits its own resolution set, which matches the defaults.
fn uses_tool_sizes(sizes: &[u32]) -> bool {
    sizes.is_empty() || sizes == DEFAULT_SIZES
}

/// Runs `sips -s format icns <png> --out <icns>`.
///
/// `sips` picks the resolutions itself; requesting other sizes logs a warning.
#[derive(Debug, Clone)]
pub struct SipsPackager {
    program: PathBuf,
}

impl Default for SipsPackager {
    fn default() -> Self {
        Self::with_program("sips")
    }
}

impl SipsPackager {
    /// Use a specific `sips` executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, png: &Path, icns: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-s", "format", "icns"])
            .arg(png)
            .arg("--out")
            .arg(icns);
        cmd
    }
}

impl IconPackager for SipsPackager {
    fn name(&self) -> &str {
        "sips"
    }

    fn package(&self, png: &Path, icns: &Path, sizes: &[u32]) -> Result<()> {
        if !uses_tool_sizes(sizes) {
            tracing::warn!(
                "{} picks its own icon sizes; ignoring requested sizes {sizes:?}",
                self.name()
            );
        }
        tracing::debug!("Running {} for {}", self.program.display(), png.display());

        let output = self.command(png, icns).output().map_err(|err| {
            Error::external_tool(
                self.name(),
                format!("could not launch {}: {err}", self.program.display()),
            )
        })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let diagnostics = if !stderr.trim().is_empty() {
            stderr.into_owned()
        } else if !stdout.trim().is_empty() {
            stdout.into_owned()
        } else {
            format!("exited with {}", output.status)
        };

        Err(Error::external_tool(self.name(), diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let cmd = SipsPackager::default().command(Path::new("in.png"), Path::new("out.icns"));

        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(cmd.get_program(), "sips");
        assert_eq!(args, ["-s", "format", "icns", "in.png", "--out", "out.icns"]);
    }

    #[test]
    fn test_custom_sizes_are_flagged() {
        assert!(uses_tool_sizes(&DEFAULT_SIZES));
        assert!(uses_tool_sizes(&[]));
        assert!(!uses_tool_sizes(&[16, 32]));
        assert!(!uses_tool_sizes(&[1024, 512, 256, 128, 64, 32, 16]));
    }

    #[test]
    fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("icon.png");
        std::fs::write(&png, b"png").unwrap();
        let packager = SipsPackager::with_program(dir.path().join("not-a-real-sips"));

        let err = packager
            .package(&png, &dir.path().join("icon.icns"), &[])
            .unwrap_err();

        match err {
            Error::ExternalTool { tool, diagnostics } => {
                assert_eq!(tool, "sips");
                assert!(diagnostics.contains("could not launch"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(png.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("icon.png");
        let packager = SipsPackager::with_program("false");

        let err = packager
            .package(&png, &dir.path().join("icon.icns"), &[])
            .unwrap_err();

        match err {
            Error::ExternalTool { diagnostics, .. } => {
                assert!(diagnostics.starts_with("exited with"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
