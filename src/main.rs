//! iconmask CLI - round icon corners and build ICNS bundles.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iconmask::bundle::{
    create_icon_bundle, default_packager, IconPackager, NativePackager, SipsPackager,
    DEFAULT_SIZES,
};
use iconmask::{fix_icon_transparency, EdgeMode, MaskConfig};

/// Which packager produces the ICNS bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PackagerKind {
    /// `sips` on macOS, the built-in encoder elsewhere.
    Auto,
    /// The macOS `sips` utility.
    Sips,
    /// The built-in ICNS encoder.
    Native,
}

/// Give an application icon rounded transparent corners and package it as ICNS.
#[derive(Parser, Debug)]
#[command(name = "iconmask")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path.
    #[arg(value_name = "INPUT", default_value = "icon.png")]
    input: PathBuf,

    /// Output PNG path.
    #[arg(value_name = "OUTPUT", default_value = "icon_fixed.png")]
    output: PathBuf,

    /// Corner radius as a fraction of the shorter side (0.0-0.5).
    #[arg(short, long, default_value = "0.2", value_name = "FLOAT")]
    radius_factor: f64,

    /// Antialias the corner arcs instead of using hard edges.
    #[arg(long)]
    antialias: bool,

    /// ICNS bundle path.
    #[arg(long, default_value = "MyApp_fixed.icns", value_name = "PATH")]
    icns: PathBuf,

    /// Skip building the ICNS bundle.
    #[arg(long)]
    no_icns: bool,

    /// Icon sizes to include in the bundle.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec(), value_name = "LIST")]
    sizes: Vec<u32>,

    /// Packager used for the ICNS bundle.
    #[arg(long, value_enum, default_value_t = PackagerKind::Auto)]
    packager: PackagerKind,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("iconmask={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = MaskConfig {
        radius_factor: args.radius_factor,
        edge_mode: if args.antialias {
            EdgeMode::Antialiased
        } else {
            EdgeMode::Hard
        },
    };
    config.validate().context("Invalid configuration")?;

    fix_icon_transparency(&args.input, &args.output, &config)
        .context("Failed to fix icon transparency")?;

    let bundled = (!args.no_icns).then(|| {
        let packager: Box<dyn IconPackager> = match args.packager {
            PackagerKind::Auto => default_packager(),
            PackagerKind::Sips => Box::new(SipsPackager::default()),
            PackagerKind::Native => Box::new(NativePackager),
        };

        // The PNG is already usable, so a failed bundle is not fatal
        create_icon_bundle(packager.as_ref(), &args.output, &args.icns, &args.sizes)
    });

    println!("{}", completion_message(&args.output, &args.icns, bundled));

    Ok(())
}

/// Final status line; `bundled` is `None` when packaging was skipped.
fn completion_message(output: &Path, icns: &Path, bundled: Option<bool>) -> String {
    match bundled {
        Some(true) => format!(
            "Icon fix complete: {} and {}",
            output.display(),
            icns.display()
        ),
        Some(false) => format!(
            "Icon fix complete: {} (PNG only; ICNS packaging failed)",
            output.display()
        ),
        None => format!("Icon fix complete: {}", output.display()),
    }
}
