mod app;
mod convert;
mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glance_core::config::ViewerConfig;
use glance_core::io::image_io::load_pixmap;
use glance_core::viewport::ViewportTransform;

#[derive(Parser)]
#[command(name = "glance", about = "Minimal borderless image viewer")]
#[command(version)]
struct Cli {
    /// Image file to display. A file picker opens when omitted.
    image: Option<PathBuf>,

    /// Initial scale factor (overrides the configuration file).
    #[arg(long)]
    scale: Option<f64>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ViewerConfig::load_or_default(cli.config.as_deref())
        .and_then(ViewerConfig::validated)
        .context("failed to load configuration")?;

    let path = resolve_image_path(cli.image)?;
    let pixmap =
        load_pixmap(&path).with_context(|| format!("failed to load {}", path.display()))?;
    info!(
        "loaded {} ({}x{})",
        path.display(),
        pixmap.width,
        pixmap.height
    );

    let mut transform = ViewportTransform::new(pixmap.width, pixmap.height);
    transform.set_scale(cli.scale.unwrap_or(config.initial_scale));
    let display = transform.projection().display;

    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "glance".to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                (display.width as f32).max(1.0),
                (display.height as f32).max(1.0),
            ])
            .with_decorations(false)
            .with_resizable(false)
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "glance",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::GlanceApp::new(
                &cc.egui_ctx,
                &pixmap,
                transform,
                config,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start viewer: {e}"))
}

/// Use the path argument when given, otherwise ask with a native file
/// dialog. Cancelling the dialog is a startup error.
fn resolve_image_path(arg: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path);
    }
    rfd::FileDialog::new()
        .add_filter(
            "Images",
            &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
        )
        .pick_file()
        .context("no image selected")
}
