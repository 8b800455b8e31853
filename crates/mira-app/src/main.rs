//! Main application entry point.

use clap::Parser;
use mira_app::{AppConfig, AppError, Session, ShortcutRegistry, parse_script};
use mira_render::{PixmapSurface, load_font};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mira")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Play a scripted annotation session and export PNG snapshots", long_about = None)]
struct Cli {
    /// Script with one JSON step per line
    #[arg(required_unless_present = "shortcuts")]
    script: Option<PathBuf>,

    /// Directory snapshots are written to
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overlay width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Overlay height in logical pixels
    #[arg(long)]
    height: Option<f64>,

    /// Device pixel ratio
    #[arg(long)]
    scale: Option<f64>,

    /// Font file for text strokes, overriding the bundled font
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print the global shortcuts and exit
    #[arg(long)]
    shortcuts: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.shortcuts {
        ShortcutRegistry::print_all();
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("mira: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(scale) = cli.scale {
        config.scale_factor = scale;
    }
    if cli.font.is_some() {
        config.font = cli.font;
    }

    let surface = match &config.font {
        Some(path) => PixmapSurface::with_font(load_font(path)?),
        None => PixmapSurface::new(),
    };

    let Some(script_path) = cli.script else {
        return Ok(());
    };
    let source = std::fs::read_to_string(&script_path).map_err(|source| AppError::Io {
        path: script_path.clone(),
        source,
    })?;
    let steps = parse_script(&source)?;

    log::info!(
        "Starting Mira session: {} steps, {}x{} @{}",
        steps.len(),
        config.width,
        config.height,
        config.scale_factor
    );
    let mut session = Session::new(&config, surface, &cli.out);
    session.run(steps)?;

    for path in session.snapshots() {
        println!("{}", path.display());
    }
    log::info!(
        "Session finished with {} strokes",
        session.engine().strokes().len()
    );
    Ok(())
}
