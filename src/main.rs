//! hotmesh - Hot-reloading scene viewer
//!
//! Loads a scene file into submesh buffers and rebuilds them whenever the
//! file changes on disk.
//!
//! Usage: `hotmesh [FILE] [--once]`

mod host;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use host::ModelHost;
use settings::HotmeshSettings;

/// Command-line overrides
#[derive(Debug, Default, PartialEq)]
struct Args {
    file_path: Option<PathBuf>,
    once: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut parsed = Self::default();
        for arg in args {
            if arg == "--once" {
                parsed.once = true;
            } else if parsed.file_path.is_none() {
                parsed.file_path = Some(PathBuf::from(arg));
            }
        }
        parsed
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    let args = Args::parse(std::env::args().skip(1));
    let mut settings = HotmeshSettings::load();
    if let Some(file_path) = args.file_path {
        settings.file_path = file_path;
    }

    let mut host = ModelHost::new(settings.file_path.clone());
    info!("Watching {}", host.file_path().display());

    if args.once {
        let report = host
            .reload()
            .with_context(|| format!("Failed to load {}", settings.file_path.display()))?;
        info!(
            "Loaded {} submeshes ({} skipped)",
            report.submeshes,
            report.skipped.len()
        );
        return Ok(());
    }

    let frame = settings.frame_interval();
    loop {
        let start = Instant::now();
        host.tick();
        if let Some(remaining) = frame.checked_sub(start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
