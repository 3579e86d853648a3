//! DiscCatalog: builds a browsable catalog of the music and cover art on a
//! removable volume.
//!
//! Thin binary entry point. All logic lives in the `disccatalog-core` crate.

use anyhow::Context;
use clap::Parser;
use disccatalog_core::config::default_file_name;
use disccatalog_core::platform::{self, VolumeInfo};
use disccatalog_core::probe::{MetadataProbe, NullProbe, SymphoniaProbe};
use disccatalog_core::scanner::{ScanObserver, ScanProgress};
use disccatalog_core::{generate, CatalogConfig, CatalogRequest, OutputFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "disccatalog", version, about)]
struct Cli {
    /// Catalog number printed in the header and footer.
    #[arg(short, long, default_value = "AR-VD-001")]
    catalog: String,

    /// Directory to scan instead of the first removable volume.
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Output file. Defaults to index_DVD_<volume>.<ext> on the desktop.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: html, json or csv. Overrides the config file.
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip reading audio durations.
    #[arg(long)]
    no_probe: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,

    /// List removable volumes and exit.
    #[arg(long)]
    list_volumes: bool,
}

/// Mirrors scan progress into the log.
struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_progress(&self, progress: ScanProgress) {
        match progress {
            ScanProgress::Update {
                files_found,
                current_path,
            } => tracing::debug!("{files_found} files so far, at {current_path}"),
            ScanProgress::Complete {
                files_found,
                duration,
            } => tracing::info!("Scan finished: {files_found} files in {duration:?}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("DiscCatalog starting");

    if cli.list_volumes {
        print_volumes(&platform::list_removable_volumes());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }

    let root = match cli.root {
        Some(root) => root,
        None => {
            let volume = platform::first_removable_volume()?;
            tracing::info!("Using {} volume {}", volume.kind.label(), volume.path.display());
            volume.path
        }
    };

    let output = match cli.output {
        Some(path) => path,
        None => {
            let dir = dirs::desktop_dir()
                .or_else(|| std::env::current_dir().ok())
                .context("no desktop or working directory to write the catalog to")?;
            dir.join(default_file_name(&platform::volume_tag(&root), config.format))
        }
    };

    let probe: Box<dyn MetadataProbe> = if cli.no_probe {
        Box::new(NullProbe)
    } else {
        Box::new(SymphoniaProbe)
    };

    let request = CatalogRequest::new(root.clone(), cli.catalog.trim());
    let report = generate(&request, &config, probe.as_ref(), &LogObserver, &output)
        .with_context(|| format!("cataloguing {}", root.display()))?;

    if report.document.is_empty() {
        tracing::warn!("No audio or images found on {}", root.display());
    }
    println!("{}", output.display());

    Ok(())
}

fn print_volumes(volumes: &[VolumeInfo]) {
    if volumes.is_empty() {
        println!("No removable volumes found.");
        return;
    }
    for volume in volumes {
        println!(
            "{}\t{}\t{}",
            volume.path.display(),
            volume.kind.label(),
            volume.label
        );
    }
}
