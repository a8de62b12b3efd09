//! Utility binary to download SPICE kernels into `data/spice/`.
//!
//! With no arguments the built-in generic catalog is fetched, enough for
//! planetary ephemeris and time work. `--manifest` switches to a YAML or
//! TOML manifest naming arbitrary kernels.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use spicebind::kernels::{KERNEL_CATALOG, LOCAL_SPICE_DIR, kernel_summaries};
use spicebind_config::load_manifest;
use spicebind_importer::{DownloadRequest, KernelStatus, download_kernels, download_requests};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Download SPICE kernels")]
struct Cli {
    /// Kernel manifest (.toml, .yaml or .yml) replacing the built-in catalog
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let statuses = match &cli.manifest {
        Some(path) => {
            let manifest = load_manifest(path)
                .with_context(|| format!("loading manifest {}", path.display()))?;
            let requests: Vec<DownloadRequest> = manifest
                .kernels
                .iter()
                .map(|entry| DownloadRequest {
                    url: entry.url.clone(),
                    destination: entry.local_path(Path::new(LOCAL_SPICE_DIR)),
                })
                .collect();
            download_requests(&requests)?
        }
        None => download_kernels(KERNEL_CATALOG)?,
    };

    for status in statuses {
        match status {
            KernelStatus::Downloaded(path) => println!("[downloaded] {}", path.display()),
            KernelStatus::AlreadyPresent(path) => println!("[skip] {}", path.display()),
        }
    }

    if cli.manifest.is_none() {
        match kernel_summaries() {
            Ok(summaries) => {
                println!("\nLocal kernel summaries:");
                for summary in summaries {
                    println!(
                        "  - {:<13} [{} | {}] {}\n      └ {}",
                        summary.descriptor.filename,
                        summary.descriptor.kind.label(),
                        format_size(summary.file_size_bytes),
                        summary.descriptor.description,
                        summary.path.display()
                    );
                }
            }
            Err(err) => eprintln!("[warn] unable to summarize kernels: {err}"),
        }
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= 1024.0 && unit_idx < UNITS.len() - 1 {
        value /= 1024.0;
        unit_idx += 1;
    }
    if unit_idx == 0 {
        format!("{bytes} {}", UNITS[unit_idx])
    } else {
        format!("{value:.1} {}", UNITS[unit_idx])
    }
}
