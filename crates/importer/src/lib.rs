//! Kernel download utilities.
//!
//! Fetches kernels either from the built-in catalog or from arbitrary
//! URL/destination pairs produced from a manifest. Files already on disk are
//! never re-downloaded.

use std::fs::{self, File};
use std::io::copy;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use spicebind::kernels::{KernelDescriptor, LOCAL_SPICE_DIR};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of attempting to download a kernel.
#[derive(Debug)]
pub enum KernelStatus {
    Downloaded(PathBuf),
    AlreadyPresent(PathBuf),
}

/// A single download job.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub url: String,
    pub destination: PathBuf,
}

/// Downloads every catalog kernel into [`LOCAL_SPICE_DIR`].
pub fn download_kernels(
    descriptors: &[KernelDescriptor],
) -> Result<Vec<KernelStatus>, ImportError> {
    fs::create_dir_all(LOCAL_SPICE_DIR)?;
    let requests: Vec<DownloadRequest> = descriptors
        .iter()
        .map(|descriptor| DownloadRequest {
            url: descriptor.url.to_string(),
            destination: descriptor.local_path(),
        })
        .collect();
    download_requests(&requests)
}

/// Downloads each request that is not already satisfied on disk.
pub fn download_requests(requests: &[DownloadRequest]) -> Result<Vec<KernelStatus>, ImportError> {
    let client = Client::builder().build()?;
    let mut statuses = Vec::new();

    for request in requests {
        if request.destination.exists() {
            statuses.push(KernelStatus::AlreadyPresent(request.destination.clone()));
            continue;
        }
        fetch(&client, &request.url, &request.destination)?;
        statuses.push(KernelStatus::Downloaded(request.destination.clone()));
    }

    Ok(statuses)
}

fn fetch(client: &Client, url: &str, destination: &Path) -> Result<(), ImportError> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!(url, destination = %destination.display(), "fetching kernel");
    let mut response = client.get(url).send()?.error_for_status()?;
    let mut file = File::create(destination)?;
    copy(&mut response, &mut file)?;
    Ok(())
}
