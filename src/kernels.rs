//! Catalog of the generic kernels the query tools run against, and helpers
//! to validate and load them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{Backend, SpiceError, Toolkit};

/// Directory the importer drops kernels into, relative to the workspace
/// root.
pub const LOCAL_SPICE_DIR: &str = "data/spice";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelKind {
    /// Binary ephemeris segments.
    Spk,
    /// Leapseconds text kernel.
    Lsk,
    /// Planetary constants (orientation, radii).
    Pck,
}

impl KernelKind {
    pub fn label(self) -> &'static str {
        match self {
            KernelKind::Spk => "SPK",
            KernelKind::Lsk => "LSK",
            KernelKind::Pck => "PCK",
        }
    }
}

/// One kernel the catalog knows how to fetch and load.
#[derive(Debug, Clone, Copy)]
pub struct KernelDescriptor {
    pub filename: &'static str,
    pub url: &'static str,
    pub kind: KernelKind,
    pub description: &'static str,
}

impl KernelDescriptor {
    pub fn local_path(&self) -> PathBuf {
        Path::new(LOCAL_SPICE_DIR).join(self.filename)
    }
}

/// Generic kernels sufficient for planetary work: ephemerides, leapseconds
/// and body constants, straight from the NAIF server.
pub const KERNEL_CATALOG: &[KernelDescriptor] = &[
    KernelDescriptor {
        filename: "de440s.bsp",
        url: "https://naif.jpl.nasa.gov/pub/naif/generic_kernels/spk/planets/de440s.bsp",
        kind: KernelKind::Spk,
        description: "JPL DE440 planetary ephemerides, 1849-2150 coverage",
    },
    KernelDescriptor {
        filename: "naif0012.tls",
        url: "https://naif.jpl.nasa.gov/pub/naif/generic_kernels/lsk/naif0012.tls",
        kind: KernelKind::Lsk,
        description: "Leapseconds kernel",
    },
    KernelDescriptor {
        filename: "pck00011.tpc",
        url: "https://naif.jpl.nasa.gov/pub/naif/generic_kernels/pck/pck00011.tpc",
        kind: KernelKind::Pck,
        description: "Orientation and radii constants for planets and satellites",
    },
];

/// A catalog kernel present on disk.
#[derive(Debug, Clone)]
pub struct KernelSummary {
    pub descriptor: KernelDescriptor,
    pub path: PathBuf,
    pub file_size_bytes: u64,
}

/// Loads every catalog kernel into `toolkit`, checking that all of them are
/// on disk before the first load so a partial set fails fast.
pub fn load_defaults<B: Backend>(toolkit: &Toolkit<B>) -> Result<(), SpiceError> {
    let mut paths = Vec::with_capacity(KERNEL_CATALOG.len());
    for descriptor in KERNEL_CATALOG {
        let path = descriptor.local_path();
        if !path.is_file() {
            return Err(SpiceError::MissingKernel {
                name: descriptor.filename.to_string(),
                path: path.display().to_string(),
            });
        }
        let text = path
            .to_str()
            .ok_or_else(|| SpiceError::InvalidKernelPath {
                name: descriptor.filename.to_string(),
                path: path.display().to_string(),
            })?
            .to_string();
        paths.push(text);
    }
    for path in &paths {
        toolkit.load_kernel(path)?;
    }
    Ok(())
}

/// Describes the catalog kernels on disk, with their sizes.
pub fn kernel_summaries() -> Result<Vec<KernelSummary>, SpiceError> {
    KERNEL_CATALOG
        .iter()
        .map(|descriptor| {
            let path = descriptor.local_path();
            let metadata = fs::metadata(&path).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    SpiceError::MissingKernel {
                        name: descriptor.filename.to_string(),
                        path: path.display().to_string(),
                    }
                } else {
                    SpiceError::Io {
                        name: descriptor.filename.to_string(),
                        source,
                    }
                }
            })?;
            Ok(KernelSummary {
                descriptor: *descriptor,
                path,
                file_size_bytes: metadata.len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_urls_match_filenames() {
        for descriptor in KERNEL_CATALOG {
            assert!(descriptor.url.starts_with("https://naif.jpl.nasa.gov/"));
            assert!(descriptor.url.ends_with(descriptor.filename));
        }
    }

    #[test]
    fn local_paths_live_under_data_dir() {
        for descriptor in KERNEL_CATALOG {
            assert!(descriptor.local_path().starts_with(LOCAL_SPICE_DIR));
        }
    }
}
