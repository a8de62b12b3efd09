//! Kernel manifest models and loaders for the spicebind tools.
//!
//! A manifest lists the kernels a project needs by filename and source URL,
//! in either YAML or TOML. The importer downloads what the manifest names
//! and the query tools load the result.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// A set of kernels parsed from a manifest file.
#[derive(Debug, Deserialize, Clone)]
pub struct KernelManifest {
    pub kernels: Vec<KernelEntry>,
}

/// One kernel named by a manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct KernelEntry {
    pub filename: String,
    pub url: String,
    pub kind: KernelKind,
    #[serde(default)]
    pub description: Option<String>,
}

impl KernelEntry {
    /// Where this kernel lives under the local kernel directory.
    pub fn local_path(&self, kernel_dir: &Path) -> PathBuf {
        kernel_dir.join(&self.filename)
    }
}

/// Kernel file families a manifest can declare.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    Spk,
    Ck,
    Pck,
    Fk,
    Ik,
    Lsk,
    Sclk,
}

impl KernelKind {
    pub fn label(self) -> &'static str {
        match self {
            KernelKind::Spk => "SPK",
            KernelKind::Ck => "CK",
            KernelKind::Pck => "PCK",
            KernelKind::Fk => "FK",
            KernelKind::Ik => "IK",
            KernelKind::Lsk => "LSK",
            KernelKind::Sclk => "SCLK",
        }
    }
}

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported manifest format: {path} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat { path: String },
}

/// Loads a kernel manifest, dispatching on the file extension.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<KernelManifest, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("toml") => {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        }
        Some("yaml") | Some("yml") => {
            let reader = File::open(path)?;
            Ok(serde_yaml::from_reader(reader)?)
        }
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_yaml_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            "kernels.yaml",
            r#"kernels:
  - filename: de440s.bsp
    url: https://naif.jpl.nasa.gov/pub/naif/generic_kernels/spk/planets/de440s.bsp
    kind: spk
  - filename: naif0012.tls
    url: https://naif.jpl.nasa.gov/pub/naif/generic_kernels/lsk/naif0012.tls
    kind: lsk
    description: Leapseconds
"#,
        );
        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.kernels.len(), 2);
        assert_eq!(manifest.kernels[0].kind, KernelKind::Spk);
        assert_eq!(manifest.kernels[1].description.as_deref(), Some("Leapseconds"));
        assert_eq!(
            manifest.kernels[0].local_path(Path::new("data/spice")),
            Path::new("data/spice/de440s.bsp"),
        );
    }

    #[test]
    fn loads_toml_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            "kernels.toml",
            r#"[[kernels]]
filename = "pck00011.tpc"
url = "https://naif.jpl.nasa.gov/pub/naif/generic_kernels/pck/pck00011.tpc"
kind = "pck"
"#,
        );
        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.kernels.len(), 1);
        assert_eq!(manifest.kernels[0].kind.label(), "PCK");
        assert!(manifest.kernels[0].description.is_none());
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, "kernels.json", "{}");
        match load_manifest(&path) {
            Err(ConfigError::UnsupportedFormat { path }) => {
                assert!(path.ends_with("kernels.json"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn bad_kind_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            "kernels.yaml",
            r#"kernels:
  - filename: x.bsp
    url: https://example.invalid/x.bsp
    kind: warp
"#,
        );
        assert!(matches!(load_manifest(&path), Err(ConfigError::Parse(_))));
    }
}
