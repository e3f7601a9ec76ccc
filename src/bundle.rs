//! # Bundle Output
//!
//! Drives a complete generation run and owns everything that touches the
//! output directory.
//!
//! ## Process
//!
//! 1.  **Validate**: check required settings and parse the CSV version.
//! 2.  **Load Overlays**: read the annotations and maintainers files.
//! 3.  **Reset Directory**: remove the bundle directory and recreate it empty.
//! 4.  **Compose**: load the template and apply the overlay sequence in memory.
//! 5.  **Write**: serialize the manifest and write it under its versioned
//!     filename.
//!
//! The manifest is written only after composition has fully succeeded, so
//! a failed run leaves an empty bundle directory rather than a stale or
//! partial manifest.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::composer::{compose, OPERATOR_NAME};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::manifest::ClusterServiceVersion;

/// Filename of the finalized CSV for `csv_version`.
pub fn finalized_csv_filename(csv_version: &str) -> String {
    format!("{}.v{}.clusterserviceversion.yaml", OPERATOR_NAME, csv_version)
}

/// Run the generator and return the path of the written manifest.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf> {
    config.validate()?;
    let version = config.parse_version()?;
    let overlays = config.load_overlays()?;

    if let Some(manifests_dir) = &config.manifests_dir {
        warn!(
            "Ignoring manifests directory {}: extra manifests are not bundled",
            manifests_dir.display()
        );
    }

    reset_directory(&config.bundle_dir)?;

    let mut csv = ClusterServiceVersion::from_file(&config.template_file)?;
    info!("Loaded CSV template {}", config.template_file.display());

    compose(&mut csv, config, &version, &overlays)?;

    let output_path = config
        .bundle_dir
        .join(finalized_csv_filename(&config.csv_version));
    write_manifest(&csv, &output_path)?;
    info!("Wrote {} for version {}", output_path.display(), version);

    Ok(output_path)
}

/// Remove `dir` and everything in it, then recreate it empty.
pub fn reset_directory(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => info!("Removed existing bundle directory {}", dir.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(Error::Filesystem {
                message: format!("Failed to remove directory '{}': {}", dir.display(), e),
            })
        }
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o775);
    }
    builder.create(dir).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", dir.display(), e),
    })
}

/// Serialize `csv` and write it to `path`, replacing any existing file.
pub fn write_manifest(csv: &ClusterServiceVersion, path: &Path) -> Result<()> {
    let content = csv.to_yaml_string()?;

    fs::write(path, content).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", path.display(), e),
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).map_err(|e| {
            Error::Filesystem {
                message: format!("Failed to set permissions on '{}': {}", path.display(), e),
            }
        })?;
    }

    Ok(())
}
