//! # Generator Configuration
//!
//! This module defines [`GeneratorConfig`], the single explicit configuration
//! value for a generation run, and the loading of the two optional key-value
//! overlay files.
//!
//! The binary builds a `GeneratorConfig` once from its command-line flags and
//! hands it to [`crate::bundle::generate`] by reference. Nothing in the
//! library reads global state.
//!
//! ## Overlay Files
//!
//! Both overlays are flat JSON objects of string to string:
//!
//! ```json
//! { "operators.openshift.io/infrastructure-features": "[\"disconnected\"]" }
//! ```
//!
//! They are loaded into a `BTreeMap`, so the order in which entries are
//! applied to the manifest is the sorted key order, independent of the
//! order in the file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use semver::Version;

use crate::error::{Error, Result};

/// Configuration for a single generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Version of the CSV being generated. Must be a semantic version.
    pub csv_version: String,
    /// Version of the CSV this one replaces in the upgrade graph.
    pub replaces_csv_version: Option<String>,
    /// Value for the `olm.skipRange` annotation.
    pub skip_range: Option<String>,
    /// Path to the CSV template.
    pub template_file: PathBuf,
    /// Operator container image reference.
    pub operator_image: String,
    /// Directory of extra manifests. Accepted but not used by composition.
    pub manifests_dir: Option<PathBuf>,
    /// Output directory. Removed and recreated by every run.
    pub bundle_dir: PathBuf,
    /// JSON object of extra metadata annotations.
    pub annotations_file: Option<PathBuf>,
    /// JSON object of maintainer name to email.
    pub maintainers_file: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Create a configuration with the required settings and no optional ones.
    pub fn new(
        csv_version: impl Into<String>,
        template_file: impl Into<PathBuf>,
        operator_image: impl Into<String>,
        bundle_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            csv_version: csv_version.into(),
            template_file: template_file.into(),
            operator_image: operator_image.into(),
            bundle_dir: bundle_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_replaces(mut self, version: impl Into<String>) -> Self {
        self.replaces_csv_version = Some(version.into());
        self
    }

    pub fn with_skip_range(mut self, range: impl Into<String>) -> Self {
        self.skip_range = Some(range.into());
        self
    }

    pub fn with_annotations_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.annotations_file = Some(path.into());
        self
    }

    pub fn with_maintainers_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.maintainers_file = Some(path.into());
        self
    }

    /// Check that every required setting is present and non-empty.
    ///
    /// Settings are checked in a fixed order and the first missing one is
    /// reported.
    pub fn validate(&self) -> Result<()> {
        if self.csv_version.is_empty() {
            return Err(Error::MissingArgument {
                flag: "csv-version",
            });
        }
        if self.template_file.as_os_str().is_empty() {
            return Err(Error::MissingArgument {
                flag: "operator-csv-template-file",
            });
        }
        if self.operator_image.is_empty() {
            return Err(Error::MissingArgument {
                flag: "operator-image",
            });
        }
        if self.bundle_dir.as_os_str().is_empty() {
            return Err(Error::MissingArgument {
                flag: "olm-bundle-directory",
            });
        }
        Ok(())
    }

    /// Parse the CSV version as a semantic version.
    pub fn parse_version(&self) -> Result<Version> {
        Ok(Version::parse(&self.csv_version)?)
    }

    /// Load the configured overlay files. Missing overlays are empty.
    pub fn load_overlays(&self) -> Result<Overlays> {
        let annotations = match &self.annotations_file {
            Some(path) => load_key_value_map(path)?,
            None => BTreeMap::new(),
        };
        let maintainers = match &self.maintainers_file {
            Some(path) => load_key_value_map(path)?,
            None => BTreeMap::new(),
        };
        Ok(Overlays {
            annotations,
            maintainers,
        })
    }
}

/// Key-value overlays applied on top of the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlays {
    /// Extra `metadata.annotations`, merged after `containerImage` is set.
    pub annotations: BTreeMap<String, String>,
    /// Maintainer name to email, appended to `spec.maintainers`.
    pub maintainers: BTreeMap<String, String>,
}

/// Read a JSON object of string values from `path`.
pub fn load_key_value_map(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::OverlayLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let map: BTreeMap<String, String> =
        serde_json::from_str(&content).map_err(|e| Error::OverlayLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!("Loaded {} entries from {}", map.len(), path.display());
    Ok(map)
}
