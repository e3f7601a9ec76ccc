//! # Error Handling
//!
//! This module defines the centralized error type for the `csv-generator`
//! library. It uses `thiserror` to describe every way a generation run can
//! fail, with enough context (file paths, flag names, counts) to point the
//! build pipeline at the broken input.
//!
//! ## Categories
//!
//! - **Configuration errors**: a required argument is missing or empty.
//! - **Input errors**: the template or an overlay file cannot be read or
//!   parsed, or the CSV version is not a semantic version.
//! - **Structural errors**: the install strategy does not have exactly one
//!   deployment, or that deployment has no containers.
//! - **Output errors**: the bundle directory cannot be reset or the manifest
//!   cannot be written.
//!
//! None of these are recoverable. The binary reports the error and exits
//! with a non-zero status.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for csv-generator operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was not supplied, or was supplied empty.
    #[error("--{flag} is required")]
    MissingArgument { flag: &'static str },

    /// The CSV template could not be read or did not match the manifest schema.
    #[error("Failed to load CSV template '{}': {message}", path.display())]
    TemplateLoad { path: PathBuf, message: String },

    /// An annotations or maintainers overlay file could not be read or parsed.
    #[error("Failed to load overlay '{}': {message}", path.display())]
    OverlayLoad { path: PathBuf, message: String },

    /// The embedded install strategy could not be decoded.
    #[error("Install strategy error: {message}")]
    InstallStrategy { message: String },

    /// The install strategy must describe exactly one deployment.
    #[error("expected 1 deployment, found {found}")]
    DeploymentCount { found: usize },

    /// The operator deployment has no container to receive the image.
    #[error("deployment '{deployment}' has no containers")]
    MissingContainer { deployment: String },

    /// An error occurred while resetting the bundle directory or writing the
    /// manifest.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A YAML serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A semantic versioning parsing error, wrapped from `semver::Error`.
    #[error("Semver parsing error: {0}")]
    Semver(#[from] semver::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
