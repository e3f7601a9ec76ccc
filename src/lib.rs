//! # CSV Generator Library
//!
//! This library builds the versioned `ClusterServiceVersion` (CSV) manifest
//! that ships in the performance addon operator's OLM bundle. It is used by
//! the `csv-generator` binary from the build pipeline, but every step is
//! available on its own for tests and other tooling.
//!
//! ## Quick Example
//!
//! ```no_run
//! use csv_generator::bundle;
//! use csv_generator::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::new(
//!     "4.2.0",
//!     "manifests/csv-template.yaml",
//!     "quay.io/example/performance-addon-operator:4.2.0",
//!     "bundle/4.2.0",
//! )
//! .with_replaces("4.1.0");
//!
//! let written = bundle::generate(&config).unwrap();
//! println!("CSV written to {}", written.display());
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the explicit settings for one run and the
//!   JSON overlay files for annotations and maintainers.
//! - **Manifest (`manifest`)**: the CSV document model. Fields the generator
//!   does not know about are carried through untouched.
//! - **Install Strategy (`strategy`)**: the deployment payload embedded in
//!   the CSV, decoded and re-embedded around image substitution.
//! - **Composer (`composer`)**: the fixed overlay sequence that finalizes a
//!   template for one release.
//! - **Bundle (`bundle`)**: directory reset, naming and writing of the final
//!   manifest.

pub mod bundle;
pub mod composer;
pub mod config;
pub mod error;
pub mod manifest;
pub mod strategy;

#[cfg(test)]
mod fixtures;
