//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_template(templates::OPERATOR);
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::templates;
    pub use super::TestFixture;
    pub use super::{IMAGE, OUTPUT_FILE};
}

/// Operator image passed by [`TestFixture::command`].
pub const IMAGE: &str = "quay.io/example/operator:4.2.0";

/// Manifest filename for version 4.2.0.
pub const OUTPUT_FILE: &str = "performance-addon-operator.v4.2.0.clusterserviceversion.yaml";

/// CSV templates for testing.
#[allow(dead_code)]
pub mod templates {
    /// A template with a single operator deployment.
    pub const OPERATOR: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: ClusterServiceVersion
metadata:
  annotations:
    capabilities: Basic Install
    containerImage: REPLACE_IMAGE
  creationTimestamp: null
  name: performance-addon-operator.v0.0.0
  namespace: openshift-performance-addon
spec:
  customresourcedefinitions:
    owned:
    - kind: PerformanceProfile
      name: performanceprofiles.performance.openshift.io
      version: v1
  description: placeholder
  displayName: placeholder
  install:
    spec:
      deployments:
      - name: performance-operator
        spec:
          replicas: 1
          template:
            metadata:
              creationTimestamp: null
              labels:
                name: performance-operator
            spec:
              containers:
              - image: REPLACE_IMAGE
                name: performance-operator
      permissions:
      - rules:
        - apiGroups:
          - ""
          resources:
          - configmaps
          verbs:
          - '*'
        serviceAccountName: performance-operator
    strategy: deployment
  installModes:
  - supported: true
    type: OwnNamespace
  maintainers:
  - email: existing@example.com
    name: Existing Maintainer
  provider:
    name: placeholder
  replaces: performance-addon-operator.v0.0.0-old
  version: 0.0.0
"#;

    /// A template whose install strategy has two deployments.
    pub const TWO_DEPLOYMENTS: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: ClusterServiceVersion
metadata:
  name: performance-addon-operator.v0.0.0
spec:
  install:
    spec:
      deployments:
      - name: first
        spec:
          template:
            spec:
              containers:
              - image: REPLACE_IMAGE
                name: first
      - name: second
        spec:
          template:
            spec:
              containers:
              - image: REPLACE_IMAGE
                name: second
    strategy: deployment
"#;

    /// A template whose install strategy has no deployments.
    pub const NO_DEPLOYMENTS: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: ClusterServiceVersion
metadata:
  name: performance-addon-operator.v0.0.0
spec:
  install:
    spec:
      deployments: []
    strategy: deployment
"#;
}

/// A temporary directory holding a template, overlays and the bundle
/// output directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write the CSV template.
    pub fn with_template(self, content: &str) -> Self {
        self.with_file("template.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn template_path(&self) -> PathBuf {
        self.path().join("template.yaml")
    }

    pub fn bundle_dir(&self) -> PathBuf {
        self.path().join("bundle")
    }

    /// Path of the manifest for version 4.2.0.
    pub fn output_path(&self) -> PathBuf {
        self.bundle_dir().join(OUTPUT_FILE)
    }

    /// Read the generated manifest for version 4.2.0.
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("Failed to read generated CSV")
    }

    /// A command with every required flag set for version 4.2.0.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("csv-generator");
        cmd.current_dir(self.path())
            .arg("--csv-version")
            .arg("4.2.0")
            .arg("--operator-csv-template-file")
            .arg(self.template_path())
            .arg("--operator-image")
            .arg(IMAGE)
            .arg("--olm-bundle-directory")
            .arg(self.bundle_dir());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
