//! # ClusterServiceVersion Model
//!
//! The subset of the OLM `ClusterServiceVersion` schema that the generator
//! reads or writes, plus catch-all maps that carry every other field through
//! unchanged.
//!
//! ## Serialization Rules
//!
//! [`ClusterServiceVersion::to_yaml_string`] produces the bundle form of the
//! manifest:
//!
//! - the output begins with a `---` document marker,
//! - the top-level `status` block is dropped,
//! - `creationTimestamp` is dropped from object metadata,
//! - annotations are written in sorted key order.
//!
//! The install strategy payload under `spec.install.spec` is kept as a raw
//! YAML value here. See [`crate::strategy`] for its typed form.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::strategy::StrategyDetailsDeployment;

/// A ClusterServiceVersion document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceVersion {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ClusterServiceVersionSpec,
    /// Read so templates carrying a status still parse, never written.
    #[serde(default, skip_serializing)]
    pub status: Option<Value>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Object metadata shared by the CSV and the pod templates it embeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing)]
    pub creation_timestamp: Option<Value>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceVersionSpec {
    #[serde(default, rename = "customresourcedefinitions")]
    pub custom_resource_definitions: CustomResourceDefinitions,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default)]
    pub install: NamedInstallStrategy,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<AppLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maturity: String,
    #[serde(default)]
    pub provider: AppLink,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub replaces: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// A named link, used for both `spec.links` and `spec.provider`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLink {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl AppLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomResourceDefinitions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owned: Vec<CrdDescription>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// An owned CRD descriptor. Only the name and display name are typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdDescription {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// `spec.install`: the strategy name and its embedded payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedInstallStrategy {
    #[serde(default)]
    pub strategy: String,
    /// Raw strategy payload, decoded on demand by [`Self::strategy_spec`].
    #[serde(default, rename = "spec")]
    pub spec_raw: Value,
}

impl NamedInstallStrategy {
    /// Decode the embedded deployment strategy.
    pub fn strategy_spec(&self) -> Result<StrategyDetailsDeployment> {
        StrategyDetailsDeployment::from_raw(&self.spec_raw)
    }

    /// Replace the embedded payload with `spec`.
    pub fn set_strategy_spec(&mut self, spec: &StrategyDetailsDeployment) -> Result<()> {
        self.spec_raw = spec.to_raw()?;
        Ok(())
    }
}

impl ClusterServiceVersion {
    /// Parse a CSV from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a CSV template from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::TemplateLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let csv = Self::parse(&content).map_err(|e| Error::TemplateLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!("Parsed CSV template {} ({})", path.display(), csv.metadata.name);
        Ok(csv)
    }

    /// Serialize to the bundle's YAML form.
    pub fn to_yaml_string(&self) -> Result<String> {
        let body = serde_yaml::to_string(self)?;
        Ok(format!("---\n{}", body))
    }
}
