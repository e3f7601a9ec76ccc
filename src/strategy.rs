//! # Install Strategy
//!
//! Typed view of the deployment install strategy embedded in a CSV under
//! `spec.install.spec`. The payload is decoded from the raw YAML value,
//! mutated, and encoded back into the same field with
//! [`crate::manifest::NamedInstallStrategy::set_strategy_spec`].
//!
//! Only the path down to the container image is typed. Permissions,
//! selectors, volumes and the rest are carried as opaque YAML.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::manifest::ObjectMeta;

/// The `deployment` install strategy payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDetailsDeployment {
    #[serde(default)]
    pub deployments: Vec<StrategyDeploymentSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_permissions: Vec<Value>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyDeploymentSpec {
    pub name: String,
    #[serde(default)]
    pub spec: DeploymentSpec,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSpec {
    #[serde(default)]
    pub template: PodTemplateSpec,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodTemplateSpec {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PodSpec,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl StrategyDetailsDeployment {
    /// Decode the strategy from the raw `spec.install.spec` value.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        serde_yaml::from_value(raw.clone()).map_err(|e| Error::InstallStrategy {
            message: e.to_string(),
        })
    }

    /// Encode the strategy back into a raw value.
    pub fn to_raw(&self) -> Result<Value> {
        Ok(serde_yaml::to_value(self)?)
    }

    /// The single operator deployment.
    ///
    /// Fails unless there is exactly one deployment, so that a template
    /// gaining a second deployment cannot be patched only partially.
    pub fn single_deployment_mut(&mut self) -> Result<&mut StrategyDeploymentSpec> {
        match self.deployments.as_mut_slice() {
            [deployment] => Ok(deployment),
            other => Err(Error::DeploymentCount { found: other.len() }),
        }
    }
}

impl StrategyDeploymentSpec {
    /// Point the first container of the pod template at `image`.
    pub fn set_operator_image(&mut self, image: &str) -> Result<()> {
        let container = self
            .spec
            .template
            .spec
            .containers
            .first_mut()
            .ok_or_else(|| Error::MissingContainer {
                deployment: self.name.clone(),
            })?;
        debug!(
            "Setting image of container '{}' in deployment '{}' to {}",
            container.name, self.name, image
        );
        container.image = image.to_string();
        Ok(())
    }
}
