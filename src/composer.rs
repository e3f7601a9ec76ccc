//! # Manifest Composer
//!
//! Applies the fixed overlay sequence that turns a CSV template into the
//! finalized manifest for one operator release.
//!
//! ## Sequence
//!
//! 1.  Decode the install strategy and require exactly one deployment.
//! 2.  Point that deployment's first container at the operator image.
//! 3.  Give known owned CRDs their display names.
//! 4.  Embed the mutated strategy back into `spec.install.spec`.
//! 5.  Set the `containerImage` annotation, then merge extra annotations.
//! 6.  Set version, name and replaces.
//! 7.  Overwrite maturity, links, keywords, provider, description and
//!     display name with the operator's static metadata.
//! 8.  Append overlay maintainers.
//! 9.  Set the `olm.skipRange` annotation when a skip range is given.
//!
//! The order matters: extra annotations are merged after `containerImage`
//! is set, so an overlay entry for that key wins.

use log::{debug, warn};
use semver::Version;

use crate::config::{GeneratorConfig, Overlays};
use crate::error::Result;
use crate::manifest::{AppLink, ClusterServiceVersion, Maintainer};

/// Base name of every CSV this tool produces.
pub const OPERATOR_NAME: &str = "performance-addon-operator";

pub const CONTAINER_IMAGE_ANNOTATION: &str = "containerImage";
pub const SKIP_RANGE_ANNOTATION: &str = "olm.skipRange";

pub const MATURITY: &str = "alpha";
pub const PROVIDER: &str = "Red Hat";
pub const DISPLAY_NAME: &str = "Performance Addon Operator";
pub const DESCRIPTION: &str = "
Performance Addon Operator provides the ability to enable advanced node performance tunings on a set of nodes.";
pub const KEYWORDS: [&str; 4] = ["numa", "realtime", "cpu pinning", "hugepages"];
pub const SOURCE_LINK_NAME: &str = "Source Code";
pub const SOURCE_LINK_URL: &str = "https://github.com/openshift-kni/performance-addon-operators";

/// Owned CRDs that get a display name, keyed by CRD name.
const CRD_DISPLAY_NAMES: &[(&str, &str)] = &[(
    "performanceprofiles.performance.openshift.io",
    "Performance Profile",
)];

/// CSV name for a given version, e.g. `performance-addon-operator.v4.2.0`.
pub fn csv_name(version: &str) -> String {
    format!("{}.v{}", OPERATOR_NAME, version)
}

/// Apply the full overlay sequence to `csv` in place.
///
/// `version` is the parsed form of `config.csv_version`. On error the
/// document may be partially updated and should be discarded.
pub fn compose(
    csv: &mut ClusterServiceVersion,
    config: &GeneratorConfig,
    version: &Version,
    overlays: &Overlays,
) -> Result<()> {
    let mut strategy = csv.spec.install.strategy_spec()?;
    strategy
        .single_deployment_mut()?
        .set_operator_image(&config.operator_image)?;

    for crd in csv.spec.custom_resource_definitions.owned.iter_mut() {
        if let Some((_, display_name)) = CRD_DISPLAY_NAMES
            .iter()
            .find(|(name, _)| *name == crd.name)
        {
            debug!("Setting display name of {} to {}", crd.name, display_name);
            crd.display_name = display_name.to_string();
        }
    }

    csv.spec.install.set_strategy_spec(&strategy)?;

    let annotations = &mut csv.metadata.annotations;
    annotations.insert(
        CONTAINER_IMAGE_ANNOTATION.to_string(),
        config.operator_image.clone(),
    );
    for (key, value) in &overlays.annotations {
        if let Some(previous) = annotations.insert(key.clone(), value.clone()) {
            if previous != *value {
                warn!(
                    "Annotation overlay replaces {}: '{}' -> '{}'",
                    key, previous, value
                );
            }
        }
    }

    csv.spec.version = version.to_string();
    csv.metadata.name = csv_name(&config.csv_version);
    csv.spec.replaces = match &config.replaces_csv_version {
        Some(replaces) => csv_name(replaces),
        None => String::new(),
    };

    csv.spec.maturity = MATURITY.to_string();
    csv.spec.links = vec![AppLink::new(SOURCE_LINK_NAME, SOURCE_LINK_URL)];
    csv.spec.keywords = KEYWORDS.iter().map(|k| k.to_string()).collect();
    csv.spec.provider = AppLink::new(PROVIDER, "");
    csv.spec.description = DESCRIPTION.to_string();
    csv.spec.display_name = DISPLAY_NAME.to_string();

    csv.spec
        .maintainers
        .extend(overlays.maintainers.iter().map(|(name, email)| Maintainer {
            name: name.clone(),
            email: email.clone(),
        }));

    if let Some(skip_range) = &config.skip_range {
        csv.metadata
            .annotations
            .insert(SKIP_RANGE_ANNOTATION.to_string(), skip_range.clone());
    }

    Ok(())
}
