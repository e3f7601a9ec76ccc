//! Generate command implementation
//!
//! Turns the command-line flags into a `GeneratorConfig`, runs the
//! generator, and prints where the CSV was written.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use csv_generator::bundle;
use csv_generator::config::GeneratorConfig;

/// Arguments for generating the bundle CSV
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The unified CSV version
    #[arg(long, value_name = "VERSION")]
    pub csv_version: String,

    /// The unified CSV version this new CSV will replace
    #[arg(long, value_name = "VERSION")]
    pub replaces_csv_version: Option<String>,

    /// The CSV version skip range
    #[arg(long, value_name = "RANGE")]
    pub skip_range: Option<String>,

    /// Path to the CSV template
    #[arg(long = "operator-csv-template-file", value_name = "PATH")]
    pub template_file: PathBuf,

    /// Operator container image
    #[arg(long, value_name = "IMAGE")]
    pub operator_image: String,

    /// The directory containing the extra manifests to be included in the registry bundle
    #[arg(long = "manifests-directory", value_name = "PATH")]
    pub manifests_dir: Option<PathBuf>,

    /// The directory to output the unified CSV to (removed and recreated)
    #[arg(long = "olm-bundle-directory", value_name = "PATH")]
    pub bundle_dir: PathBuf,

    /// Inject metadata annotations from the given JSON file
    #[arg(long = "inject-annotations-from", value_name = "PATH")]
    pub annotations_file: Option<PathBuf>,

    /// Add maintainers from the given JSON file of name to email
    #[arg(long = "maintainers-from", value_name = "PATH")]
    pub maintainers_file: Option<PathBuf>,
}

impl GenerateArgs {
    /// Build the library configuration. Empty optional values count as unset.
    pub fn into_config(self) -> GeneratorConfig {
        GeneratorConfig {
            csv_version: self.csv_version,
            replaces_csv_version: self.replaces_csv_version.filter(|v| !v.is_empty()),
            skip_range: self.skip_range.filter(|v| !v.is_empty()),
            template_file: self.template_file,
            operator_image: self.operator_image,
            manifests_dir: non_empty_path(self.manifests_dir),
            bundle_dir: self.bundle_dir,
            annotations_file: non_empty_path(self.annotations_file),
            maintainers_file: non_empty_path(self.maintainers_file),
        }
    }
}

fn non_empty_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = args.into_config();
    let output_path = bundle::generate(&config)?;
    println!("CSV written to {}", output_path.display());
    Ok(())
}
