#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::RegionProfile;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_INPUT_PATH: &str = "parana-ibge.geojson";
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/parana-geojson.ts";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub region: RegionProfile,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            region: RegionProfile::default(),
        }
    }
}

impl RunConfig {
    /// Explicit overrides win over the TOML file, which wins over the defaults.
    pub fn resolve(
        input_path: Option<String>,
        output_path: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            input_path: input_path
                .or_else(|| file.and_then(|f| f.input_path()).map(str::to_string))
                .unwrap_or(defaults.input_path),
            output_path: output_path
                .or_else(|| file.and_then(|f| f.output_path()).map(str::to_string))
                .unwrap_or(defaults.output_path),
            region: file.map(TomlConfig::region_profile).unwrap_or(defaults.region),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn region(&self) -> &RegionProfile {
        &self.region
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        self.region.validate()
    }
}
