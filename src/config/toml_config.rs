use crate::domain::model::{BoundingBox, RegionProfile};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub region: Option<RegionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: Option<String>,
    pub state: Option<String>,
    pub simplified_constant: Option<String>,
    pub detailed_constant: Option<String>,
    pub bounds: Option<BoundingBox>,
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| EtlError::ConfigError {
            message: format!(
                "cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.as_ref().map(|i| i.path.as_str())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.path.as_str())
    }

    /// Region settings layered over the built-in Paraná profile.
    pub fn region_profile(&self) -> RegionProfile {
        let mut profile = RegionProfile::default();
        let Some(region) = &self.region else {
            return profile;
        };

        if let Some(name) = &region.name {
            profile.name = name.clone();
        }
        if let Some(state) = &region.state {
            profile.state = state.clone();
        }
        if let Some(constant) = &region.simplified_constant {
            profile.simplified_constant = constant.clone();
        }
        if let Some(constant) = &region.detailed_constant {
            profile.detailed_constant = constant.clone();
        }
        if let Some(bounds) = region.bounds {
            profile.bounds = bounds;
        }
        profile
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }
        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }
        self.region_profile().validate()
    }
}

impl Validate for RegionProfile {
    fn validate(&self) -> Result<()> {
        validation::validate_label("region.name", &self.name)?;
        validation::validate_label("region.state", &self.state)?;
        validation::validate_identifier("region.simplified_constant", &self.simplified_constant)?;
        validation::validate_identifier("region.detailed_constant", &self.detailed_constant)?;
        if self.simplified_constant == self.detailed_constant {
            return Err(EtlError::ConfigValidationError {
                field: "region.detailed_constant".to_string(),
                message: "must differ from region.simplified_constant".to_string(),
            });
        }
        validation::validate_bounds("region.bounds", &self.bounds)
    }
}
