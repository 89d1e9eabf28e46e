use super::toml_config::TomlConfig;
use super::RunConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "boundary-etl")]
#[command(about = "Generate a TypeScript boundary module from an IBGE GeoJSON file")]
pub struct CliConfig {
    /// Input GeoJSON file [default: parana-ibge.geojson]
    #[arg(long = "input")]
    pub input_path: Option<String>,

    /// Output TypeScript file, overwritten on every run [default: src/data/parana-geojson.ts]
    #[arg(long = "output")]
    pub output_path: Option<String>,

    /// Optional TOML file with paths and region settings
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        Ok(RunConfig::resolve(
            self.input_path.clone(),
            self.output_path.clone(),
            file.as_ref(),
        ))
    }
}
