pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{toml_config::TomlConfig, RunConfig};
pub use crate::core::{etl::EtlEngine, pipeline::BoundaryPipeline};
pub use crate::domain::model::{Coordinate, RegionProfile, Ring, RunSummary};
pub use crate::utils::error::{EtlError, Result};
