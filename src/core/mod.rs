pub mod etl;
pub mod extract;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Coordinate, RegionProfile, RenderedModule, Ring, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
