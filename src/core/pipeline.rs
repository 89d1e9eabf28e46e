pub use crate::app::pipelines::boundary_pipeline::BoundaryPipeline;
