pub mod boundary_pipeline;
