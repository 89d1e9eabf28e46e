use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. The first error stops the
    /// run, so a failed extract never reaches the output file.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting boundary ETL process...");

        // Extract
        tracing::info!("Extracting coordinate ring...");
        let ring = self.pipeline.extract().await?;
        tracing::info!("Extracted {} coordinates", ring.len());

        // Transform
        tracing::info!("Rendering module...");
        let module = self.pipeline.transform(ring).await?;
        tracing::debug!("Rendered {} bytes", module.text.len());

        // Load
        tracing::info!("Writing module...");
        let summary = self.pipeline.load(module).await?;
        tracing::info!(
            "📁 Wrote {} coordinates to {}",
            summary.coordinate_count,
            summary.output_path
        );

        Ok(summary)
    }
}
