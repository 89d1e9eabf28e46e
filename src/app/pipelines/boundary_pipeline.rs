use crate::core::extract::extract_ring;
use crate::core::render::render_module;
use crate::core::{ConfigProvider, Pipeline, RenderedModule, Ring, RunSummary, Storage};
use crate::utils::error::Result;
use crate::utils::validation::inspect_ring;

pub struct BoundaryPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> BoundaryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BoundaryPipeline<S, C> {
    async fn extract(&self) -> Result<Ring> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading boundary document from: {}", input_path);

        // The input buffer is dropped before anything is written.
        let ring = {
            let document = self.storage.read_file(input_path).await?;
            tracing::debug!("Read {} bytes", document.len());
            extract_ring(&document)?
        };

        for issue in inspect_ring(&ring) {
            tracing::warn!("⚠️ {}", issue);
        }

        Ok(ring)
    }

    async fn transform(&self, ring: Ring) -> Result<RenderedModule> {
        let region = self.config.region();
        tracing::debug!(
            "Rendering {} and {} for {} ({} points)",
            region.simplified_constant,
            region.detailed_constant,
            region.name,
            ring.len()
        );
        Ok(render_module(region, &ring))
    }

    async fn load(&self, module: RenderedModule) -> Result<RunSummary> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing module ({} bytes) to: {}",
            module.text.len(),
            output_path
        );
        self.storage
            .write_file(output_path, module.text.as_bytes())
            .await?;

        Ok(RunSummary {
            output_path: output_path.to_string(),
            coordinate_count: module.coordinate_count,
        })
    }
}
