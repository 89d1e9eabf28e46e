use crate::domain::model::{RegionProfile, RenderedModule, Ring, RunSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn region(&self) -> &RegionProfile;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Ring>;
    async fn transform(&self, ring: Ring) -> Result<RenderedModule>;
    async fn load(&self, module: RenderedModule) -> Result<RunSummary>;
}
