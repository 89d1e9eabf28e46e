use anyhow::Context;
use boundary_etl::utils::{logger, validation::Validate};
use boundary_etl::{BoundaryPipeline, CliConfig, EtlEngine, LocalStorage};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting boundary-etl");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            return Err(e).context("invalid boundary-etl configuration");
        }
    };

    tracing::info!("📥 Input: {}", config.input_path);
    tracing::info!("📤 Output: {}", config.output_path);

    let pipeline = BoundaryPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "Arquivo atualizado com {} coordenadas reais do IBGE",
                summary.coordinate_count
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ ETL process failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            Err(e).context("boundary-etl run failed")
        }
    }
}
