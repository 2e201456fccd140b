use cloud_cost_optimizer::cli::Menu;
use cloud_cost_optimizer::llm::{self, CompletionClient};
use cloud_cost_optimizer::telemetry::init_telemetry;
use cloud_cost_optimizer::{ArtifactStore, Config, Pipeline, StructuredFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let telemetry_guard = init_telemetry(&config)?;

    tracing::info!(
        environment = %config.environment,
        provider = %config.llm_provider,
        model = %config.llm_model,
        data_dir = %config.data_dir.display(),
        otel_export = telemetry_guard.is_exporting(),
        "Starting cloud-cost-optimizer"
    );

    let provider = llm::provider_from_config(&config)?;
    let fetcher = StructuredFetcher::new(CompletionClient::new(provider), &config);
    let pipeline = Pipeline::new(fetcher, ArtifactStore::new(&config.data_dir));

    let result = Menu::new(pipeline).run().await;

    tracing::info!("Shutting down");
    telemetry_guard.shutdown();

    Ok(result?)
}
