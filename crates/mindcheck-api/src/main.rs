use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mindcheck_api::config::Config;
use mindcheck_api::state::AppState;
use mindcheck_bedrock::converse::BedrockGenerator;
use mindcheck_bedrock::generator::TextGenerator;
use mindcheck_instruments::catalog::Catalog;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json(&std::fs::read_to_string(path)?)?,
        None => Catalog::builtin()?,
    };

    let generator: Option<Arc<dyn TextGenerator>> = if config.ai_enabled {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;
        let generator = BedrockGenerator::new(&aws_config, &config.model_id);
        tracing::info!(
            model_id = %generator.model_id(),
            region = %config.region,
            "text generation enabled"
        );
        Some(Arc::new(generator))
    } else {
        tracing::info!("text generation disabled, suggestions use keyword scoring");
        None
    };

    let state = AppState::new(catalog, generator, config.suggest_timeout)
        .with_session_ttl(config.session_ttl);

    lambda_http::run(mindcheck_api::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
