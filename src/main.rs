use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use gemini_relay::infrastructure::llm::GeminiClient;
use gemini_relay::infrastructure::observability::init_tracing;
use gemini_relay::presentation::config::API_KEY_ENV;
use gemini_relay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;
    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    init_tracing(&settings.tracing_config(environment));

    if settings.gemini.api_key.is_none() {
        if settings.gemini.require_api_key {
            anyhow::bail!("{} is not set", API_KEY_ENV);
        }
        tracing::warn!(
            variable = API_KEY_ENV,
            "Provider API key not configured; /chat will answer 500 until it is set"
        );
    }

    let retry_policy = settings.retry.policy();
    tracing::info!(
        model = %settings.gemini.model,
        max_retries = retry_policy.max_retries(),
        base_delay_ms = retry_policy.base_delay().as_millis() as u64,
        "Configuring Gemini client"
    );

    let llm_client = Arc::new(
        GeminiClient::new(
            settings.gemini.api_key.clone(),
            settings.gemini.model.clone(),
            settings.gemini.base_url.clone(),
            retry_policy,
        )
        .with_timeout(settings.gemini.request_timeout()),
    );

    let router = create_router(AppState::new(llm_client));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host or port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
