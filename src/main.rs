use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sustainability_council::adapters::ai::{GeminiConfig, GeminiProvider, MockAIProvider};
use sustainability_council::adapters::http::{build_router, HttpServices};
use sustainability_council::adapters::storage::{FilePreferenceStore, InMemorySessionRepository};
use sustainability_council::application::{CouncilClient, CouncilClientConfig, Preferences};
use sustainability_council::config::{AiConfig, AiProvider, AppConfig, ServerConfig};
use sustainability_council::ports::AIProvider as AIProviderPort;

fn init_tracing(server: &ServerConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if server.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .flatten_event(true),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_provider(ai: &AiConfig) -> Result<Arc<dyn AIProviderPort>, Box<dyn Error>> {
    match ai.provider {
        AiProvider::Mock => {
            tracing::warn!("Using the mock provider; replies are canned");
            Ok(Arc::new(MockAIProvider::demo().without_call_recording()))
        }
        AiProvider::Gemini => {
            let key = ai
                .gemini_api_key
                .as_ref()
                .ok_or("ai.gemini_api_key is required for the gemini provider")?;
            let config = GeminiConfig::new(key.expose_secret().clone())
                .with_model(ai.tool_model.clone())
                .with_base_url(ai.base_url.clone())
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries);
            Ok(Arc::new(GeminiProvider::new(config)?))
        }
    }
}

fn spawn_session_sweeper(sessions: InMemorySessionRepository, idle_timeout: Duration) {
    let period = (idle_timeout / 4).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            sessions.evict_idle().await;
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let provider = build_provider(&config.ai)?;
    let info = provider.provider_info();
    let client = CouncilClient::new(
        provider,
        CouncilClientConfig {
            debate_model: config.ai.debate_model.clone(),
            tool_model: config.ai.tool_model.clone(),
            debate_temperature: config.ai.debate_temperature,
        },
    );

    let store = FilePreferenceStore::open(&config.storage.preferences_path).await?;
    let sessions = InMemorySessionRepository::with_limits(
        config.storage.session_idle_timeout(),
        config.storage.max_sessions,
    );
    spawn_session_sweeper(sessions.clone(), config.storage.session_idle_timeout());

    let services = HttpServices {
        sessions: Arc::new(sessions),
        client,
        preferences: Preferences::new(Arc::new(store)),
        max_input_length: config.scenario.max_length,
    };
    let app = build_router(services, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        provider = %info.name,
        debate_model = %config.ai.debate_model,
        tool_model = %config.ai.tool_model,
        environment = ?config.server.environment,
        "Sustainability Council listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
