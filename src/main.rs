use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use dictate::application::ports::StagingStore;
use dictate::application::services::TranscriptionService;
use dictate::infrastructure::audio::{OpenAiWhisperEngine, SymphoniaNormalizer};
use dictate::infrastructure::observability::{init_tracing, TracingConfig};
use dictate::infrastructure::storage::LocalStagingStore;
use dictate::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let staging: Arc<dyn StagingStore> =
        Arc::new(LocalStagingStore::new(settings.upload.dir.clone())?);
    let engine = Arc::new(OpenAiWhisperEngine::new(
        settings.transcription.api_key.clone(),
        Some(settings.transcription.base_url.clone()),
        Some(settings.transcription.model.clone()),
    ));
    let normalizer = Arc::new(SymphoniaNormalizer::new());

    let transcription_service = Arc::new(TranscriptionService::new(engine, normalizer, staging));

    let state = AppState {
        transcription_service,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
