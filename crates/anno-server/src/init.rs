//! Server bootstrap
//!
//! Loads configuration, initializes logging, assembles the service
//! graph (stores, persister, chat provider, use case services), and
//! serves the router until the process is stopped.

use crate::routes::create_router;
use crate::state::AppState;
use anno_application::{AnnotationService, GenerationService, LibraryService};
use anno_domain::error::Result;
use anno_domain::ports::{
    AnnotationStore, ChatCompletionProvider, ChatProviderConfig, CodeFileStore, DocumentStore,
};
use anno_infrastructure::logging::init_logging;
use anno_infrastructure::{
    AppConfig, ConfigLoader, InMemoryAnnotationStore, InMemoryCodeFileStore, InMemoryDocumentStore,
    JsonFilePersister,
};
use anno_providers::{create_chat_provider, NullChatProvider};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Load configuration, start logging, and run the HTTP server
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;
    if let Some(path) = loader.resolved_config_path() {
        info!("Configuration loaded from {}", path.display());
    }

    let state = build_state(&config)?;
    let router = create_router(state, &config.server.cors_origin)?;

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "annotation backend listening");
    axum::serve(listener, router).await?;
    Ok(())
}

/// Assemble the service graph from configuration
pub fn build_state(config: &AppConfig) -> Result<AppState> {
    let documents: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    let code_files: Arc<dyn CodeFileStore> = Arc::new(InMemoryCodeFileStore::new());
    let annotations: Arc<dyn AnnotationStore> = Arc::new(InMemoryAnnotationStore::new());
    let persister = Arc::new(JsonFilePersister::new(&config.storage.annotations_dir));
    let chat = build_chat_provider(&config.llm)?;

    Ok(AppState {
        library: Arc::new(LibraryService::new(documents.clone(), code_files.clone())),
        annotations: Arc::new(AnnotationService::new(annotations, persister)),
        generation: Arc::new(GenerationService::new(documents, code_files, chat)),
    })
}

/// Build the chat provider, degrading to the null provider when the
/// configured provider needs an API key and none is present
fn build_chat_provider(config: &ChatProviderConfig) -> Result<Arc<dyn ChatCompletionProvider>> {
    if config.provider == "openai" && config.api_key.is_none() {
        warn!("no LLM API key configured; annotation generation will fail until one is set");
        return Ok(Arc::new(NullChatProvider));
    }
    let provider = create_chat_provider(config)?;
    info!(provider = provider.provider_name(), "chat provider ready");
    Ok(provider)
}
