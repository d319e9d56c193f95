mod cli;
mod handlers;

pub use cli::ServeOptions;

use crate::model::{GeminiGenerator, Generator, ModelConfig};
use crate::prelude::{eprintln, *};
use axum::{
    routing::{get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const DOCUMENTED_CODE_PATH: &str = "/api/generate-documented-code";
pub const MARKDOWN_DOCS_PATH: &str = "/api/generate-markdown-docs";

/// Read-only state shared by every request.
pub struct AppState<G> {
    pub generator: G,
}

impl<G: Generator> AppState<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

pub fn router<G: Generator>(state: Arc<AppState<G>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            DOCUMENTED_CODE_PATH,
            post(handlers::generate_documented_code::<G>),
        )
        .route(MARKDOWN_DOCS_PATH, post(handlers::generate_markdown_docs::<G>))
        .layer(cors)
        .with_state(state)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = ModelConfig::from(&global);
    let addr = format!("{}:{}", options.host, options.port);

    let missing_key = config.api_key.is_none();
    let generator = GeminiGenerator::new(config);

    if global.verbose {
        eprintln!("Starting codedoc server on {}...", addr);
        eprintln!("Model: {}", generator.model());
        if missing_key {
            eprintln!("GEMINI_API_KEY is not set; generation requests will fail");
        }
    }

    let state = Arc::new(AppState::new(generator));
    let app_router = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    info!("codedoc listening on http://{addr}");

    if global.verbose {
        eprintln!("Documented code endpoint: http://{}{}", addr, DOCUMENTED_CODE_PATH);
        eprintln!("Markdown docs endpoint: http://{}{}", addr, MARKDOWN_DOCS_PATH);
    }

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
