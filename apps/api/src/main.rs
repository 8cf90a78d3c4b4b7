use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillpath::config::Config;
use skillpath::db::create_pool;
use skillpath::llm_client::LlmClient;
use skillpath::report::{LlmReportGenerator, ReportGenerator, TemplateReportGenerator};
use skillpath::routes::build_router;
use skillpath::skills::dictionary::SkillDictionary;
use skillpath::state::AppState;
use skillpath::store::PgSkillStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillPath API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    let store = Arc::new(PgSkillStore::new(db));

    // Skill vocabulary (falls back to the built-in list when the file is missing)
    let dictionary = SkillDictionary::load(&config.skill_dict_path)?;

    // Narrative reports: LLM when a key is configured, template otherwise
    let reporter: Arc<dyn ReportGenerator> = match &config.llm_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                config.llm_base_url.clone(),
                config.llm_model.clone(),
            )?;
            info!("LLM client initialized (model: {})", llm.model());
            Arc::new(LlmReportGenerator::new(llm))
        }
        None => {
            info!("LLM_API_KEY not set, using template reports");
            Arc::new(TemplateReportGenerator)
        }
    };

    let state = AppState::new(store, dictionary, reporter);

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
