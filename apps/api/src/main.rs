mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::engine::KeywordMatchScorer;
use crate::matching::lexicon::SkillLexicon;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill lexicon once; shared read-only by every request
    let lexicon = Arc::new(load_lexicon(&config)?);

    let scorer = Arc::new(KeywordMatchScorer::new(lexicon, config.weights));
    let w = scorer.weights();
    info!(
        "Match weights: coverage={} skills={} experience={} (override below {} caps at {})",
        w.coverage, w.skills, w.experience, w.override_threshold, w.override_cap
    );

    let state = AppState {
        config: config.clone(),
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the lexicon from `SKILL_LEXICON_PATH`, or the built-in catalog.
fn load_lexicon(config: &Config) -> Result<SkillLexicon> {
    let lexicon = match &config.skill_lexicon_path {
        Some(path) => {
            let lexicon = SkillLexicon::from_file(path)
                .with_context(|| format!("Failed to load skill lexicon {}", path.display()))?;
            info!("Skill lexicon loaded from {} ({} skills)", path.display(), lexicon.len());
            lexicon
        }
        None => {
            let lexicon = SkillLexicon::builtin().context("Built-in skill lexicon is invalid")?;
            info!("Skill lexicon: built-in catalog ({} skills)", lexicon.len());
            lexicon
        }
    };
    Ok(lexicon)
}
