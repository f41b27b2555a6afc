use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mergington_website::config::Config;
use mergington_website::database::ActivityRegistry;
use mergington_website::web;

const DEFAULT_LOG_FILTER: &str = "mergington_website=info,tower_http=info";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("mergington-website error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env();
    if !config.static_dir.is_dir() {
        tracing::warn!(static_dir = %config.static_dir.display(), "static directory not found");
    }

    let registry = ActivityRegistry::seeded();
    let app = web::router(registry, &config.static_dir);

    let listener = bind(&config).await?;
    let bound_addr = listener
        .local_addr()
        .context("reading bound address")?;
    tracing::info!(addr = %bound_addr, "listening");
    tracing::info!("open http://{}{}", bound_addr, web::LANDING_PAGE);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn bind(config: &Config) -> anyhow::Result<TcpListener> {
    let addr = config.bind_addr();
    match TcpListener::bind(&addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let Some(fallback) = config.fallback_bind_addr() else {
                return Err(e).with_context(|| format!("binding {addr}"));
            };
            tracing::warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("binding fallback {fallback}"))
        }
    }
}
