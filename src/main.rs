use std::sync::Arc;

use zenbox::api::{AppState, scan_routes};
use zenbox::config::{ScanOptions, ServerConfig};
use zenbox::pipeline::{Classifier, InboxScanner, LexiconScorer};
use zenbox::provider::GmailConnector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    // ── Pipeline ─────────────────────────────────────────────────────────
    let classifier = Arc::new(Classifier::new(Arc::new(LexiconScorer::new())));
    let scanner = Arc::new(InboxScanner::new(classifier, ScanOptions::default()));

    let state = AppState {
        scanner,
        connector: Arc::new(GmailConnector::new()),
    };
    let app = scan_routes(state);

    // ── Server ───────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    eprintln!("📬 Zenbox v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Scan API: http://{}/scan-emails", config.bind_addr());
    tracing::info!(port = config.port, "Zenbox server started");

    axum::serve(listener, app).await?;
    Ok(())
}
