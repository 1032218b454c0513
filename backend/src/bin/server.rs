//! Seat Vacancy HTTP Server Binary
//!
//! Loads configuration, builds the chart source and narrative client, and
//! serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! # Serve scraper dumps from ./charts
//! GEMINI_API_KEY=... cargo run --bin seat-vacancy-server
//!
//! # Different dump directory and port
//! CHART_DIR=/var/lib/charts PORT=8080 cargo run --bin seat-vacancy-server
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)
//! - see [`seat_vacancy::config`] for the rest

use std::env;
use std::sync::Arc;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use seat_vacancy::charts::ChartSourceFactory;
use seat_vacancy::config::AppConfig;
use seat_vacancy::http::{create_router, AppState};
use seat_vacancy::narrative::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Seat Vacancy HTTP Server");

    let config = AppConfig::load()?;

    let charts = ChartSourceFactory::create(&config.charts);
    info!("Chart source initialized ({})", charts.name());

    let gemini = GeminiClient::new(config.gemini_config())?;
    if !gemini.has_credentials() {
        error!("GEMINI_API_KEY is not set; itinerary advice will report a failure");
    }
    info!("Narrative model: {}", config.narrative.model);

    let state = AppState::new(charts, Arc::new(gemini), config.formatter());
    let app = create_router(state);

    let addr = config.bind_address()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
