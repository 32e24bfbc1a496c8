use crate::interface_adapters::clients::NasaNeoClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

const NEOWS_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Read the credential once; it is immutable for the process lifetime.
    // An empty key is still passed through and rejected upstream.
    let api_key = std::env::var("NASA_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("NASA_API_KEY is not set; upstream calls will carry an empty credential.");
    }

    let base_url =
        std::env::var("NASA_API_BASE_URL").unwrap_or_else(|_| NEOWS_BASE_URL.into());
    tracing::debug!(base_url = %base_url, "NEO catalog client configured.");

    let catalog = match NasaNeoClient::new(&base_url, api_key) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(base_url = %base_url, error = %e, "invalid NASA API base URL");
            return; // Abort startup on a malformed base URL.
        }
    };

    let state = Arc::new(AppState { catalog });

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 5000));
    tracing::info!(%addr, "listening");

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };

    // Serve app and report errors rather than panicking.
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
