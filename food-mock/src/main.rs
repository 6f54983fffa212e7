//! food-mock binary
//!
//! Environment:
//! - `FOOD_MOCK_PORT`: listen port (default 8080)
//! - `FOOD_MOCK_SEED`: `false` starts with an empty store (default seeded)
//! - `RUST_LOG`: log filter

use food_mock::{MockState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_mock=info,tower_http=info".into()),
        )
        .init();

    let port: u16 = std::env::var("FOOD_MOCK_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let seed = std::env::var("FOOD_MOCK_SEED")
        .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
        .unwrap_or(true);

    let state = if seed {
        MockState::seeded()
    } else {
        MockState::new()
    };

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(seeded = seed, "food-mock listening on http://{addr}/api");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
