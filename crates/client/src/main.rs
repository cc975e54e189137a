//! Horde client binary.
//!
//! Composition root: loads configuration from the environment (and `.env`),
//! installs logging, builds the session runtime and lets the autopilot play
//! one session.
//!
//! ```bash
//! HORDE_DEFAULT_MODE=endless HORDE_ZOMBIE_COUNT=6 HORDE_MAX_TURNS=500 cargo run -p horde-client
//! ```

use std::sync::Arc;

use anyhow::Result;
use horde_client::{Client, ClientConfig, logging};
use runtime::{GreedyActionProvider, RuntimeConfig, SessionService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let mut client_config = ClientConfig::from_env();
    let session_id = client_config.session_id_or_generate();
    client_config.session_id = Some(session_id.clone());

    // 2. Setup logging
    let _guard = logging::setup_logging(&session_id, client_config.log_dir.as_deref())?;

    tracing::info!("Starting horde client");
    tracing::info!("Session ID: {}", session_id);
    tracing::info!(
        "Mode: {}, zombies: {}, companion: {}",
        runtime_config.default_mode,
        runtime_config.zombie_count,
        runtime_config.companion_enabled
    );

    // 3. Build the session runtime
    let service = Arc::new(SessionService::in_memory(runtime_config));

    // 4. Assemble and run the client
    let client = Client::builder()
        .service(service)
        .provider(GreedyActionProvider::new())
        .config(client_config)
        .build()?;

    let summary = client.run().await?;
    tracing::info!("Run finished: {}", serde_json::to_string(&summary)?);

    Ok(())
}
