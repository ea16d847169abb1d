//! session-token: HTTP front for verifying social-login session tokens.
//! Used by: binary entrypoint.

use session_token::{server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let state = state::build_state()?;
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    tracing::info!("starting session-token on {}", addr);

    server::run(state, &addr).await?;
    Ok(())
}
