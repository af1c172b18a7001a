//! helpdesk-bot entry point
//!
//! Loads configuration, wires the HTTP collaborators behind their trait
//! seams, and serves the fulfillment webhook.

mod app;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use helpdesk_bot_agent::FulfillmentAgent;
use helpdesk_bot_config::BotConfig;
use helpdesk_bot_persistence::HttpTicketStore;
use helpdesk_bot_prediction::HttpClassifier;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = BotConfig::load(config_path.as_deref())?;

    let timezone: chrono_tz::Tz = config
        .bot
        .timezone
        .parse()
        .map_err(|err| anyhow::anyhow!("invalid bot.timezone {:?}: {err}", config.bot.timezone))?;

    let store = Arc::new(HttpTicketStore::new(
        &config.store.endpoint,
        &config.store.table,
    ));
    let classifier = Arc::new(HttpClassifier::new(&config.prediction.endpoint));
    let agent = Arc::new(FulfillmentAgent::new(store, classifier, &config.prediction));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!(%addr, %timezone, "helpdesk bot listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app::router(AppState { agent, timezone })).await?;
    Ok(())
}
