use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use serenity_scheduler::config::AppConfig;
use serenity_scheduler::routes;
use serenity_scheduler::services::confirmation::logged::LogConfirmationSender;
use serenity_scheduler::state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        submit_delay_ms = config.submit_delay_ms,
        session_ttl_minutes = config.session_ttl_minutes,
        "loaded configuration"
    );

    let confirmations = LogConfirmationSender::new(config.business_name.clone());
    let state = Arc::new(AppState::new(config.clone(), Box::new(confirmations)));

    let sweeper_state = Arc::clone(&state);
    tokio::spawn(async move {
        let ttl = chrono::Duration::minutes(sweeper_state.config.session_ttl_minutes);
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let expired = sweeper_state.sessions.expire_idle(ttl);
            if expired > 0 {
                tracing::info!(expired, "expired idle booking sessions");
            }
        }
    });

    let app = routes::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
