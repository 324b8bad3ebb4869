use chrono::Local;
use habit_tracker::{router, seed::sample_tracker, AppState, Config, Tracker};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let today = config.today.unwrap_or_else(|| Local::now().date_naive());

    let tracker = if config.sample_data {
        sample_tracker(today)?
    } else {
        Tracker::default()
    };
    info!(
        tasks = tracker.tasks().len(),
        habits = tracker.habits().len(),
        "tracker ready"
    );
    if let Some(fixed) = config.today {
        info!("today pinned to {fixed}");
    }

    let state = AppState::new(tracker, config.today);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
