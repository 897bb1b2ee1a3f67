use std::net::SocketAddr;
use aerodesk_api::{app, app_config::Config, AppState, AuthConfig};
use aerodesk_core::SeatMapBuilder;
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aerodesk_api=debug,aerodesk_core=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        port = config.server.port,
        collision_policy = ?config.seat_map.collision_policy,
        max_seats = config.seat_map.max_seats,
        "Starting AeroDesk API"
    );

    let app_state = AppState {
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            admin_role: config.auth.admin_role.clone(),
        },
        seat_maps: SeatMapBuilder::with_policy(config.seat_map.collision_policy)
            .with_max_seats(config.seat_map.max_seats),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
