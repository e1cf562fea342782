use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::middleware;
use axum::Router;
use tower::ServiceBuilder;
use tracing::info;

use crate::config::Config;
use crate::helpers::cors::{attach_cors_headers, CorsSettings};
use crate::repositories::ReservationStore;

pub mod reservation_controller;

#[derive(Clone)]
pub struct AppState {
    pub reservation_store: Arc<dyn ReservationStore>,
    pub config: Config,
}

pub async fn serve(
    reservation_store: Arc<dyn ReservationStore>,
    config: &Config,
) -> anyhow::Result<()> {
    let app_state = AppState {
        reservation_store,
        config: config.clone(),
    };
    let application = router_endpoints(app_state);

    let port = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("API server listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    let cors_settings = Arc::new(CorsSettings::from_config(&app_state.config));

    reservation_controller::router(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(
                    cors_settings,
                    attach_cors_headers,
                ))
        )
}
