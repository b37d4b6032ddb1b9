// File: services/agenda_backend/src/main.rs
mod app_state;
mod service_factory;

use agenda_config::load_config;
use agenda_scheduling::routes::routes as scheduling_routes;
use app_state::{AppState, StartupError};
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    agenda_common::logging::init();
    let config = Arc::new(load_config()?);

    let AppState {
        config,
        scheduling,
        sync_worker,
    } = AppState::build(config).await?;

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Agenda API!" }))
        .merge(scheduling_routes(scheduling));

    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use agenda_scheduling::doc::SchedulingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Agenda API",
                version = "0.1.0",
                description = "Appointment scheduling service",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(SchedulingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Router is gone, so the queue is closed; let pending pushes finish
    if let Err(e) = sync_worker.await {
        warn!("Calendar sync worker ended abnormally: {}", e);
    }
    info!("Server stopped");
    Ok(())
}
