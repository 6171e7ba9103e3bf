mod points;

pub use self::points::points_routes;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{Method, header},
};
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(points::add_points, points::get_points, points::list_points),
    tags((name = "Points", description = "Points ledger endpoints"))
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, state: AppState) -> Result<()> {
        let shared_state = Arc::new(state);

        let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(points_routes(shared_state.clone()))
            .split_for_parts();

        // Cross-origin contract: any origin, Content-Type only, and the
        // three methods the API answers to.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::OPTIONS, Method::PUT, Method::GET])
            .allow_headers([header::CONTENT_TYPE]);

        let app = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let addr = format!("0.0.0.0:{port}");
        info!("🚀 Points service listening on {addr}");

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        Ok(())
    }
}
