use crate::{middleware::validate::ValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    abstract_trait::points::service::{DynPointsCommandService, DynPointsQueryService},
    domain::{
        requests::CreatePointsRequest,
        responses::{ApiResponse, PointsResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    put,
    path = "/api/points",
    tag = "Points",
    request_body = CreatePointsRequest,
    responses(
        (status = 201, description = "Points accrued, record created or updated", body = ApiResponse<PointsResponse>),
        (status = 400, description = "Validation error or malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_points(
    Extension(service): Extension<DynPointsCommandService>,
    ValidatedJson(body): ValidatedJson<CreatePointsRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.accrue(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/points/{user_id}",
    tag = "Points",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Points record", body = ApiResponse<PointsResponse>),
        (status = 404, description = "No record for that user"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_points(
    Extension(service): Extension<DynPointsQueryService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_user(&user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/points",
    tag = "Points",
    responses(
        (status = 200, description = "All points records, possibly empty", body = ApiResponse<Vec<PointsResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_points(
    Extension(service): Extension<DynPointsQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

pub fn points_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/points", put(add_points).get(list_points))
        .route("/api/points/{user_id}", get(get_points))
        .layer(Extension(app_state.di_container.points_command.service.clone()))
        .layer(Extension(app_state.di_container.points_query.service.clone()))
}
