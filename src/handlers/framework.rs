//! Framework handlers: list, search, add, update, delete, setversion, versions.

use crate::error::{AppError, ValidationErrors};
use crate::model::{FrameworkPayload, FrameworkView, VersionPayload, VersionView};
use crate::response::{ok_empty, ok_text, CREATED_BODY};
use crate::service::FrameworkService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/frameworks",
    tag = "frameworks",
    responses((status = 200, description = "All frameworks with their versions", body = Vec<FrameworkView>))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<FrameworkView>>, AppError> {
    Ok(Json(FrameworkService::list(state.store.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/frameworks/search/{name}",
    tag = "frameworks",
    params(("name" = String, Path, description = "Case-sensitive substring of the name")),
    responses((status = 200, description = "Matching frameworks", body = Vec<FrameworkView>))
)]
pub async fn search(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<FrameworkView>>, AppError> {
    Ok(Json(FrameworkService::search(state.store.as_ref(), &name).await?))
}

#[utoipa::path(
    post,
    path = "/frameworks/add",
    tag = "frameworks",
    request_body = FrameworkPayload,
    responses(
        (status = 200, description = "Created", body = String, content_type = "text/plain"),
        (status = 400, description = "Constraint violations", body = ValidationErrors)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<FrameworkPayload>,
) -> Result<impl IntoResponse, AppError> {
    FrameworkService::create(state.store.as_ref(), payload).await?;
    Ok(ok_text(CREATED_BODY))
}

#[utoipa::path(
    put,
    path = "/frameworks/update/{id}",
    tag = "frameworks",
    params(("id" = i64, Path, description = "Framework id; created when unknown")),
    request_body = FrameworkPayload,
    responses(
        (status = 200, description = "Replaced"),
        (status = 400, description = "Constraint violations", body = ValidationErrors)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<FrameworkPayload>,
) -> Result<impl IntoResponse, AppError> {
    FrameworkService::update(state.store.as_ref(), id, payload).await?;
    Ok(ok_empty())
}

#[utoipa::path(
    delete,
    path = "/frameworks/delete/{id}",
    tag = "frameworks",
    params(("id" = i64, Path, description = "Framework id")),
    responses(
        (status = 200, description = "Deleted together with its versions"),
        (status = 400, description = "No such framework", body = String, content_type = "text/plain")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    FrameworkService::delete(state.store.as_ref(), id).await?;
    Ok(ok_empty())
}

#[utoipa::path(
    put,
    path = "/frameworks/setversion/{id}",
    tag = "frameworks",
    params(("id" = i64, Path, description = "Owning framework id")),
    request_body = VersionPayload,
    responses(
        (status = 200, description = "Version stored and made current"),
        (status = 400, description = "No such framework (text) or constraint violations (JSON)", body = ValidationErrors)
    )
)]
pub async fn set_version(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<VersionPayload>,
) -> Result<impl IntoResponse, AppError> {
    FrameworkService::set_version(state.store.as_ref(), id, payload).await?;
    Ok(ok_empty())
}

#[utoipa::path(
    get,
    path = "/frameworks/versions/{id}",
    tag = "frameworks",
    params(("id" = i64, Path, description = "Owning framework id")),
    responses(
        (status = 200, description = "Versions of the framework, oldest first", body = Vec<VersionView>),
        (status = 400, description = "No such framework", body = String, content_type = "text/plain")
    )
)]
pub async fn versions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<VersionView>>, AppError> {
    Ok(Json(FrameworkService::versions(state.store.as_ref(), id).await?))
}
