use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::demos::service::{DemoService, DemoStoreError};
use crate::error::{AppError, NotFoundBody, StorageBody, ValidationBody};
use crate::extractors::json::AppJson;
use crate::models::demo::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/demos",
    tag = "Demos",
    operation_id = "postDemo",
    summary = "Create a demo",
    request_body = CreateDemoRequest,
    responses(
        (status = 201, description = "Demo created", body = DemoResponse),
        (status = 400, description = "Validation failure", body = ValidationBody),
        (status = 500, description = "Backing-store failure", body = StorageBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_demo(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateDemoRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("creating demo");

    let demo = DemoService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(DemoResponse::from(demo))))
}

#[utoipa::path(
    get,
    path = "/demos",
    tag = "Demos",
    operation_id = "getDemos",
    summary = "List demos, newest first",
    params(DemoListQuery),
    responses(
        (status = 200, description = "Matching demos", body = [DemoResponse]),
        (status = 500, description = "Backing-store failure", body = StorageBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_demos(
    State(state): State<AppState>,
    Query(query): Query<DemoListQuery>,
) -> Result<Json<Vec<DemoResponse>>, AppError> {
    tracing::debug!("listing demos");

    let demos = DemoService::new(&state.db).list(query.into()).await?;

    Ok(Json(demos.into_iter().map(DemoResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/demos/{id}",
    tag = "Demos",
    operation_id = "getOneDemo",
    summary = "Get a demo by id",
    params(("id" = i32, Path, description = "Demo ID")),
    responses(
        (status = 200, description = "The demo", body = DemoResponse),
        (status = 404, description = "Not found (plain text)", body = String),
        (status = 500, description = "Backing-store failure", body = StorageBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_demo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DemoResponse>, AppError> {
    tracing::debug!("fetching demo {id}");

    // Fetch-by-id renders its 404 as plain text; everything else follows the
    // default store-to-HTTP mapping.
    let demo = DemoService::new(&state.db)
        .find_by_id(id)
        .await
        .map_err(|err| match err {
            DemoStoreError::NotFound(id) => AppError::NotFoundText { id },
            other => other.into(),
        })?;

    Ok(Json(demo.into()))
}

#[utoipa::path(
    put,
    path = "/demos/{id}",
    tag = "Demos",
    operation_id = "putDemo",
    summary = "Update a demo",
    params(("id" = i32, Path, description = "Demo ID")),
    request_body = UpdateDemoRequest,
    responses(
        (status = 200, description = "Updated demo", body = DemoResponse),
        (status = 400, description = "Validation failure", body = ValidationBody),
        (status = 404, description = "Not found", body = NotFoundBody),
        (status = 500, description = "Backing-store failure", body = StorageBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_demo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateDemoRequest>,
) -> Result<Json<DemoResponse>, AppError> {
    tracing::debug!("updating demo {id}");

    let demo = DemoService::new(&state.db)
        .update(id, payload.into())
        .await
        .map_err(|err| match err {
            DemoStoreError::Db(e) => AppError::Storage {
                message: format!("can't update a demo with id: {id}"),
                detail: e.to_string(),
            },
            other => other.into(),
        })?;

    Ok(Json(demo.into()))
}

#[utoipa::path(
    delete,
    path = "/demos/{id}",
    tag = "Demos",
    operation_id = "deleteOneDemo",
    summary = "Delete a demo",
    params(("id" = i32, Path, description = "Demo ID")),
    responses(
        (status = 200, description = "Snapshot of the deleted demo", body = DemoResponse),
        (status = 404, description = "Not found", body = NotFoundBody),
        (status = 500, description = "Backing-store failure", body = StorageBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_demo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DemoResponse>, AppError> {
    tracing::debug!("deleting demo {id}");

    let snapshot = DemoService::new(&state.db)
        .delete(id)
        .await
        .map_err(|err| match err {
            DemoStoreError::Db(e) => AppError::Storage {
                message: format!("can't delete a demo with id: {id}"),
                detail: e.to_string(),
            },
            other => other.into(),
        })?;

    Ok(Json(snapshot.into()))
}
