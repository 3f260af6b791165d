use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Map, Value};
use tracing::instrument;

use crmhub_core::AppError;
use crmhub_db::{DeleteResult, InsertOneResult, UpdateResult, collections};

use crate::docs::ErrorResponse;
use crate::extract::JsonBody;
use crate::modules::documents::DocumentService;
use crate::state::AppState;

const REGULAR_CONTENTS: DocumentService =
    DocumentService::new(collections::REGULAR_CONTENTS, "Content not found");

#[utoipa::path(
    get,
    path = "/regularcontents",
    responses(
        (status = 200, description = "All content documents in storage order"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Regular Contents"
)]
#[instrument(skip(state))]
pub async fn list_contents(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let contents = REGULAR_CONTENTS.list(state.store.as_ref()).await?;
    Ok(Json(contents))
}

#[utoipa::path(
    post,
    path = "/regularcontents",
    responses(
        (status = 200, description = "Raw insert result: { acknowledged, insertedId }"),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Regular Contents"
)]
#[instrument(skip(state, body))]
pub async fn create_content(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = REGULAR_CONTENTS.create(state.store.as_ref(), body).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/regularcontents/{id}",
    params(("id" = String, Path, description = "Content document id")),
    responses(
        (status = 200, description = "Content document"),
        (status = 404, description = "Content not found", body = ErrorResponse)
    ),
    tag = "Regular Contents"
)]
#[instrument(skip(state))]
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let content = REGULAR_CONTENTS.get(state.store.as_ref(), &id).await?;
    Ok(Json(content))
}

#[utoipa::path(
    patch,
    path = "/regularcontents/{id}",
    params(("id" = String, Path, description = "Content document id")),
    responses(
        (status = 200, description = "Raw update result: { matchedCount, modifiedCount, ... }"),
        (status = 404, description = "Content not found", body = ErrorResponse),
        (status = 500, description = "Failed to update status", body = ErrorResponse)
    ),
    tag = "Regular Contents"
)]
#[instrument(skip(state, changes))]
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = REGULAR_CONTENTS
        .update(state.store.as_ref(), &id, changes)
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/regularcontents/{id}",
    params(("id" = String, Path, description = "Content document id")),
    responses(
        (status = 200, description = "Raw delete result: { acknowledged, deletedCount }"),
        (status = 404, description = "Content not found", body = ErrorResponse)
    ),
    tag = "Regular Contents"
)]
#[instrument(skip(state))]
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = REGULAR_CONTENTS.delete(state.store.as_ref(), &id).await?;
    Ok(Json(result))
}
