use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Map, Value};
use tracing::instrument;

use crmhub_core::AppError;
use crmhub_db::{InsertOneResult, UpdateResult, collections};

use crate::docs::ErrorResponse;
use crate::extract::JsonBody;
use crate::modules::documents::DocumentService;
use crate::state::AppState;

const BUSINESSES: DocumentService =
    DocumentService::new(collections::BUSINESSES, "Business not found");

#[utoipa::path(
    get,
    path = "/businesses",
    responses(
        (status = 200, description = "All business documents in storage order"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Businesses"
)]
#[instrument(skip(state))]
pub async fn list_businesses(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let businesses = BUSINESSES.list(state.store.as_ref()).await?;
    Ok(Json(businesses))
}

#[utoipa::path(
    post,
    path = "/businesses",
    responses(
        (status = 200, description = "Raw insert result: { acknowledged, insertedId }"),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Businesses"
)]
#[instrument(skip(state, body))]
pub async fn create_business(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = BUSINESSES.create(state.store.as_ref(), body).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/businesses/{id}",
    params(("id" = String, Path, description = "Business document id")),
    responses(
        (status = 200, description = "Business document"),
        (status = 404, description = "Business not found", body = ErrorResponse)
    ),
    tag = "Businesses"
)]
#[instrument(skip(state))]
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let business = BUSINESSES.get(state.store.as_ref(), &id).await?;
    Ok(Json(business))
}

#[utoipa::path(
    patch,
    path = "/businesses/{id}",
    params(("id" = String, Path, description = "Business document id")),
    responses(
        (status = 200, description = "Raw update result: { matchedCount, modifiedCount, ... }"),
        (status = 404, description = "Business not found", body = ErrorResponse),
        (status = 500, description = "Failed to update status", body = ErrorResponse)
    ),
    tag = "Businesses"
)]
#[instrument(skip(state, changes))]
pub async fn update_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = BUSINESSES.update(state.store.as_ref(), &id, changes).await?;
    Ok(Json(result))
}
