use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    db::{accountdb::AccountExt, contractordb::ContractorExt, workerdb::WorkerExt},
    dtos::accountdtos::CreateBankAccountDto,
    error::HttpError,
    handler::parse_payload,
    AppState,
};

pub fn contractor_account_handler() -> Router {
    let methods = get(list_contractor_accounts).post(create_contractor_account);

    Router::new()
        .route("/:id", methods.clone())
        .route("/:id/", methods)
}

pub fn worker_account_handler() -> Router {
    let methods = get(list_worker_accounts).post(create_worker_account);

    Router::new()
        .route("/:id", methods.clone())
        .route("/:id/", methods)
}

pub async fn list_contractor_accounts(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(owner_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let accounts = app_state
        .db_client
        .get_contractor_accounts(owner_id)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(accounts))
}

/// Create a bank account for the contractor named in the path. The owner
/// relation is bound from the path parameter, never from the body.
pub async fn create_contractor_account(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(owner_id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .get_contractor(owner_id)
        .await
        .map_err(HttpError::from_db_error)?
        .ok_or_else(|| HttpError::not_found("Contractor not found"))?;

    let body: CreateBankAccountDto = parse_payload(payload)?;
    body.validate().map_err(HttpError::validation)?;

    let account = app_state
        .db_client
        .save_contractor_account(owner_id, &body)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(account))
}

pub async fn list_worker_accounts(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(owner_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let accounts = app_state
        .db_client
        .get_worker_accounts(owner_id)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(accounts))
}

pub async fn create_worker_account(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(owner_id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .get_worker(owner_id)
        .await
        .map_err(HttpError::from_db_error)?
        .ok_or_else(|| HttpError::not_found("Worker not found"))?;

    let body: CreateBankAccountDto = parse_payload(payload)?;
    body.validate().map_err(HttpError::validation)?;

    let account = app_state
        .db_client
        .save_worker_account(owner_id, &body)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(account))
}
