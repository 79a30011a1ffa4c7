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
    db::{contractordb::ContractorExt, workerdb::WorkerExt},
    dtos::{
        workerdtos::{CreateWorkerDto, UpdateWorkerDto},
        IdPayload,
    },
    error::HttpError,
    handler::parse_payload,
    models::workermodel::Worker,
    AppState,
};

pub fn worker_handler() -> Router {
    let methods = get(list_workers)
        .post(create_worker)
        .put(replace_worker)
        .patch(patch_worker)
        .delete(delete_worker);

    // The upstream contract uses trailing slashes; accept both.
    Router::new()
        .route("/:tid", methods.clone())
        .route("/:tid/", methods)
}

/// Workers attached to the contractor named in the path.
pub async fn list_workers(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(tid): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let workers = app_state
        .db_client
        .get_workers_by_contractor(tid)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(workers))
}

/// Create a worker under the contractor named in the path. The path
/// parameter is stamped onto the payload before validation; any `tid`
/// in the body is ignored.
pub async fn create_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(tid): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .get_contractor(tid)
        .await
        .map_err(HttpError::from_db_error)?
        .ok_or_else(|| HttpError::not_found("Contractor not found"))?;

    let mut body: CreateWorkerDto = parse_payload(payload)?;
    body.tid = Some(tid);
    body.validate().map_err(HttpError::validation)?;

    let worker = app_state
        .db_client
        .save_worker(&body)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(worker))
}

/// Replace operates globally by the `id` in the payload, regardless of
/// the contractor in the path. This admin-style scoping is deliberate.
/// The write is a full-row replacement, so a body without a `tid`
/// clears the contractor association.
pub async fn replace_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let IdPayload { id } = parse_payload(payload.clone())?;
    let body: CreateWorkerDto = parse_payload(payload)?;
    body.validate().map_err(HttpError::validation)?;

    let worker = app_state
        .db_client
        .replace_worker(id, &body)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(worker))
}

pub async fn patch_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let IdPayload { id } = parse_payload(payload.clone())?;

    let existing = app_state
        .db_client
        .get_worker(id)
        .await
        .map_err(HttpError::from_db_error)?
        .ok_or_else(|| HttpError::not_found("Worker not found"))?;

    let update: UpdateWorkerDto = parse_payload(payload)?;
    let merged = merge_worker(&existing, update);
    merged.validate().map_err(HttpError::validation)?;

    let worker = app_state
        .db_client
        .replace_worker(id, &merged)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(worker))
}

pub async fn delete_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let IdPayload { id } = parse_payload(payload)?;

    let deleted = app_state
        .db_client
        .delete_worker(id)
        .await
        .map_err(HttpError::from_db_error)?;

    if deleted == 0 {
        return Err(HttpError::not_found("Worker not found"));
    }

    Ok(Json(serde_json::json!({ "msg": "Data Deleted" })))
}

fn merge_worker(existing: &Worker, update: UpdateWorkerDto) -> CreateWorkerDto {
    CreateWorkerDto {
        tid: update.tid.or(existing.tid),
        name: update.name.unwrap_or_else(|| existing.name.clone()),
        phone: update.phone.unwrap_or_else(|| existing.phone.clone()),
        email: update.email.or_else(|| existing.email.clone()),
        address: update.address.or_else(|| existing.address.clone()),
        verification: update.verification.or(Some(existing.verification)),
        age: update.age.or(Some(existing.age)),
        work: update.work.or_else(|| existing.work.clone()),
        city: update.city.or_else(|| existing.city.clone()),
        pincode: update.pincode.or(existing.pincode),
    }
}
