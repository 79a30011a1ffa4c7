use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    db::contractordb::ContractorExt,
    dtos::{
        contractordtos::{CreateContractorDto, UpdateContractorDto},
        IdPayload,
    },
    error::HttpError,
    handler::parse_payload,
    models::contractormodel::Contractor,
    AppState,
};

pub fn contractor_handler() -> Router {
    Router::new().route(
        "/",
        get(list_contractors)
            .post(create_contractor)
            .put(replace_contractor)
            .patch(patch_contractor)
            .delete(delete_contractor),
    )
}

pub async fn list_contractors(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let contractors = app_state
        .db_client
        .get_contractors()
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(contractors))
}

pub async fn create_contractor(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let body: CreateContractorDto = parse_payload(payload)?;
    body.validate().map_err(HttpError::validation)?;

    let contractor = app_state
        .db_client
        .save_contractor(&body)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(contractor))
}

/// Full-row replacement of the contractor named by `id` in the payload.
pub async fn replace_contractor(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let IdPayload { id } = parse_payload(payload.clone())?;
    let body: CreateContractorDto = parse_payload(payload)?;
    body.validate().map_err(HttpError::validation)?;

    let contractor = app_state
        .db_client
        .replace_contractor(id, &body)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(contractor))
}

pub async fn patch_contractor(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let IdPayload { id } = parse_payload(payload.clone())?;

    let existing = app_state
        .db_client
        .get_contractor(id)
        .await
        .map_err(HttpError::from_db_error)?
        .ok_or_else(|| HttpError::not_found("Contractor not found"))?;

    let update: UpdateContractorDto = parse_payload(payload)?;
    let merged = merge_contractor(&existing, update)?;
    merged.validate().map_err(HttpError::validation)?;

    let contractor = app_state
        .db_client
        .replace_contractor(id, &merged)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(contractor))
}

pub async fn delete_contractor(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let IdPayload { id } = parse_payload(payload)?;

    let deleted = app_state
        .db_client
        .delete_contractor(id)
        .await
        .map_err(HttpError::from_db_error)?;

    if deleted == 0 {
        return Err(HttpError::not_found("Contractor not found"));
    }

    Ok(Json(serde_json::json!({ "msg": "Data Deleted" })))
}

/// Merge provided fields over the stored row; the merged record is
/// validated again before it is written back.
fn merge_contractor(
    existing: &Contractor,
    update: UpdateContractorDto,
) -> Result<CreateContractorDto, HttpError> {
    let age = update
        .age
        .or(existing.age)
        .ok_or_else(|| HttpError::bad_request("Age is required"))?;

    Ok(CreateContractorDto {
        name: update.name.unwrap_or_else(|| existing.name.clone()),
        phone: update.phone.unwrap_or_else(|| existing.phone.clone()),
        email: update.email.or_else(|| existing.email.clone()),
        address: update.address.or_else(|| existing.address.clone()),
        city: update.city.or_else(|| existing.city.clone()),
        pincode: update.pincode.or(existing.pincode),
        verification: update.verification.or(Some(existing.verification)),
        age,
    })
}
