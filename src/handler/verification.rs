use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    db::{contractordb::ContractorExt, verificationdb::VerificationExt, workerdb::WorkerExt},
    dtos::verificationdtos::CreateVerificationDto,
    error::HttpError,
    handler::parse_payload,
    utils::image_utils::{self, ImageError},
    AppState,
};

pub fn worker_verification_handler() -> Router {
    let methods = get(list_worker_verifications).post(create_worker_verification);

    Router::new()
        .route("/:id", methods.clone())
        .route("/:id/", methods)
}

pub fn contractor_verification_handler() -> Router {
    let methods = get(list_contractor_verifications).post(create_contractor_verification);

    Router::new()
        .route("/:id", methods.clone())
        .route("/:id/", methods)
}

pub async fn list_worker_verifications(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(owner_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let verifications = app_state
        .db_client
        .get_worker_verifications(owner_id)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(verifications))
}

/// Store both uploaded images and create the verification row bound to
/// the worker named in the path. Stored blobs are not rolled back when a
/// later step of the same request fails.
pub async fn create_worker_verification(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(owner_id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let body: CreateVerificationDto = parse_payload(payload)?;
    body.validate().map_err(HttpError::validation)?;

    app_state
        .db_client
        .get_worker(owner_id)
        .await
        .map_err(HttpError::from_db_error)?
        .ok_or_else(|| HttpError::not_found("Worker not found"))?;

    let (profile_photo, id_proof) = store_verification_images(&app_state, &body).await?;

    let verification = app_state
        .db_client
        .save_worker_verification(owner_id, &profile_photo, &id_proof)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok((StatusCode::CREATED, Json(verification)))
}

pub async fn list_contractor_verifications(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(contractor_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let verifications = app_state
        .db_client
        .get_contractor_verifications(contractor_id)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok(Json(verifications))
}

pub async fn create_contractor_verification(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(contractor_id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let body: CreateVerificationDto = parse_payload(payload)?;
    body.validate().map_err(HttpError::validation)?;

    app_state
        .db_client
        .get_contractor(contractor_id)
        .await
        .map_err(HttpError::from_db_error)?
        .ok_or_else(|| HttpError::not_found("Contractor not found"))?;

    let (profile_photo, id_proof) = store_verification_images(&app_state, &body).await?;

    let verification = app_state
        .db_client
        .save_contractor_verification(contractor_id, &profile_photo, &id_proof)
        .await
        .map_err(HttpError::from_db_error)?;

    Ok((StatusCode::CREATED, Json(verification)))
}

async fn store_verification_images(
    app_state: &Arc<AppState>,
    body: &CreateVerificationDto,
) -> Result<(String, String), HttpError> {
    let profile_photo = image_utils::store_image(
        &app_state.env.media_root,
        &app_state.env.media_base_url,
        "profile",
        &body.profile_photo,
    )
    .await
    .map_err(image_error)?;

    let id_proof = image_utils::store_image(
        &app_state.env.media_root,
        &app_state.env.media_base_url,
        "idproof",
        &body.id_proof,
    )
    .await
    .map_err(image_error)?;

    Ok((profile_photo, id_proof))
}

fn image_error(err: ImageError) -> HttpError {
    match err {
        ImageError::Decode(_) => HttpError::bad_request(err.to_string()),
        ImageError::Io(_) => {
            tracing::error!("image storage failed: {:?}", err);
            HttpError::server_error(err.to_string())
        }
    }
}
