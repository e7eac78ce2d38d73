use crate::dtos::{CreateStatusCheckRequest, StatusCheckResponse};
use crate::models::StatusCheck;
use crate::services::MAX_STATUS_CHECKS;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

#[tracing::instrument(skip(state, request), fields(client_name = %request.client_name))]
pub async fn create_status_check(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateStatusCheckRequest>,
) -> Result<(StatusCode, Json<StatusCheckResponse>), AppError> {
    let check = StatusCheck::new(request.client_name);

    state
        .store
        .insert_status_check(&check)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create status check: {}", e);
            e
        })?;

    tracing::debug!(id = %check.id, "Status check recorded");
    Ok((StatusCode::CREATED, Json(StatusCheckResponse::from(check))))
}

#[tracing::instrument(skip(state))]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheckResponse>>, AppError> {
    let checks = state
        .store
        .list_status_checks(MAX_STATUS_CHECKS)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get status checks: {}", e);
            e
        })?;

    Ok(Json(
        checks.into_iter().map(StatusCheckResponse::from).collect(),
    ))
}
