use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::dto::application_dto::{
    ApplicationResponse, DeleteApplicationResponse, ListApplicationsResponse,
    SubmitApplicationRequest, SubmitApplicationResponse, UpdateStatusRequest,
};
use crate::error::{Error, Result};
use crate::utils::validation::validate;
use crate::AppState;

// Identifiers come back from the admin tool verbatim, so a malformed one is
// treated the same as an unknown one.
fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::NotFound("Application not found".to_string()))
}

pub async fn submit_application(
    State(state): State<AppState>,
    Json(payload): Json<SubmitApplicationRequest>,
) -> Result<impl axum::response::IntoResponse> {
    validate(&payload)?;

    let application = state
        .application_service
        .submit(payload)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "Error saving application");
            Error::Internal("Failed to save application".to_string())
        })?;

    tracing::info!(
        id = %application.id,
        full_name = %application.full_name,
        email = %application.email,
        governorate = %application.governorate,
        application_type = %application.application_type,
        "Application saved"
    );

    Ok(Json(SubmitApplicationResponse {
        success: true,
        message: "Application submitted successfully".to_string(),
        application_id: application.id,
    }))
}

pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse> {
    let applications = state.application_service.list_all().await.map_err(|e| {
        tracing::error!(error = ?e, "Error fetching applications");
        Error::Internal("Failed to fetch applications".to_string())
    })?;

    Ok(Json(ListApplicationsResponse {
        success: true,
        applications,
    }))
}

pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse> {
    let id = parse_id(&id)?;
    let application = state
        .application_service
        .get_by_id(id)
        .await
        .map_err(|e| match e {
            Error::NotFound(_) => e,
            other => {
                tracing::error!(error = ?other, "Error fetching application");
                Error::Internal("Failed to fetch application".to_string())
            }
        })?;

    Ok(Json(ApplicationResponse {
        success: true,
        application,
    }))
}

pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl axum::response::IntoResponse> {
    let id = parse_id(&id)?;
    let application = state
        .application_service
        .update_status(id, &payload.status, &payload.reviewed_by)
        .await
        .map_err(|e| match e {
            Error::NotFound(_) => e,
            other => {
                tracing::error!(error = ?other, "Error updating application");
                Error::Internal("Failed to update application".to_string())
            }
        })?;

    Ok(Json(ApplicationResponse {
        success: true,
        application,
    }))
}

pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse> {
    tracing::info!(id = %id, "Delete request received");

    let id = parse_id(&id)?;
    let deleted = state
        .application_service
        .delete(id)
        .await
        .map_err(|e| match e {
            Error::NotFound(_) => e,
            other => {
                tracing::error!(error = ?other, "Error deleting application");
                Error::Internal("Failed to delete application".to_string())
            }
        })?;

    tracing::info!(id = %deleted.id, "Application deleted");

    Ok(Json(DeleteApplicationResponse {
        success: true,
        message: "Application deleted successfully".to_string(),
    }))
}
