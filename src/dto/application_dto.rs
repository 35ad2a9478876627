use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::application::JobApplication;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 1, message = "fullName is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "governorate is required"))]
    pub governorate: String,
    #[validate(length(min = 1, message = "major is required"))]
    pub major: String,
    #[validate(length(min = 1, message = "graduationYear is required"))]
    pub graduation_year: String,
    #[validate(length(min = 1, message = "applicationType is required"))]
    pub application_type: String,
    #[validate(length(min = 1, message = "skills is required"))]
    pub skills: String,
    pub expected_salary: Option<String>,
    pub availability_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: String,
    pub reviewed_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationResponse {
    pub success: bool,
    pub message: String,
    pub application_id: uuid::Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListApplicationsResponse {
    pub success: bool,
    pub applications: Vec<JobApplication>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub success: bool,
    pub application: JobApplication,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteApplicationResponse {
    pub success: bool,
    pub message: String,
}
