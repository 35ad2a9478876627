use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One candidate submission. `submitted_at` is assigned at creation and
/// never changes; `reviewed_at` is stamped server-side on status updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub governorate: String,
    pub major: String,
    pub graduation_year: String,
    pub application_type: String,
    pub skills: String,
    pub expected_salary: String,
    pub availability_date: String,
    pub status: String,
    pub reviewed_by: String,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub submitted_at: DateTime<Utc>,
}

/// Field values for a not-yet-stored application. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub governorate: String,
    pub major: String,
    pub graduation_year: String,
    pub application_type: String,
    pub skills: String,
    pub expected_salary: String,
    pub availability_date: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}
