use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::store::ApplicationStore;
use crate::dto::application_dto::SubmitApplicationRequest;
use crate::error::{Error, Result};
use crate::models::application::{JobApplication, NewApplication};
use crate::utils::time;

#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<dyn ApplicationStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn ApplicationStore>) -> Self {
        Self { store }
    }

    /// Stores a new application. `submitted_at` is stamped here; optional
    /// fields default to empty and `status` to "pending".
    pub async fn submit(&self, payload: SubmitApplicationRequest) -> Result<JobApplication> {
        let application = NewApplication {
            full_name: payload.full_name,
            email: payload.email,
            phone: payload.phone,
            governorate: payload.governorate,
            major: payload.major,
            graduation_year: payload.graduation_year,
            application_type: payload.application_type,
            skills: payload.skills,
            expected_salary: payload.expected_salary.unwrap_or_default(),
            availability_date: payload.availability_date.unwrap_or_default(),
            status: payload.status.unwrap_or_else(|| "pending".to_string()),
            submitted_at: time::now(),
        };

        self.store.insert(application).await
    }

    pub async fn list_all(&self) -> Result<Vec<JobApplication>> {
        self.store.list_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<JobApplication> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Rewrites `status` and `reviewed_by` verbatim and stamps
    /// `reviewed_at` with the current time. Values are not checked against
    /// an enumeration.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        reviewed_by: &str,
    ) -> Result<JobApplication> {
        let reviewed_at: DateTime<Utc> = time::now();
        self.store
            .update_status(id, status, reviewed_by, reviewed_at)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: Uuid) -> Result<JobApplication> {
        self.store.delete(id).await?.ok_or_else(not_found)
    }
}

fn not_found() -> Error {
    Error::NotFound("Application not found".to_string())
}
