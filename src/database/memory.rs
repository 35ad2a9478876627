//! In-memory application store.
//!
//! Test implementation of [`ApplicationStore`] backed by a mutex-guarded
//! map, mirroring what the PostgreSQL binding does per document.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::store::ApplicationStore;
use crate::error::Result;
use crate::models::application::{JobApplication, NewApplication};

pub struct InMemoryApplicationStore {
    applications: Mutex<HashMap<Uuid, JobApplication>>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self {
            applications: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryApplicationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn insert(&self, application: NewApplication) -> Result<JobApplication> {
        let stored = JobApplication {
            id: Uuid::new_v4(),
            full_name: application.full_name,
            email: application.email,
            phone: application.phone,
            governorate: application.governorate,
            major: application.major,
            graduation_year: application.graduation_year,
            application_type: application.application_type,
            skills: application.skills,
            expected_salary: application.expected_salary,
            availability_date: application.availability_date,
            status: application.status,
            reviewed_by: String::new(),
            reviewed_at: None,
            submitted_at: application.submitted_at,
        };

        let mut applications = self.applications.lock().unwrap();
        applications.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<JobApplication>> {
        let applications = self.applications.lock().unwrap();
        let mut all: Vec<JobApplication> = applications.values().cloned().collect();
        all.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JobApplication>> {
        let applications = self.applications.lock().unwrap();
        Ok(applications.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        reviewed_by: &str,
        reviewed_at: DateTime<Utc>,
    ) -> Result<Option<JobApplication>> {
        let mut applications = self.applications.lock().unwrap();
        Ok(applications.get_mut(&id).map(|application| {
            application.status = status.to_string();
            application.reviewed_by = reviewed_by.to_string();
            application.reviewed_at = Some(reviewed_at);
            application.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<JobApplication>> {
        let mut applications = self.applications.lock().unwrap();
        Ok(applications.remove(&id))
    }
}
