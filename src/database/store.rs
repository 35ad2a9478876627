use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::application::{JobApplication, NewApplication};

/// Persistence seam for job applications. The service only talks to this
/// trait; the concrete binding is chosen at startup.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Inserts a new application and returns the stored record with its
    /// store-assigned id.
    async fn insert(&self, application: NewApplication) -> Result<JobApplication>;

    /// All applications, most recently submitted first.
    async fn list_all(&self) -> Result<Vec<JobApplication>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JobApplication>>;

    /// Rewrites `status` and `reviewed_by` and stamps `reviewed_at` on the
    /// matching record. Returns `None` when no record matches.
    async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        reviewed_by: &str,
        reviewed_at: DateTime<Utc>,
    ) -> Result<Option<JobApplication>>;

    /// Removes the matching record, returning it. `None` when no record
    /// matches.
    async fn delete(&self, id: Uuid) -> Result<Option<JobApplication>>;
}

#[derive(Clone)]
pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn insert(&self, application: NewApplication) -> Result<JobApplication> {
        let stored = sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications (
                full_name, email, phone, governorate, major, graduation_year,
                application_type, skills, expected_salary, availability_date,
                status, reviewed_by, reviewed_at, submitted_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6,
                $7, $8, $9, $10,
                $11, '', NULL, $12
            )
            RETURNING *
            "#,
        )
        .bind(application.full_name)
        .bind(application.email)
        .bind(application.phone)
        .bind(application.governorate)
        .bind(application.major)
        .bind(application.graduation_year)
        .bind(application.application_type)
        .bind(application.skills)
        .bind(application.expected_salary)
        .bind(application.availability_date)
        .bind(application.status)
        .bind(application.submitted_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(
            r#"SELECT * FROM job_applications ORDER BY submitted_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JobApplication>> {
        let application = sqlx::query_as::<_, JobApplication>(
            r#"SELECT * FROM job_applications WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(application)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        reviewed_by: &str,
        reviewed_at: DateTime<Utc>,
    ) -> Result<Option<JobApplication>> {
        let updated = sqlx::query_as::<_, JobApplication>(
            r#"
            UPDATE job_applications
            SET status = $1, reviewed_by = $2, reviewed_at = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(reviewed_by)
        .bind(reviewed_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<JobApplication>> {
        let deleted = sqlx::query_as::<_, JobApplication>(
            r#"DELETE FROM job_applications WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted)
    }
}
