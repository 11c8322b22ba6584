use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus};
use sqlx::{FromRow, PgPool};

const APPLICATION_SELECT: &str = "SELECT a.id, a.job_id, a.name, a.email, a.phone, a.experience, \
     a.availability, a.cv_url, a.status, a.notes, a.applied_at, a.updated_at, \
     j.title AS position \
     FROM applications a LEFT JOIN jobs j ON j.id = a.job_id";

/// An application together with the title of the job it targets; the join is
/// LEFT so rows survive their job being deleted (`position` then reads as
/// "Unknown" in the response layer).
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithPosition {
    #[sqlx(flatten)]
    pub application: Application,
    pub position: Option<String>,
}

/// Fields collected from the public submission form. The CV has already
/// been staged to storage when this reaches the database.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience: Option<String>,
    pub availability: Option<String>,
    pub cv_url: Option<String>,
}

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Status is forced to New no matter what the submitter sent.
    pub async fn create(&self, new: &NewApplication) -> Result<Application> {
        let application = sqlx::query_as::<_, Application>(
            "INSERT INTO applications (job_id, name, email, phone, experience, availability, cv_url, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'New')
             RETURNING id, job_id, name, email, phone, experience, availability, cv_url, status,
                       notes, applied_at, updated_at",
        )
        .bind(new.job_id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.experience)
        .bind(&new.availability)
        .bind(&new.cv_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(application)
    }

    pub async fn list(
        &self,
        status_filter: Option<&str>,
        job_id: Option<i32>,
    ) -> Result<Vec<ApplicationWithPosition>> {
        let query = format!(
            "{} WHERE ($1::text IS NULL OR a.status = $1)
                AND ($2::int4 IS NULL OR a.job_id = $2)
              ORDER BY a.applied_at DESC",
            APPLICATION_SELECT
        );
        let applications = sqlx::query_as::<_, ApplicationWithPosition>(&query)
            .bind(status_filter)
            .bind(job_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(applications)
    }

    pub async fn get(&self, id: i32) -> Result<ApplicationWithPosition> {
        let query = format!("{} WHERE a.id = $1", APPLICATION_SELECT);
        sqlx::query_as::<_, ApplicationWithPosition>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))
    }

    /// Transitions are unrestricted between the five canonical values; the
    /// caller has already parsed the status, so only existence can fail
    /// here. Every transition refreshes `updated_at`.
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<ApplicationWithPosition> {
        let result =
            sqlx::query("UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status.as_str())
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Application not found".to_string()));
        }
        self.get(id).await
    }

    /// Removes the row and hands back the CV reference, if any, so the
    /// caller can release the stored file.
    pub async fn delete(&self, id: i32) -> Result<Option<String>> {
        let deleted: Option<(Option<String>,)> =
            sqlx::query_as("DELETE FROM applications WHERE id = $1 RETURNING cv_url")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        match deleted {
            Some((cv_url,)) => Ok(cv_url),
            None => Err(Error::NotFound("Application not found".to_string())),
        }
    }
}
