use crate::dto::job_dto::{encode_list, JobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;
use sqlx::{FromRow, PgPool};

/// Every job read carries its applicant count; the admin panel shows it on
/// each card.
const JOB_SELECT: &str = "SELECT j.id, j.title, j.category, j.job_type, j.location, j.salary, \
     j.summary, j.description, j.requirements, j.qualifications, j.skills, j.certifications, \
     j.working_hours, j.experience, j.benefits, j.training, j.tags, j.start_date, \
     j.application_deadline, j.is_active, j.created_at, j.updated_at, \
     (SELECT COUNT(*) FROM applications a WHERE a.job_id = j.id) AS applicants \
     FROM jobs j";

#[derive(Debug, Clone, FromRow)]
pub struct JobWithApplicants {
    #[sqlx(flatten)]
    pub job: Job,
    pub applicants: i64,
}

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<JobWithApplicants>> {
        let query = format!("{} ORDER BY j.created_at DESC", JOB_SELECT);
        let jobs = sqlx::query_as::<_, JobWithApplicants>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    pub async fn list_active(&self) -> Result<Vec<JobWithApplicants>> {
        let query = format!(
            "{} WHERE j.is_active = TRUE ORDER BY j.created_at DESC",
            JOB_SELECT
        );
        let jobs = sqlx::query_as::<_, JobWithApplicants>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    pub async fn get(&self, id: i32) -> Result<JobWithApplicants> {
        let query = format!("{} WHERE j.id = $1", JOB_SELECT);
        sqlx::query_as::<_, JobWithApplicants>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))
    }

    pub async fn create(&self, payload: &JobPayload) -> Result<JobWithApplicants> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO jobs (
                title, category, job_type, location, salary, summary, description,
                requirements, qualifications, skills, certifications, working_hours,
                experience, benefits, training, tags, start_date, is_active
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14,$15,$16,$17,$18)
            RETURNING id",
        )
        .bind(&payload.title)
        .bind(&payload.category)
        .bind(&payload.job_type)
        .bind(&payload.location)
        .bind(&payload.salary)
        .bind(&payload.summary)
        .bind(&payload.description)
        .bind(encode_list(&payload.requirements)?)
        .bind(encode_list(&payload.qualifications)?)
        .bind(encode_list(&payload.skills)?)
        .bind(encode_list(&payload.certifications)?)
        .bind(&payload.working_hours)
        .bind(&payload.experience)
        .bind(encode_list(&payload.benefits)?)
        .bind(&payload.training)
        .bind(encode_list(&payload.tags)?)
        .bind(&payload.start_date)
        .bind(payload.is_active)
        .fetch_one(&self.pool)
        .await?;

        self.get(id).await
    }

    /// Full replacement; create and update share the payload shape.
    pub async fn update(&self, id: i32, payload: &JobPayload) -> Result<JobWithApplicants> {
        let result = sqlx::query(
            "UPDATE jobs SET
                title = $2, category = $3, job_type = $4, location = $5, salary = $6,
                summary = $7, description = $8, requirements = $9, qualifications = $10,
                skills = $11, certifications = $12, working_hours = $13, experience = $14,
                benefits = $15, training = $16, tags = $17, start_date = $18,
                is_active = $19, updated_at = NOW()
            WHERE id = $1",
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.category)
        .bind(&payload.job_type)
        .bind(&payload.location)
        .bind(&payload.salary)
        .bind(&payload.summary)
        .bind(&payload.description)
        .bind(encode_list(&payload.requirements)?)
        .bind(encode_list(&payload.qualifications)?)
        .bind(encode_list(&payload.skills)?)
        .bind(encode_list(&payload.certifications)?)
        .bind(&payload.working_hours)
        .bind(&payload.experience)
        .bind(encode_list(&payload.benefits)?)
        .bind(&payload.training)
        .bind(encode_list(&payload.tags)?)
        .bind(&payload.start_date)
        .bind(payload.is_active)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".to_string()));
        }
        self.get(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> Result<JobWithApplicants> {
        let result =
            sqlx::query("UPDATE jobs SET is_active = NOT is_active, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".to_string()));
        }
        self.get(id).await
    }

    /// Deletes the job; applications cascade at the database level.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
