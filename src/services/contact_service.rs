use crate::dto::contact_dto::SubmitInquiryPayload;
use crate::error::{Error, Result};
use crate::models::contact::{ContactInquiry, InquiryStatus};
use sqlx::PgPool;

const INQUIRY_COLUMNS: &str =
    "id, name, email, phone, subject, message, status, admin_reply, created_at, replied_at";

#[derive(Clone)]
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Public submission; every inquiry starts out `new`.
    pub async fn submit(&self, payload: &SubmitInquiryPayload) -> Result<ContactInquiry> {
        let query = format!(
            "INSERT INTO contact_inquiries (name, email, phone, subject, message, status)
             VALUES ($1, $2, $3, $4, $5, 'new')
             RETURNING {INQUIRY_COLUMNS}"
        );
        let inquiry = sqlx::query_as::<_, ContactInquiry>(&query)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(&payload.subject)
            .bind(&payload.message)
            .fetch_one(&self.pool)
            .await?;
        Ok(inquiry)
    }

    /// The filter matches the stored label verbatim, so it also finds
    /// inquiries carrying non-canonical labels.
    pub async fn list(&self, status_filter: Option<&str>) -> Result<Vec<ContactInquiry>> {
        let query = format!(
            "SELECT {INQUIRY_COLUMNS} FROM contact_inquiries
             WHERE ($1::text IS NULL OR status = $1)
             ORDER BY created_at DESC"
        );
        let inquiries = sqlx::query_as::<_, ContactInquiry>(&query)
            .bind(status_filter)
            .fetch_all(&self.pool)
            .await?;
        Ok(inquiries)
    }

    /// Fetching the detail view counts as reading it, so a `new` inquiry is
    /// promoted to `read` before it is returned.
    pub async fn get(&self, id: i32) -> Result<ContactInquiry> {
        let query = format!("SELECT {INQUIRY_COLUMNS} FROM contact_inquiries WHERE id = $1");
        let mut inquiry = sqlx::query_as::<_, ContactInquiry>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Inquiry not found".to_string()))?;

        let current = InquiryStatus::parse(&inquiry.status);
        let after_read = current.clone().on_admin_read();
        if after_read != current {
            sqlx::query("UPDATE contact_inquiries SET status = $2 WHERE id = $1")
                .bind(id)
                .bind(after_read.as_str())
                .execute(&self.pool)
                .await?;
            inquiry.status = after_read.to_string();
        }
        Ok(inquiry)
    }

    pub async fn reply(&self, id: i32, reply: &str) -> Result<()> {
        let result = sqlx::query(
            "UPDATE contact_inquiries
             SET admin_reply = $2, status = 'replied', replied_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(reply)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Inquiry not found".to_string()));
        }
        // TODO: email the reply to the inquirer once outbound mail is wired up.
        Ok(())
    }

    /// Accepts any label; `InquiryStatus::parse` normalises the known ones
    /// and carries the rest through as-is.
    pub async fn set_status(&self, id: i32, raw_status: &str) -> Result<()> {
        let status = InquiryStatus::parse(raw_status);
        let result = sqlx::query("UPDATE contact_inquiries SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Inquiry not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM contact_inquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Inquiry not found".to_string()));
        }
        Ok(())
    }
}
