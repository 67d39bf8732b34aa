//! contact_submissions table

use shared::models::{EmailQueueEntry, Inquiry, InquiryStatus};
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct InquiryRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    company: String,
    country: String,
    job_title: String,
    job_details: String,
    timestamp: i64,
    status: Option<String>,
    response: Option<String>,
    responded_at: Option<i64>,
    updated_at: Option<i64>,
}

impl From<InquiryRow> for Inquiry {
    fn from(row: InquiryRow) -> Self {
        Inquiry {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            company: row.company,
            country: row.country,
            job_title: row.job_title,
            job_details: row.job_details,
            timestamp: row.timestamp,
            status: row.status.as_deref().and_then(InquiryStatus::from_db),
            response: row.response,
            responded_at: row.responded_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str = "id, name, email, phone, company, country, job_title, job_details, \
                       timestamp, status, response, responded_at, updated_at";

/// Full snapshot, newest first
pub async fn list_all(pool: &PgPool) -> Result<Vec<Inquiry>, sqlx::Error> {
    let rows: Vec<InquiryRow> = sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM contact_submissions ORDER BY timestamp DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Inquiry::from).collect())
}

/// Most recent inquiries, newest first
pub async fn list_latest(pool: &PgPool, limit: i64) -> Result<Vec<Inquiry>, sqlx::Error> {
    let rows: Vec<InquiryRow> = sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM contact_submissions ORDER BY timestamp DESC LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Inquiry::from).collect())
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Inquiry>, sqlx::Error> {
    let row: Option<InquiryRow> = sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM contact_submissions WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Inquiry::from))
}

/// Insert a contact form submission (status left unset)
pub async fn create(pool: &PgPool, inquiry: &Inquiry) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO contact_submissions
            (id, name, email, phone, company, country, job_title, job_details, timestamp)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(inquiry.id)
    .bind(&inquiry.name)
    .bind(&inquiry.email)
    .bind(&inquiry.phone)
    .bind(&inquiry.company)
    .bind(&inquiry.country)
    .bind(&inquiry.job_title)
    .bind(&inquiry.job_details)
    .bind(inquiry.timestamp)
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns `false` when no such inquiry exists
pub async fn update_status(
    pool: &PgPool,
    id: i64,
    status: InquiryStatus,
    now: i64,
) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE contact_submissions SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(status.as_str())
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

/// Returns `false` when no such inquiry exists
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Result of recording an enquiry response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseRecord {
    Recorded,
    /// The inquiry was deleted before the write; nothing was queued
    NotFound,
}

/// Store an admin response and queue the outgoing email, atomically
pub async fn record_response(
    pool: &PgPool,
    inquiry_id: i64,
    response: &str,
    email: &EmailQueueEntry,
    now: i64,
) -> Result<ResponseRecord, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        "UPDATE contact_submissions
         SET response = $1, responded_at = $2, status = $3, updated_at = $2
         WHERE id = $4",
    )
    .bind(response)
    .bind(now)
    .bind(InquiryStatus::Responded.as_str())
    .bind(inquiry_id)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(ResponseRecord::NotFound);
    }

    sqlx::query(
        "INSERT INTO email_queue
            (id, to_address, subject, html, text, status, enquiry_id, sender_name, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(email.id)
    .bind(&email.to_address)
    .bind(&email.subject)
    .bind(&email.html)
    .bind(&email.text)
    .bind(&email.status)
    .bind(email.enquiry_id)
    .bind(&email.sender_name)
    .bind(email.created_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(ResponseRecord::Recorded)
}
