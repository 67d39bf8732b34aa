use shared::models::{Event, EventStatus, EventType};
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct EventRow {
    id: i64,
    title: String,
    description: String,
    date: String,
    time: String,
    location: String,
    event_type: String,
    status: String,
    created_at: i64,
    updated_at: i64,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            date: row.date,
            time: row.time,
            location: row.location,
            event_type: EventType::from_db(&row.event_type).unwrap_or_default(),
            status: EventStatus::from_db(&row.status).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str =
    "id, title, description, date, time, location, event_type, status, created_at, updated_at";

/// Soonest first
pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
    let rows: Vec<EventRow> = sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM events ORDER BY date ASC, time ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Event::from).collect())
}

pub async fn create(pool: &PgPool, event: &Event) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO events
            (id, title, description, date, time, location, event_type, status, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(event.id)
    .bind(&event.title)
    .bind(&event.description)
    .bind(&event.date)
    .bind(&event.time)
    .bind(&event.location)
    .bind(event.event_type.as_str())
    .bind(event.status.as_str())
    .bind(event.created_at)
    .bind(event.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update(pool: &PgPool, event: &Event) -> Result<Option<Event>, sqlx::Error> {
    let row: Option<EventRow> = sqlx::query_as(&format!(
        "UPDATE events
         SET title = $1, description = $2, date = $3, time = $4, location = $5,
             event_type = $6, status = $7, updated_at = $8
         WHERE id = $9
         RETURNING {COLUMNS}"
    ))
    .bind(&event.title)
    .bind(&event.description)
    .bind(&event.date)
    .bind(&event.time)
    .bind(&event.location)
    .bind(event.event_type.as_str())
    .bind(event.status.as_str())
    .bind(event.updated_at)
    .bind(event.id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Event::from))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
