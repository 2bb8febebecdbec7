use crate::models::DbSession;
use chrono::NaiveDate;
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};

pub async fn get_sessions_in_range(
    pool: &Pool<Postgres>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<DbSession>> {
    if end_date < start_date {
        return Err(eyre!(
            "Invalid session range: {} is after {}",
            start_date,
            end_date
        ));
    }

    tracing::debug!("Fetching sessions: start={}, end={}", start_date, end_date);

    let sessions = sqlx::query_as::<_, DbSession>(
        r#"
        SELECT id, date, start_time, end_time, teacher_id, assistant_id,
               subject_type, data, created_at
        FROM class_sessions
        WHERE date BETWEEN $1 AND $2
        ORDER BY date ASC, start_time ASC NULLS LAST, id ASC
        "#,
    )
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Fetched {} sessions", sessions.len());
    Ok(sessions)
}
