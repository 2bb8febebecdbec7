use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use classgrid_core::models::session::Session;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSession {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub teacher_id: Uuid,
    pub assistant_id: Option<Uuid>,
    pub subject_type: String,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<DbSession> for Session {
    fn from(row: DbSession) -> Self {
        Session {
            id: row.id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            teacher_id: row.teacher_id,
            assistant_id: row.assistant_id,
            subject_type: row.subject_type,
            data: row.data,
        }
    }
}
