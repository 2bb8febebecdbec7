use async_trait::async_trait;
use chrono::NaiveDate;
use classgrid_core::{models::session::Session, source::SessionSource};
use eyre::Result;

use crate::{repositories, DbPool};

/// [`SessionSource`] backed by the `class_sessions` table.
#[derive(Debug, Clone)]
pub struct PgSessionSource {
    pool: DbPool,
}

impl PgSessionSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionSource for PgSessionSource {
    async fn sessions_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Session>> {
        let rows = repositories::session::get_sessions_in_range(&self.pool, start_date, end_date).await?;
        Ok(rows.into_iter().map(Session::from).collect())
    }
}
