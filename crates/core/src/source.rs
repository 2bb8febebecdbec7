use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;

use crate::models::session::Session;

/// Supplier of sessions for a resolved date window.
///
/// Implementations return every session whose date falls inside
/// `[start_date, end_date]`. The layout pipeline does not care about the
/// transport behind it.
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn sessions_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Session>>;
}
