use async_trait::async_trait;
use chrono::NaiveDate;
use classgrid_core::{models::session::Session, source::SessionSource};
use mockall::mock;

// Mock session source for testing
mock! {
    pub SessionSource {}

    #[async_trait]
    impl SessionSource for SessionSource {
        async fn sessions_in_range(
            &self,
            start_date: NaiveDate,
            end_date: NaiveDate,
        ) -> eyre::Result<Vec<Session>>;
    }
}
