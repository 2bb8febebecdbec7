use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Timestamps are nullable so legacy rows with missing times still reach
    // the grid, flagged as invalid.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS class_sessions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date DATE NOT NULL,
            start_time TIMESTAMP WITHOUT TIME ZONE NULL,
            end_time TIMESTAMP WITHOUT TIME ZONE NULL,
            teacher_id UUID NOT NULL,
            assistant_id UUID NULL,
            subject_type VARCHAR(255) NOT NULL,
            data JSONB NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_class_sessions_date ON class_sessions(date);")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_class_sessions_teacher_id ON class_sessions(teacher_id);",
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
