use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Sessions and patterns are stored as the JSON documents the screens exchange.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS class_schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            class_name VARCHAR(255) NOT NULL,
            course_id UUID NULL,
            start_date DATE NOT NULL,
            end_date DATE NULL,
            total_sessions INTEGER NOT NULL CHECK (total_sessions >= 0),
            weekly_pattern JSONB NOT NULL DEFAULT '[]'::jsonb,
            additional_sessions JSONB NOT NULL DEFAULT '[]'::jsonb,
            class_sessions JSONB NOT NULL DEFAULT '[]'::jsonb,
            time_slots JSONB NOT NULL DEFAULT '[]'::jsonb,
            schedule TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Several statements, so this goes through the simple query protocol.
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_class_schedules_course_id ON class_schedules(course_id);
        CREATE INDEX IF NOT EXISTS idx_class_schedules_start_date ON class_schedules(start_date);
        CREATE INDEX IF NOT EXISTS idx_class_schedules_created_at ON class_schedules(created_at);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
