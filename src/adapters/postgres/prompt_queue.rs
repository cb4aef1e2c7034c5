//! PostgreSQL implementation of PromptQueue.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, SessionKey};
use crate::ports::PromptQueue;

/// Durable reprompt queue over the `scheduled_prompts` table.
///
/// `session_key` is the primary key, so arming is an upsert and a pending
/// entry survives process restarts. Draining deletes and returns due rows
/// in one statement, which keeps two workers from firing the same entry.
#[derive(Clone)]
pub struct PostgresPromptQueue {
    pool: PgPool,
}

impl PostgresPromptQueue {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptQueue for PostgresPromptQueue {
    async fn arm(&self, key: &SessionKey, due_at: DateTime<Utc>) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO scheduled_prompts (session_key, due_at)
            VALUES ($1, $2)
            ON CONFLICT (session_key) DO UPDATE SET due_at = EXCLUDED.due_at
            "#,
        )
        .bind(key.as_str())
        .bind(due_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::scheduler(format!("Failed to arm prompt: {e}")))?;

        Ok(())
    }

    async fn take_due(&self, now: DateTime<Utc>) -> Result<Vec<SessionKey>, DomainError> {
        let rows = sqlx::query(
            r#"
            DELETE FROM scheduled_prompts
            WHERE due_at <= $1
            RETURNING session_key
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::scheduler(format!("Failed to drain due prompts: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| SessionKey::from_qualified(row.get::<String, _>("session_key")))
            .collect())
    }
}
