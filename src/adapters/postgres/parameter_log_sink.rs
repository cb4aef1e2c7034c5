//! PostgreSQL implementation of RecordSink.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::collection::ParameterLog;
use crate::domain::foundation::DomainError;
use crate::ports::RecordSink;

/// Writes completed records to the `parameter_log` table.
#[derive(Clone)]
pub struct PostgresRecordSink {
    pool: PgPool,
}

impl PostgresRecordSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordSink for PostgresRecordSink {
    async fn insert(&self, record: &ParameterLog) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO parameter_log (
                log_date, value, log_unit, evidence_url, evidence_name,
                process_id, para_id, data_collection_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&record.log_date)
        .bind(&record.value)
        .bind(&record.log_unit)
        .bind(&record.evidence_url)
        .bind(&record.evidence_name)
        .bind(&record.process_id)
        .bind(&record.para_id)
        .bind(&record.data_collection_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert parameter log: {e}")))?;

        Ok(())
    }
}
