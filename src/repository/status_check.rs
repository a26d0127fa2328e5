//! Status check repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::models::{NewStatusCheck, StatusCheckRecord};
use super::pool::{AsyncSqlitePool, DieselError};
use super::{encode_datetime, parse_datetime};
use crate::models::StatusCheck;
use crate::schema::status_checks;

/// Convert a database record to a domain model.
impl From<StatusCheckRecord> for StatusCheck {
    fn from(record: StatusCheckRecord) -> Self {
        StatusCheck {
            id: record.id,
            client_name: record.client_name,
            timestamp: parse_datetime(&record.timestamp),
        }
    }
}

/// Diesel-based status check repository.
#[derive(Clone)]
pub struct StatusCheckRepository {
    pool: AsyncSqlitePool,
}

impl StatusCheckRepository {
    /// Create a new status check repository with an existing pool.
    pub fn new(pool: AsyncSqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a status check.
    pub async fn save(&self, check: &StatusCheck) -> Result<(), DieselError> {
        let mut conn = self.pool.get().await?;

        let timestamp = encode_datetime(&check.timestamp);
        let record = NewStatusCheck {
            id: &check.id,
            client_name: &check.client_name,
            timestamp: &timestamp,
        };

        diesel::insert_into(status_checks::table)
            .values(&record)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// List status checks, up to `limit`.
    pub async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>, DieselError> {
        let mut conn = self.pool.get().await?;

        status_checks::table
            .limit(limit)
            .load::<StatusCheckRecord>(&mut conn)
            .await
            .map(|records| records.into_iter().map(StatusCheck::from).collect())
    }
}
