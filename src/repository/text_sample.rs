//! Text sample repository.

use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel_async::RunQueryDsl;

use super::models::{NewTextSample, TextSampleRecord};
use super::pool::{AsyncSqlitePool, DieselError};
use super::{encode_datetime, parse_datetime};
use crate::models::TextSample;
use crate::schema::text_samples;

diesel::define_sql_function! {
    /// SQLite RANDOM(), used for uniform sampling.
    fn random() -> Integer;
}

/// Convert a database record to a domain model.
impl From<TextSampleRecord> for TextSample {
    fn from(record: TextSampleRecord) -> Self {
        TextSample {
            id: record.id,
            text: record.text,
            source: record.source,
            topic: record.topic,
            created_at: parse_datetime(&record.created_at),
        }
    }
}

/// Diesel-based text sample repository.
#[derive(Clone)]
pub struct TextSampleRepository {
    pool: AsyncSqlitePool,
}

impl TextSampleRepository {
    /// Create a new text sample repository with an existing pool.
    pub fn new(pool: AsyncSqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a sample.
    pub async fn save(&self, sample: &TextSample) -> Result<(), DieselError> {
        let mut conn = self.pool.get().await?;

        let created_at = encode_datetime(&sample.created_at);
        let record = NewTextSample {
            id: &sample.id,
            text: &sample.text,
            source: sample.source.as_deref(),
            topic: sample.topic.as_deref(),
            created_at: &created_at,
        };

        diesel::insert_into(text_samples::table)
            .values(&record)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Get a sample by id.
    pub async fn get(&self, id: &str) -> Result<Option<TextSample>, DieselError> {
        let mut conn = self.pool.get().await?;

        text_samples::table
            .find(id)
            .first::<TextSampleRecord>(&mut conn)
            .await
            .optional()
            .map(|opt| opt.map(TextSample::from))
    }

    /// List a page of samples in storage-native order.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<TextSample>, DieselError> {
        let mut conn = self.pool.get().await?;

        text_samples::table
            .limit(limit)
            .offset(skip)
            .load::<TextSampleRecord>(&mut conn)
            .await
            .map(|records| records.into_iter().map(TextSample::from).collect())
    }

    /// Load all samples (used by the full-dataset export).
    pub async fn get_all(&self) -> Result<Vec<TextSample>, DieselError> {
        let mut conn = self.pool.get().await?;

        text_samples::table
            .load::<TextSampleRecord>(&mut conn)
            .await
            .map(|records| records.into_iter().map(TextSample::from).collect())
    }

    /// Delete a sample. Returns false when no row matched.
    ///
    /// Dependent annotations and comparisons are left in place; the
    /// reference is soft and there is no cascade.
    pub async fn delete(&self, id: &str) -> Result<bool, DieselError> {
        let mut conn = self.pool.get().await?;

        let rows = diesel::delete(text_samples::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(rows > 0)
    }

    /// Check if a sample exists.
    pub async fn exists(&self, id: &str) -> Result<bool, DieselError> {
        let mut conn = self.pool.get().await?;

        use diesel::dsl::count_star;
        let count: i64 = text_samples::table
            .filter(text_samples::id.eq(id))
            .select(count_star())
            .first(&mut conn)
            .await?;

        Ok(count > 0)
    }

    /// Select up to `n` distinct samples uniformly at random.
    pub async fn sample(&self, n: i64) -> Result<Vec<TextSample>, DieselError> {
        let mut conn = self.pool.get().await?;

        text_samples::table
            .order(random())
            .limit(n)
            .load::<TextSampleRecord>(&mut conn)
            .await
            .map(|records| records.into_iter().map(TextSample::from).collect())
    }

    /// Count all samples.
    pub async fn count(&self) -> Result<u64, DieselError> {
        let mut conn = self.pool.get().await?;

        use diesel::dsl::count_star;
        let count: i64 = text_samples::table
            .select(count_star())
            .first(&mut conn)
            .await?;

        Ok(count as u64)
    }
}
