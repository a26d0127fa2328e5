//! Pairwise comparison repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::models::{NewPairwiseComparison, PairwiseComparisonRecord};
use super::pool::{AsyncSqlitePool, DieselError};
use super::{encode_datetime, parse_datetime};
use crate::models::PairwiseComparison;
use crate::schema::pairwise_comparisons;

/// Convert a database record to a domain model.
impl From<PairwiseComparisonRecord> for PairwiseComparison {
    fn from(record: PairwiseComparisonRecord) -> Self {
        PairwiseComparison {
            id: record.id,
            text_a_id: record.text_a_id,
            text_b_id: record.text_b_id,
            better_text_id: record.better_text_id,
            annotator_id: record.annotator_id,
            notes: record.notes,
            created_at: parse_datetime(&record.created_at),
        }
    }
}

/// Diesel-based pairwise comparison repository.
#[derive(Clone)]
pub struct ComparisonRepository {
    pool: AsyncSqlitePool,
}

impl ComparisonRepository {
    /// Create a new comparison repository with an existing pool.
    pub fn new(pool: AsyncSqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a comparison.
    pub async fn save(&self, comparison: &PairwiseComparison) -> Result<(), DieselError> {
        let mut conn = self.pool.get().await?;

        let created_at = encode_datetime(&comparison.created_at);
        let record = NewPairwiseComparison {
            id: &comparison.id,
            text_a_id: &comparison.text_a_id,
            text_b_id: &comparison.text_b_id,
            better_text_id: &comparison.better_text_id,
            annotator_id: &comparison.annotator_id,
            notes: comparison.notes.as_deref(),
            created_at: &created_at,
        };

        diesel::insert_into(pairwise_comparisons::table)
            .values(&record)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// List a page of comparisons in storage-native order.
    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<PairwiseComparison>, DieselError> {
        let mut conn = self.pool.get().await?;

        pairwise_comparisons::table
            .limit(limit)
            .offset(skip)
            .load::<PairwiseComparisonRecord>(&mut conn)
            .await
            .map(|records| records.into_iter().map(PairwiseComparison::from).collect())
    }

    /// Count all comparisons.
    pub async fn count(&self) -> Result<u64, DieselError> {
        let mut conn = self.pool.get().await?;

        use diesel::dsl::count_star;
        let count: i64 = pairwise_comparisons::table
            .select(count_star())
            .first(&mut conn)
            .await?;

        Ok(count as u64)
    }
}
