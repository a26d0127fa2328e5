//! Annotation repository.
//!
//! Issue tags are stored as a JSON array in a text column; the
//! set-membership counts used by analytics filter with LIKE patterns
//! against that column.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::models::{AnnotationRecord, NewAnnotation};
use super::pool::{AsyncSqlitePool, DieselError};
use super::{encode_datetime, parse_datetime};
use crate::models::{Annotation, IssueTag, QualityLevel};
use crate::schema::annotations;

/// Convert a database record to a domain model.
impl From<AnnotationRecord> for Annotation {
    fn from(record: AnnotationRecord) -> Self {
        Annotation {
            id: record.id,
            text_sample_id: record.text_sample_id,
            quality_level: QualityLevel::from_str(&record.quality_level)
                .unwrap_or(QualityLevel::Average),
            issue_tags: serde_json::from_str(&record.issue_tags).unwrap_or_default(),
            notes: record.notes,
            annotator_id: record.annotator_id,
            created_at: parse_datetime(&record.created_at),
        }
    }
}

/// Diesel-based annotation repository.
#[derive(Clone)]
pub struct AnnotationRepository {
    pool: AsyncSqlitePool,
}

impl AnnotationRepository {
    /// Create a new annotation repository with an existing pool.
    pub fn new(pool: AsyncSqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an annotation.
    pub async fn save(&self, annotation: &Annotation) -> Result<(), DieselError> {
        let mut conn = self.pool.get().await?;

        let issue_tags = serde_json::to_string(&annotation.issue_tags)
            .unwrap_or_else(|_| "[]".to_string());
        let created_at = encode_datetime(&annotation.created_at);
        let record = NewAnnotation {
            id: &annotation.id,
            text_sample_id: &annotation.text_sample_id,
            quality_level: annotation.quality_level.as_str(),
            issue_tags: &issue_tags,
            notes: annotation.notes.as_deref(),
            annotator_id: &annotation.annotator_id,
            created_at: &created_at,
        };

        diesel::insert_into(annotations::table)
            .values(&record)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// List a page of annotations in storage-native order.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Annotation>, DieselError> {
        let mut conn = self.pool.get().await?;

        annotations::table
            .limit(limit)
            .offset(skip)
            .load::<AnnotationRecord>(&mut conn)
            .await
            .map(|records| records.into_iter().map(Annotation::from).collect())
    }

    /// List all annotations for one text sample.
    pub async fn list_for_sample(&self, sample_id: &str) -> Result<Vec<Annotation>, DieselError> {
        let mut conn = self.pool.get().await?;

        annotations::table
            .filter(annotations::text_sample_id.eq(sample_id))
            .load::<AnnotationRecord>(&mut conn)
            .await
            .map(|records| records.into_iter().map(Annotation::from).collect())
    }

    /// Load all annotations (used by the CSV exports).
    pub async fn get_all(&self) -> Result<Vec<Annotation>, DieselError> {
        let mut conn = self.pool.get().await?;

        annotations::table
            .load::<AnnotationRecord>(&mut conn)
            .await
            .map(|records| records.into_iter().map(Annotation::from).collect())
    }

    /// Count all annotations.
    pub async fn count(&self) -> Result<u64, DieselError> {
        let mut conn = self.pool.get().await?;

        use diesel::dsl::count_star;
        let count: i64 = annotations::table
            .select(count_star())
            .first(&mut conn)
            .await?;

        Ok(count as u64)
    }

    /// Count annotations with the given quality level.
    pub async fn count_by_quality(&self, level: QualityLevel) -> Result<u64, DieselError> {
        let mut conn = self.pool.get().await?;

        use diesel::dsl::count_star;
        let count: i64 = annotations::table
            .filter(annotations::quality_level.eq(level.as_str()))
            .select(count_star())
            .first(&mut conn)
            .await?;

        Ok(count as u64)
    }

    /// Count annotations whose tag set contains the given tag.
    pub async fn count_with_tag(&self, tag: IssueTag) -> Result<u64, DieselError> {
        let mut conn = self.pool.get().await?;

        use diesel::dsl::count_star;
        let pattern = format!("%{}%", tag.as_str());
        let count: i64 = annotations::table
            .filter(annotations::issue_tags.like(pattern))
            .select(count_star())
            .first(&mut conn)
            .await?;

        Ok(count as u64)
    }
}
