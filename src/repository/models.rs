//! Diesel ORM models for database tables.
//!
//! These records mirror the table layout exactly; conversion to the domain
//! models (with parsed timestamps and typed enums) lives in the per-table
//! repository modules.

use diesel::prelude::*;

use crate::schema;

/// Text sample record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::text_samples)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TextSampleRecord {
    pub id: String,
    pub text: String,
    pub source: Option<String>,
    pub topic: Option<String>,
    pub created_at: String,
}

/// New text sample for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::text_samples)]
pub struct NewTextSample<'a> {
    pub id: &'a str,
    pub text: &'a str,
    pub source: Option<&'a str>,
    pub topic: Option<&'a str>,
    pub created_at: &'a str,
}

/// Annotation record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::annotations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AnnotationRecord {
    pub id: String,
    pub text_sample_id: String,
    pub quality_level: String,
    pub issue_tags: String,
    pub notes: Option<String>,
    pub annotator_id: String,
    pub created_at: String,
}

/// New annotation for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::annotations)]
pub struct NewAnnotation<'a> {
    pub id: &'a str,
    pub text_sample_id: &'a str,
    pub quality_level: &'a str,
    pub issue_tags: &'a str,
    pub notes: Option<&'a str>,
    pub annotator_id: &'a str,
    pub created_at: &'a str,
}

/// Pairwise comparison record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::pairwise_comparisons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PairwiseComparisonRecord {
    pub id: String,
    pub text_a_id: String,
    pub text_b_id: String,
    pub better_text_id: String,
    pub annotator_id: String,
    pub notes: Option<String>,
    pub created_at: String,
}

/// New pairwise comparison for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::pairwise_comparisons)]
pub struct NewPairwiseComparison<'a> {
    pub id: &'a str,
    pub text_a_id: &'a str,
    pub text_b_id: &'a str,
    pub better_text_id: &'a str,
    pub annotator_id: &'a str,
    pub notes: Option<&'a str>,
    pub created_at: &'a str,
}

/// Status check record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::status_checks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StatusCheckRecord {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

/// New status check for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::status_checks)]
pub struct NewStatusCheck<'a> {
    pub id: &'a str,
    pub client_name: &'a str,
    pub timestamp: &'a str,
}
