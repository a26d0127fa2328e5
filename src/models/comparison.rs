//! Pairwise comparison model: a preference judgment between two samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::annotation::default_annotator;

/// A rater's preference judgment between two text samples.
///
/// Both sample ids are soft references checked at write time. There is no
/// check that `better_text_id` equals `text_a_id` or `text_b_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairwiseComparison {
    pub id: String,
    pub text_a_id: String,
    pub text_b_id: String,
    pub better_text_id: String,
    pub annotator_id: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PairwiseComparisonCreate> for PairwiseComparison {
    fn from(create: PairwiseComparisonCreate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text_a_id: create.text_a_id,
            text_b_id: create.text_b_id,
            better_text_id: create.better_text_id,
            annotator_id: create.annotator_id,
            notes: create.notes,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a pairwise comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct PairwiseComparisonCreate {
    pub text_a_id: String,
    pub text_b_id: String,
    pub better_text_id: String,
    #[serde(default = "default_annotator")]
    pub annotator_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}
