//! Annotation models: a single rater's quality judgment for one text sample.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quality level assigned by a rater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Good,
    Average,
    Poor,
}

impl QualityLevel {
    /// All levels, in reporting order.
    pub const ALL: [QualityLevel; 3] = [Self::Good, Self::Average, Self::Poor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "good" => Some(Self::Good),
            "average" => Some(Self::Average),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }
}

/// Issue tag flagged on a sample. Tags are a set, not mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueTag {
    GrammarError,
    IrrelevantContent,
    HarmfulUnsafe,
    IncompleteTruncated,
}

impl IssueTag {
    /// All tags, in reporting order.
    pub const ALL: [IssueTag; 4] = [
        Self::GrammarError,
        Self::IrrelevantContent,
        Self::HarmfulUnsafe,
        Self::IncompleteTruncated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrammarError => "grammar_error",
            Self::IrrelevantContent => "irrelevant_content",
            Self::HarmfulUnsafe => "harmful_unsafe",
            Self::IncompleteTruncated => "incomplete_truncated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "grammar_error" => Some(Self::GrammarError),
            "irrelevant_content" => Some(Self::IrrelevantContent),
            "harmful_unsafe" => Some(Self::HarmfulUnsafe),
            "incomplete_truncated" => Some(Self::IncompleteTruncated),
            _ => None,
        }
    }
}

/// A rater's quality judgment and issue tags for one text sample.
///
/// `text_sample_id` is a soft reference: it is checked against the samples
/// collection at write time only, and deleting a sample orphans its
/// annotations rather than cascading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub text_sample_id: String,
    pub quality_level: QualityLevel,
    pub issue_tags: Vec<IssueTag>,
    pub notes: Option<String>,
    pub annotator_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<AnnotationCreate> for Annotation {
    fn from(create: AnnotationCreate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text_sample_id: create.text_sample_id,
            quality_level: create.quality_level,
            issue_tags: create.issue_tags,
            notes: create.notes,
            annotator_id: create.annotator_id,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating an annotation.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationCreate {
    pub text_sample_id: String,
    pub quality_level: QualityLevel,
    #[serde(default)]
    pub issue_tags: Vec<IssueTag>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_annotator")]
    pub annotator_id: String,
}

pub(crate) fn default_annotator() -> String {
    "default".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_level_round_trip() {
        for level in QualityLevel::ALL {
            assert_eq!(QualityLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(QualityLevel::from_str("excellent"), None);
    }

    #[test]
    fn test_issue_tag_round_trip() {
        for tag in IssueTag::ALL {
            assert_eq!(IssueTag::from_str(tag.as_str()), Some(tag));
        }
        assert_eq!(IssueTag::from_str("spelling"), None);
    }

    #[test]
    fn test_annotation_create_defaults() {
        let body = r#"{"text_sample_id": "s1", "quality_level": "good"}"#;
        let create: AnnotationCreate = serde_json::from_str(body).unwrap();
        assert!(create.issue_tags.is_empty());
        assert_eq!(create.annotator_id, "default");
        assert!(create.notes.is_none());
    }
}
