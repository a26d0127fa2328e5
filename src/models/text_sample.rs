//! Text sample model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of text content subject to quality evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSample {
    /// Opaque unique id (UUID v4).
    pub id: String,
    /// The text content being rated.
    pub text: String,
    /// Where the text came from, if known.
    pub source: Option<String>,
    /// Topic label, if known.
    pub topic: Option<String>,
    /// Set once at creation, never mutated.
    pub created_at: DateTime<Utc>,
}

impl TextSample {
    /// Create a new sample with a generated id and current timestamp.
    pub fn new(text: String, source: Option<String>, topic: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            source,
            topic,
            created_at: Utc::now(),
        }
    }
}

impl From<TextSampleCreate> for TextSample {
    fn from(create: TextSampleCreate) -> Self {
        Self::new(create.text, create.source, create.topic)
    }
}

/// Request body for creating a text sample.
#[derive(Debug, Clone, Deserialize)]
pub struct TextSampleCreate {
    pub text: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}
