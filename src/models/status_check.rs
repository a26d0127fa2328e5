//! Legacy status-check records, kept for API compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A health-check ping recorded by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(create: StatusCheckCreate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            client_name: create.client_name,
            timestamp: Utc::now(),
        }
    }
}

/// Request body for recording a status check.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}
