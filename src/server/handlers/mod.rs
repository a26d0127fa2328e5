//! Request handlers, one module per endpoint group.

mod analytics;
mod annotations;
mod comparisons;
mod exports;
mod imports;
mod samples;
mod seed;
mod status;

pub use analytics::analytics_summary;
pub use annotations::{create_annotation, list_annotations, list_annotations_for_sample};
pub use comparisons::{create_comparison, list_comparisons};
pub use exports::{export_annotations_csv, export_full_dataset_csv};
pub use imports::{upload_csv, upload_json};
pub use samples::{create_sample, delete_sample, get_sample, list_samples, random_pair};
pub use seed::initialize_sample_data;
pub use status::{create_status_check, list_status_checks, root};

use serde::Deserialize;

/// Pagination query params shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}
