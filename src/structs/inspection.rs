use serde::{Deserialize, Serialize};

/// File-level view of a training set, shaped like the file objects the
/// fine-tuning service reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub object: String,
    pub filename: String,
    pub bytes: usize,
    pub created_at: i64,
    pub purpose: String,
    pub records: usize,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub index: usize,
    pub messages: usize,
    pub roles: String,
    pub characters: usize,
    pub issues: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub file: FileSummary,
    pub records: Vec<RecordSummary>,
}

impl Inspection {
    pub fn records_with_issues(&self) -> usize {
        self.records.iter().filter(|r| !r.issues.is_empty()).count()
    }
}
