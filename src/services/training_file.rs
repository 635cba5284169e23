use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;
use crate::enums::input_format::InputFormat;
use crate::errors::{PitchError, PitchResult};
use crate::services::jsonl_reader::JsonlReader;
use crate::services::record_inspector::SourceInfo;
use crate::services::script_converter::ScriptConverter;
use crate::structs::conversation_record::ConversationRecord;
use crate::structs::conversion_report::ConversionReport;

/// A training set loaded from disk, normalized to the JSONL body that would be uploaded.
#[derive(Debug, Clone)]
pub struct TrainingFile {
    pub format: InputFormat,
    pub records: Vec<ConversationRecord>,
    pub jsonl: String,
    pub orphan_lines: usize,
    pub filename: String,
    pub modified_at: i64,
}

impl TrainingFile {
    pub fn read_source(path: &Path) -> PitchResult<String> {
        fs::read_to_string(path)
            .map_err(|e| PitchError::file_error(&path.display().to_string(), "read", &e.to_string()))
    }

    pub fn load(path: &Path, format: Option<InputFormat>) -> PitchResult<Self> {
        let format = format.unwrap_or_else(|| InputFormat::from_path(path));
        let text = Self::read_source(path)?;
        let mut training_file = Self::from_text(&text, format)?;

        training_file.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        training_file.modified_at = Self::modified_epoch(path);

        Ok(training_file)
    }

    pub fn from_text(text: &str, format: InputFormat) -> PitchResult<Self> {
        let report = match format {
            InputFormat::Story => ScriptConverter::convert_with_report(text),
            InputFormat::Jsonl => ConversionReport {
                records: JsonlReader::read_records(text)?,
                orphan_lines: 0,
            },
        };
        let jsonl = report.to_jsonl();

        Ok(Self {
            format,
            records: report.records,
            jsonl,
            orphan_lines: report.orphan_lines,
            filename: String::new(),
            modified_at: chrono::Utc::now().timestamp(),
        })
    }

    /// Problems worth telling the operator about before the body is written.
    pub fn warnings(&self, warn_on_orphan_content: bool) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.orphan_lines > 0 && warn_on_orphan_content {
            warnings.push(format!(
                "Ignored {} line(s) that appear outside of any User:/Assistant:/System: message",
                self.orphan_lines
            ));
        }
        if self.records.is_empty() {
            warnings.push(format!("No conversations found in {}", self.filename));
        }

        warnings
    }

    pub fn source_info(&self, purpose: &str) -> SourceInfo {
        SourceInfo {
            filename: self.filename.clone(),
            bytes: self.jsonl.len(),
            created_at: self.modified_at,
            purpose: purpose.to_string(),
        }
    }

    fn modified_epoch(path: &Path) -> i64 {
        fs::metadata(path)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .and_then(|elapsed| i64::try_from(elapsed.as_secs()).ok())
            .unwrap_or_else(|| chrono::Utc::now().timestamp())
    }
}
