use crate::structs::conversation_record::ConversationRecord;

/// Result of converting one script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub records: Vec<ConversationRecord>,
    /// Continuation lines seen while no message was open; these never reach the output.
    pub orphan_lines: usize,
}

impl ConversionReport {
    pub fn message_count(&self) -> usize {
        self.records.iter().map(ConversationRecord::len).sum()
    }

    pub fn json_lines(&self) -> Vec<String> {
        self.records.iter().map(ConversationRecord::to_json_line).collect()
    }

    pub fn to_jsonl(&self) -> String {
        self.json_lines().join("\n")
    }
}
