use crate::enums::role::Role;
use crate::structs::conversation_record::ConversationRecord;
use crate::structs::inspection::{FileSummary, Inspection, RecordSummary};

/// Where the records came from.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub filename: String,
    /// Size of the JSONL body that would be uploaded.
    pub bytes: usize,
    pub created_at: i64,
    pub purpose: String,
}

pub struct RecordInspector;

impl RecordInspector {
    pub fn inspect(records: &[ConversationRecord], source: SourceInfo) -> Inspection {
        let rows: Vec<RecordSummary> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Self::summarize(index, record))
            .collect();

        Inspection {
            file: FileSummary {
                object: "file".to_string(),
                filename: source.filename,
                bytes: source.bytes,
                created_at: source.created_at,
                purpose: source.purpose,
                records: records.len(),
                messages: records.iter().map(ConversationRecord::len).sum(),
            },
            records: rows,
        }
    }

    fn summarize(index: usize, record: &ConversationRecord) -> RecordSummary {
        let mut roles: Vec<Role> = Vec::new();
        for message in &record.messages {
            if !roles.contains(&message.role) {
                roles.push(message.role);
            }
        }

        RecordSummary {
            index,
            messages: record.len(),
            roles: roles.iter().map(Role::as_str).collect::<Vec<_>>().join(", "),
            characters: record.character_count(),
            issues: Self::issues(record).join("; "),
        }
    }

    /// Problems a fine-tuning upload would reject.
    pub fn issues(record: &ConversationRecord) -> Vec<String> {
        let mut issues = Vec::new();

        if !record.has_role(Role::Assistant) {
            issues.push("no assistant message".to_string());
        }

        for (position, message) in record.messages.iter().enumerate() {
            if message.content.is_empty() {
                issues.push(format!("empty content in message {}", position + 1));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::message::Message;

    fn source() -> SourceInfo {
        SourceInfo {
            filename: "chat.story".to_string(),
            bytes: 42,
            created_at: 1_700_000_000,
            purpose: "fine-tune".to_string(),
        }
    }

    #[test]
    fn summarizes_roles_in_order_of_appearance() {
        let record = ConversationRecord {
            messages: vec![
                Message::new(Role::User, "Hi"),
                Message::new(Role::Assistant, "Hello"),
                Message::new(Role::User, "Bye"),
            ],
        };

        let inspection = RecordInspector::inspect(&[record], source());

        assert_eq!(inspection.file.records, 1);
        assert_eq!(inspection.file.messages, 3);
        assert_eq!(inspection.records[0].roles, "user, assistant");
        assert_eq!(inspection.records[0].characters, 10);
        assert_eq!(inspection.records_with_issues(), 0);
    }

    #[test]
    fn flags_missing_assistant_and_empty_content() {
        let record = ConversationRecord {
            messages: vec![Message::new(Role::System, ""), Message::new(Role::User, "Hi")],
        };

        assert_eq!(
            RecordInspector::issues(&record),
            vec!["no assistant message".to_string(), "empty content in message 1".to_string()]
        );
    }
}
