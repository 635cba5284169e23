use serde::Deserialize;
use crate::enums::role::Role;
use crate::errors::{PitchError, PitchResult};
use crate::structs::conversation_record::ConversationRecord;
use crate::structs::message::Message;

const CONTENT_TYPE: &str = "JSONL";

#[derive(Debug, Deserialize)]
struct RawRecord {
    messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    role: String,
    content: String,
}

/// Reads fine-tuning JSONL back into records.
pub struct JsonlReader;

impl JsonlReader {
    pub fn read_records(text: &str) -> PitchResult<Vec<ConversationRecord>> {
        let mut records = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(Self::parse_line(line, index + 1)?);
        }

        log::debug!("Read {} records from JSONL", records.len());
        Ok(records)
    }

    fn parse_line(line: &str, line_number: usize) -> PitchResult<ConversationRecord> {
        let raw: RawRecord = serde_json::from_str(line).map_err(|e| {
            PitchError::parse_error(CONTENT_TYPE, Some(line_number), &e.to_string(), Some(Self::excerpt(line)))
        })?;

        if raw.messages.is_empty() {
            return Err(PitchError::parse_error(CONTENT_TYPE, Some(line_number), "record has no messages", None));
        }

        let mut record = ConversationRecord::new();
        for (position, message) in raw.messages.into_iter().enumerate() {
            let role = Role::parse(&message.role).ok_or_else(|| {
                PitchError::parse_error(
                    CONTENT_TYPE,
                    Some(line_number),
                    &format!("unknown role '{}' in message {}", message.role, position + 1),
                    Some("expected one of: system, user, assistant"),
                )
            })?;
            record.push(Message::new(role, message.content));
        }

        Ok(record)
    }

    fn excerpt(line: &str) -> &str {
        match line.char_indices().nth(60) {
            Some((cut, _)) => &line[..cut],
            None => line,
        }
    }
}
