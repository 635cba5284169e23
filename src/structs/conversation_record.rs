use std::fmt;
use serde::{Deserialize, Serialize};
use crate::enums::role::Role;
use crate::structs::message::Message;

/// One independent conversation; serialized as a single JSONL line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub messages: Vec<Message>,
}

impl ConversationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.messages.iter().any(|m| m.role == role)
    }

    pub fn character_count(&self) -> usize {
        self.messages.iter().map(|m| m.content.chars().count()).sum()
    }

    /// Compact JSON, e.g. `{"messages":[{"role":"user","content":"Hi"}]}`.
    pub fn to_json_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConversationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_line_matches_training_format() {
        let record = ConversationRecord {
            messages: vec![
                Message::new(Role::User, "Hi"),
                Message::new(Role::Assistant, "Say \"hello\"\nback"),
            ],
        };

        assert_eq!(
            record.to_json_line(),
            r#"{"messages":[{"role":"user","content":"Hi"},{"role":"assistant","content":"Say \"hello\"\nback"}]}"#
        );
    }
}
