use crate::enums::role::Role;
use crate::structs::message::Message;

/// Converter state between two script lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    Idle,
    InMessage { role: Role, content: String },
}

impl ParserState {
    pub fn start(role: Role, content: &str) -> Self {
        ParserState::InMessage { role, content: content.to_string() }
    }

    /// Closes the open message, if any, leaving the state `Idle`.
    pub fn finish(&mut self) -> Option<Message> {
        match std::mem::take(self) {
            ParserState::Idle => None,
            ParserState::InMessage { role, content } => Some(Message::new(role, content.trim())),
        }
    }

    /// Appends an already-trimmed continuation fragment.
    /// Returns false when no message is open and the fragment was dropped.
    pub fn append(&mut self, fragment: &str) -> bool {
        match self {
            ParserState::Idle => false,
            ParserState::InMessage { content, .. } => {
                if !content.is_empty() {
                    content.push('\n');
                }
                content.push_str(fragment);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fragment_on_empty_content_stays_empty() {
        let mut state = ParserState::start(Role::User, "");
        state.append("");
        state.append("Hello");
        assert_eq!(state.finish(), Some(Message::new(Role::User, "Hello")));
        assert_eq!(state, ParserState::Idle);
    }

    #[test]
    fn inner_blank_lines_are_kept() {
        let mut state = ParserState::start(Role::Assistant, "a");
        state.append("");
        state.append("b");
        assert_eq!(state.finish().map(|m| m.content), Some("a\n\nb".to_string()));
    }

    #[test]
    fn idle_drops_fragments() {
        let mut state = ParserState::Idle;
        assert!(!state.append("stray"));
        assert_eq!(state.finish(), None);
    }
}
