use std::mem;
use std::str::Lines;
use crate::enums::line_kind::LineKind;
use crate::enums::parser_state::ParserState;
use crate::structs::conversation_record::ConversationRecord;
use crate::structs::conversion_report::ConversionReport;

/// Editors on Windows often prefix UTF-8 files with one; `str::trim` keeps it.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Converts story scripts (`User:` / `Assistant:` / `System:` turns, `---` between
/// conversations) into fine-tuning records.
pub struct ScriptConverter;

impl ScriptConverter {
    /// Lazily yields one record per non-empty `---`-delimited group.
    pub fn records(plain_text: &str) -> Records<'_> {
        Records::new(plain_text)
    }

    /// One compact JSON line per record, in script order.
    pub fn convert(plain_text: &str) -> Vec<String> {
        Self::records(plain_text)
            .map(|record| record.to_json_line())
            .collect()
    }

    pub fn convert_with_report(plain_text: &str) -> ConversionReport {
        let mut records = Self::records(plain_text);
        let collected: Vec<ConversationRecord> = records.by_ref().collect();

        ConversionReport {
            records: collected,
            orphan_lines: records.orphan_lines(),
        }
    }

    /// Newline-joined JSONL body, ready to be written as a training file.
    pub fn to_jsonl(plain_text: &str) -> String {
        Self::convert(plain_text).join("\n")
    }
}

/// Iterator driving the line state machine; see [`ScriptConverter::records`].
pub struct Records<'a> {
    lines: Lines<'a>,
    state: ParserState,
    conversation: ConversationRecord,
    orphan_lines: usize,
    exhausted: bool,
}

impl<'a> Records<'a> {
    fn new(plain_text: &'a str) -> Self {
        Self {
            lines: plain_text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK).lines(),
            state: ParserState::Idle,
            conversation: ConversationRecord::new(),
            orphan_lines: 0,
            exhausted: false,
        }
    }

    /// Non-blank lines dropped so far because no message was open.
    pub fn orphan_lines(&self) -> usize {
        self.orphan_lines
    }

    fn close_message(&mut self) {
        if let Some(message) = self.state.finish() {
            self.conversation.push(message);
        }
    }

    fn take_conversation(&mut self) -> Option<ConversationRecord> {
        if self.conversation.is_empty() {
            None
        } else {
            Some(mem::take(&mut self.conversation))
        }
    }
}

impl Iterator for Records<'_> {
    type Item = ConversationRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        while let Some(line) = self.lines.next() {
            match LineKind::classify(line) {
                LineKind::Separator => {
                    self.close_message();
                    if let Some(record) = self.take_conversation() {
                        return Some(record);
                    }
                }
                LineKind::RoleHeader { role, content } => {
                    self.close_message();
                    self.state = ParserState::start(role, content);
                }
                LineKind::Continuation(fragment) => {
                    if !self.state.append(fragment) && !fragment.is_empty() {
                        log::debug!("Dropping line outside of any message: {:?}", fragment);
                        self.orphan_lines += 1;
                    }
                }
            }
        }

        self.exhausted = true;
        self.close_message();
        self.take_conversation()
    }
}
