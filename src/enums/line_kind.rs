use crate::config::constants::RECORD_SEPARATOR;
use crate::enums::role::Role;

/// Classification of a single script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Separator,
    RoleHeader { role: Role, content: &'a str },
    Continuation(&'a str),
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line == RECORD_SEPARATOR {
            return LineKind::Separator;
        }

        // Header must start at column 0 with the colon directly after the label.
        if let Some((label, rest)) = line.split_once(':') {
            if let Some(role) = Role::from_label(label) {
                return LineKind::RoleHeader { role, content: rest.trim() };
            }
        }

        LineKind::Continuation(line.trim())
    }
}
