use std::path::Path;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Shape of a training source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Dialogue script with `User:` / `Assistant:` / `System:` turns
    Story,
    /// One `{"messages": [...]}` object per line
    Jsonl,
}

impl InputFormat {
    /// `.jsonl` files are read as JSONL, anything else as a story script.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") => InputFormat::Jsonl,
            _ => InputFormat::Story,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("train.JSONL")), InputFormat::Jsonl);
        assert_eq!(InputFormat::from_path(Path::new("input.story")), InputFormat::Story);
        assert_eq!(InputFormat::from_path(Path::new("script")), InputFormat::Story);
    }
}
