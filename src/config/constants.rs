pub const RECORD_SEPARATOR: &str = "---";

pub const CONFIG_DIR_NAME: &str = ".pitch";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
// Only GPT 3.5 Turbo supports fine-tuning through this tool for now
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_FILE_PURPOSE: &str = "fine-tune";

pub const DEFAULT_POLL_INITIAL_DELAY_MS: u64 = 1000;
pub const DEFAULT_POLL_BACKOFF_FACTOR: f64 = 2.0;
pub const DEFAULT_POLL_MAX_DELAY_MS: u64 = 30_000;
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 10;

pub const DATE_FIELDS: &[&str] = &["created", "created_at", "finished_at", "last_updated"];
pub const HIDDEN_FIELDS: &[&str] = &["permission", "parent", "hyperparameters"];
pub const INDEX_COLUMN: &str = "(index)";
pub const VALUES_COLUMN: &str = "Values";

pub const SPINNER_FRAME_MS: u64 = 150;
