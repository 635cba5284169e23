use crate::config::constants::{
    DEFAULT_FILE_PURPOSE, DEFAULT_MODEL, DEFAULT_POLL_BACKOFF_FACTOR, DEFAULT_POLL_INITIAL_DELAY_MS,
    DEFAULT_POLL_MAX_ATTEMPTS, DEFAULT_POLL_MAX_DELAY_MS, OPENAI_API_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_key_env() -> String {
        OPENAI_API_KEY_ENV.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_purpose() -> String {
        DEFAULT_FILE_PURPOSE.to_string()
    }

    pub fn default_initial_delay_ms() -> u64 {
        DEFAULT_POLL_INITIAL_DELAY_MS
    }

    pub fn default_backoff_factor() -> f64 {
        DEFAULT_POLL_BACKOFF_FACTOR
    }

    pub fn default_max_delay_ms() -> u64 {
        DEFAULT_POLL_MAX_DELAY_MS
    }

    pub fn default_max_attempts() -> u32 {
        DEFAULT_POLL_MAX_ATTEMPTS
    }

    pub fn default_raw() -> bool {
        false
    }

    pub fn default_warn_on_orphan_content() -> bool {
        true
    }
}
