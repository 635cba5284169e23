use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PollConfig {
    #[serde(default = "ConfigHelper::default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    #[serde(default = "ConfigHelper::default_backoff_factor")]
    pub backoff_factor: f64,

    #[serde(default = "ConfigHelper::default_max_delay_ms")]
    pub max_delay_ms: u64,

    #[serde(default = "ConfigHelper::default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: ConfigHelper::default_initial_delay_ms(),
            backoff_factor: ConfigHelper::default_backoff_factor(),
            max_delay_ms: ConfigHelper::default_max_delay_ms(),
            max_attempts: ConfigHelper::default_max_attempts(),
        }
    }
}
