use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_purpose")]
    pub purpose: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key_env: ConfigHelper::default_api_key_env(),
            model: ConfigHelper::default_model(),
            purpose: ConfigHelper::default_purpose(),
        }
    }
}
