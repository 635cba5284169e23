use serde::{Deserialize, Serialize};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::convert_config::ConvertConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::poll_config::PollConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub poll: PollConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub convert: ConvertConfig,
}
