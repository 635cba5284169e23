use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_raw")]
    pub raw: bool,

    /// Extra fields hidden from table views, on top of the built-in list.
    #[serde(default)]
    pub hidden_fields: Vec<String>,
}
