use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConvertConfig {
    #[serde(default = "ConfigHelper::default_warn_on_orphan_content")]
    pub warn_on_orphan_content: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            warn_on_orphan_content: ConfigHelper::default_warn_on_orphan_content(),
        }
    }
}
