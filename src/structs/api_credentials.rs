use std::fmt;
use crate::errors::{PitchError, PitchResult};
use crate::structs::config::api_config::ApiConfig;

/// API settings resolved once at startup; handed to anything that talks to the
/// fine-tuning service.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub api_key: String,
    pub model: String,
    pub purpose: String,
}

impl ApiCredentials {
    pub fn resolve(config: &ApiConfig) -> PitchResult<Self> {
        Self::resolve_with(config, |name| std::env::var(name).ok())
    }

    /// Same as [`ApiCredentials::resolve`] with an injectable environment lookup.
    pub fn resolve_with<F>(config: &ApiConfig, lookup: F) -> PitchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(&config.api_key_env)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PitchError::config_error(
                &format!("{} is not set", config.api_key_env),
                Some("api.api_key_env"),
                Some(&format!("export {}=<your key> or point api_key_env at another variable", config.api_key_env)),
            ))?;

        if config.model.trim().is_empty() {
            return Err(PitchError::config_error("model must not be empty", Some("api.model"), None));
        }

        Ok(Self {
            api_key,
            model: config.model.clone(),
            purpose: config.purpose.clone(),
        })
    }

    /// Key with everything but the last four characters masked.
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        let visible = chars.len().min(4);
        let tail: String = chars[chars.len() - visible..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - visible), tail)
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.masked_key())
            .field("model", &self.model)
            .field("purpose", &self.purpose)
            .finish()
    }
}
