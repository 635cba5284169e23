use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{PitchError, PitchResult};
use crate::helpers::poll::PollPolicy;
use crate::structs::config::config::Config;

pub const SAMPLE_CONFIG: &str = r#"# Pitch configuration

[api]
# Environment variable holding the API key
api_key_env = "OPENAI_API_KEY"

# Base model for fine-tuning jobs
model = "gpt-3.5-turbo"

# Purpose tag attached to uploaded training files
purpose = "fine-tune"

# Waiting for uploaded files to be processed
[poll]
initial_delay_ms = 1000
backoff_factor = 2.0
max_delay_ms = 30000
max_attempts = 10

[output]
# Print raw JSON instead of tables
raw = false

# Fields hidden from table views in addition to permission/parent/hyperparameters
hidden_fields = []

[convert]
# Warn when script text appears before any User:/Assistant:/System: line
warn_on_orphan_content = true
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when `None`. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> PitchResult<Config> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !config_path.exists() {
            if path.is_some() {
                return Err(PitchError::config_file_error(&config_path.display().to_string(), "file does not exist"));
            }
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)
            .map_err(|e| PitchError::config_file_error(&config_path.display().to_string(), &e.to_string()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> PitchResult<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Writes the sample config; refuses to overwrite an existing file.
    pub fn create_sample_config(path: Option<&Path>) -> PitchResult<PathBuf> {
        let config_file_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        let display = config_file_path.display().to_string();

        if config_file_path.exists() {
            return Err(PitchError::config_file_error(&display, "file already exists"));
        }

        if let Some(parent) = config_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| PitchError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
            }
        }

        fs::write(&config_file_path, SAMPLE_CONFIG)
            .map_err(|e| PitchError::file_error(&display, "write", &e.to_string()))?;

        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.api.api_key_env.trim().is_empty() {
            errors.push("api.api_key_env must name an environment variable".to_string());
        }

        if config.api.model.trim().is_empty() {
            errors.push("api.model must not be empty".to_string());
        }

        if config.api.purpose.trim().is_empty() {
            errors.push("api.purpose must not be empty".to_string());
        }

        if let Err(e) = PollPolicy::from(&config.poll).validate() {
            errors.push(format!("poll: {}", e));
        }

        if config.poll.initial_delay_ms > config.poll.max_delay_ms {
            errors.push(format!(
                "poll.initial_delay_ms ({}) exceeds poll.max_delay_ms ({})",
                config.poll.initial_delay_ms, config.poll.max_delay_ms
            ));
        }

        let mut names = std::collections::HashSet::new();
        for field in &config.output.hidden_fields {
            if !names.insert(field) {
                errors.push(format!("Duplicate hidden field: {}", field));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config = ConfigManager::parse(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = ConfigManager::parse("[api]\nmodel = \"babbage-002\"\n").unwrap();

        assert_eq!(config.api.model, "babbage-002");
        assert_eq!(config.api.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.poll.max_attempts, 10);
        assert!(config.convert.warn_on_orphan_content);
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::default();
        config.api.model = String::new();
        config.poll.max_attempts = 0;
        config.output.hidden_fields = vec!["object".to_string(), "object".to_string()];

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
