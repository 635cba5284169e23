use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::input_format::InputFormat;
use crate::errors::{PitchError, PitchResult};
use crate::logger::spinner::Spinner;
use crate::services::output_formatter::{OutputFormatter, RenderOptions};
use crate::services::record_inspector::RecordInspector;
use crate::services::training_file::TrainingFile;
use crate::structs::api_credentials::ApiCredentials;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
    raw: bool,
}

impl CommandRunner {
    pub fn new(cli: &Cli) -> Self {
        Self {
            start_time: None,
            config_path: cli.config.clone(),
            raw: cli.raw,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> PitchResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Convert { filepath, output } => self.convert_command(&filepath, output.as_deref()).await,
            Commands::Inspect { filepath, format } => self.inspect_command(&filepath, format).await,
            Commands::Init => self.init_command().await,
            Commands::Validate => self.validate_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> PitchResult<Config> {
        ConfigManager::load(self.config_path.as_deref())
    }

    fn render_options(&self, config: &Config) -> RenderOptions {
        RenderOptions {
            raw: self.raw || config.output.raw,
            hidden_fields: config.output.hidden_fields.clone(),
            max_width: None,
        }
        .with_terminal_width()
    }

    /// Runs `operation` behind a spinner, reporting success or failure on stderr.
    pub async fn run_with_spinner<T, F, Fut>(loading_message: &str, success_message: &str, operation: F) -> PitchResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PitchResult<T>>,
    {
        let mut spinner = Spinner::new(loading_message);
        spinner.start();

        match operation().await {
            Ok(value) => {
                spinner.succeed(success_message).await;
                Ok(value)
            }
            Err(e) => {
                spinner.fail(&e.user_message()).await;
                Err(e)
            }
        }
    }

    async fn convert_command(&self, filepath: &Path, output: Option<&Path>) -> PitchResult<()> {
        let config = self.load_config()?;
        let training_file = TrainingFile::load(filepath, Some(InputFormat::Story))?;

        for warning in training_file.warnings(config.convert.warn_on_orphan_content) {
            log::warn!("⚠️ {}", warning);
        }

        if training_file.records.is_empty() {
            log::warn!("💡 Start each turn with 'User:', 'Assistant:' or 'System:' and separate conversations with '---'");
        }

        match output {
            Some(path) => {
                let display = path.display().to_string();
                let target = path.to_path_buf();
                let mut body = training_file.jsonl.clone();
                if !body.is_empty() {
                    body.push('\n');
                }

                let success = format!("Wrote {} records to {}", training_file.records.len(), display);
                Self::run_with_spinner("Writing JSONL", &success, || async move {
                    fs::write(&target, body).map_err(|e| PitchError::file_error(&display, "write", &e.to_string()))
                })
                .await?;
            }
            None => {
                for record in &training_file.records {
                    println!("{}", record.to_json_line());
                }
            }
        }

        log::debug!("Converted {} into {} records", filepath.display(), training_file.records.len());
        Ok(())
    }

    async fn inspect_command(&self, filepath: &Path, format: Option<InputFormat>) -> PitchResult<()> {
        let config = self.load_config()?;
        let options = self.render_options(&config);

        let path = filepath.to_path_buf();
        let purpose = config.api.purpose.clone();
        let inspection = Self::run_with_spinner("Reading training file", "Training file read", || async move {
            let training_file = TrainingFile::load(&path, format)?;
            Ok::<_, PitchError>(RecordInspector::inspect(&training_file.records, training_file.source_info(&purpose)))
        })
        .await?;

        if options.raw {
            println!("{}", OutputFormatter::render(serde_json::to_value(&inspection)?, &options)?);
        } else {
            println!("{}", OutputFormatter::render(serde_json::to_value(&inspection.file)?, &options)?);
            if !inspection.records.is_empty() {
                println!("{}", OutputFormatter::render(serde_json::to_value(&inspection.records)?, &options)?);
            }
        }

        let flagged = inspection.records_with_issues();
        if flagged > 0 {
            log::warn!("⚠️ {} of {} records would be rejected by a fine-tuning upload", flagged, inspection.records.len());
        }

        Ok(())
    }

    async fn init_command(&self) -> PitchResult<()> {
        log::info!("🚀 Initializing pitch configuration...");

        match ConfigManager::create_sample_config(self.config_path.as_deref()) {
            Ok(path) => {
                log::info!("✅ Created sample config at: {}", path.display());
                log::info!("🔧 Run 'pitch validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn validate_command(&self) -> PitchResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                log::error!("💡 Run 'pitch init' to create a configuration file.");
                return Err(e);
            }
        };

        let mut problems: Vec<PitchError> = match ConfigManager::validate_config(&config) {
            Ok(()) => Vec::new(),
            Err(messages) => messages
                .iter()
                .map(|message| PitchError::validation_error("config", message, "valid configuration", None))
                .collect(),
        };

        match ApiCredentials::resolve(&config.api) {
            Ok(credentials) => {
                log::info!("🔑 API key found in {}: {}", config.api.api_key_env, credentials.masked_key());
                log::info!("🤖 Model: {}", credentials.model);
            }
            Err(e) => problems.push(e),
        }

        match problems.len() {
            0 => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            1 => Err(problems.remove(0)),
            _ => Err(PitchError::MultipleErrors {
                errors: problems,
                context: "configuration validation".to_string(),
            }),
        }
    }
}
