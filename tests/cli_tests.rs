use clap::Parser;
use pitch::config::config_manager::ConfigManager;
use pitch::enums::commands::Commands;
use pitch::enums::input_format::InputFormat;
use pitch::services::training_file::TrainingFile;
use pitch::structs::cli::Cli;
use pitch::workers::command_runner::CommandRunner;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_parse_convert_with_output() {
    let cli = Cli::try_parse_from(["pitch", "convert", "input.story", "-o", "out.jsonl"]).unwrap();

    assert!(!cli.raw);
    assert_eq!(
        cli.command,
        Commands::Convert {
            filepath: PathBuf::from("input.story"),
            output: Some(PathBuf::from("out.jsonl")),
        }
    );
}

#[test]
fn test_global_raw_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["pitch", "inspect", "train.jsonl", "--format", "jsonl", "--raw"]).unwrap();

    assert!(cli.raw);
    assert_eq!(
        cli.command,
        Commands::Inspect { filepath: PathBuf::from("train.jsonl"), format: Some(InputFormat::Jsonl) }
    );
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["pitch", "inspect", "x", "--format", "csv"]).is_err());
}

#[tokio::test]
async fn test_convert_command_writes_jsonl_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("chat.story");
    let output = dir.path().join("chat.jsonl");
    let config = dir.path().join("config.toml");
    fs::write(&input, "User: Hi\nAssistant: Hello!\n---\nUser: Bye").unwrap();
    fs::write(&config, "").unwrap();

    let cli = Cli::try_parse_from([
        "pitch",
        "--config",
        config.to_str().unwrap(),
        "convert",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let mut runner = CommandRunner::new(&cli);
    runner.run_command(cli.command).await.unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "{\"messages\":[{\"role\":\"user\",\"content\":\"Hi\"},{\"role\":\"assistant\",\"content\":\"Hello!\"}]}\n{\"messages\":[{\"role\":\"user\",\"content\":\"Bye\"}]}\n"
    );
}

#[tokio::test]
async fn test_init_then_validate_reports_missing_key_env() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("pitch").join("config.toml");
    let config_arg = config.to_str().unwrap();

    let init = Cli::try_parse_from(["pitch", "--config", config_arg, "init"]).unwrap();
    CommandRunner::new(&init).run_command(init.command).await.unwrap();

    // Point the key at a variable that is never set.
    let contents = fs::read_to_string(&config).unwrap()
        .replace("OPENAI_API_KEY", "PITCH_TEST_KEY_THAT_DOES_NOT_EXIST");
    fs::write(&config, contents).unwrap();

    let validate = Cli::try_parse_from(["pitch", "--config", config_arg, "validate"]).unwrap();
    let error = CommandRunner::new(&validate).run_command(validate.command).await.unwrap_err();

    assert!(error.user_message().contains("PITCH_TEST_KEY_THAT_DOES_NOT_EXIST is not set"));
}

const ORPHAN_ONLY: &str = "stray note\nanother stray note";

#[test]
fn test_orphan_warning_is_on_by_default() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();
    let config = ConfigManager::load(Some(&config_path)).unwrap();

    let training_file = TrainingFile::from_text("note\nUser: Hi", InputFormat::Story).unwrap();
    let warnings = training_file.warnings(config.convert.warn_on_orphan_content);

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("Ignored 1 line(s)"));
}

#[test]
fn test_orphan_warning_can_be_silenced_in_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[convert]\nwarn_on_orphan_content = false\n").unwrap();
    let config = ConfigManager::load(Some(&config_path)).unwrap();

    let training_file = TrainingFile::from_text("note\nUser: Hi", InputFormat::Story).unwrap();

    assert!(!config.convert.warn_on_orphan_content);
    assert!(training_file.warnings(config.convert.warn_on_orphan_content).is_empty());
}

#[test]
fn test_script_without_conversations_is_flagged() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.story");
    fs::write(&input, ORPHAN_ONLY).unwrap();

    let training_file = TrainingFile::load(&input, Some(InputFormat::Story)).unwrap();
    let warnings = training_file.warnings(false);

    assert_eq!(warnings, vec!["No conversations found in empty.story".to_string()]);
}

#[tokio::test]
async fn test_convert_command_with_no_conversations_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.story");
    let output = dir.path().join("empty.jsonl");
    let config = dir.path().join("config.toml");
    fs::write(&input, ORPHAN_ONLY).unwrap();
    fs::write(&config, "[convert]\nwarn_on_orphan_content = false\n").unwrap();

    let cli = Cli::try_parse_from([
        "pitch",
        "--config",
        config.to_str().unwrap(),
        "convert",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    CommandRunner::new(&cli).run_command(cli.command).await.unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}
