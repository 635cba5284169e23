mod cli_tests;
mod config_tests;
