pub mod api_config;
pub mod config;
pub mod convert_config;
pub mod output_config;
pub mod poll_config;
