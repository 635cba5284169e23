pub mod api_credentials;
pub mod cli;
pub mod config;
pub mod conversation_record;
pub mod conversion_report;
pub mod inspection;
pub mod message;
