//! Convert dialogue scripts into fine-tuning JSONL.
//!
//! The core is [`services::script_converter::ScriptConverter`], which turns
//!
//! ```text
//! System: Be concise.
//! User: Hi
//! Assistant: Hello!
//! ---
//! User: Bye
//! ```
//!
//! into one `{"messages":[...]}` line per conversation.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod workers;
