pub mod jsonl_reader;
pub mod output_formatter;
pub mod record_inspector;
pub mod script_converter;
pub mod training_file;
