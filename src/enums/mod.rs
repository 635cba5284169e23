pub mod commands;
pub mod input_format;
pub mod line_kind;
pub mod parser_state;
pub mod role;
