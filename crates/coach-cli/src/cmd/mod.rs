pub mod check_phrases;
pub mod config_line;
pub mod serve;
