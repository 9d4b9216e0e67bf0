mod combine;
mod parse;

pub use combine::cmd_combine;
pub use parse::{cmd_parse_history, cmd_parse_list, cmd_parse_xml};
