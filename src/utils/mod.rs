mod config;
mod config_file;

pub use config::Config;
pub use config_file::{generate_config, parse_config, read_config, write_config};
