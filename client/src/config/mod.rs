mod config;

pub use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
