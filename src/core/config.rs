use std::env;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;


#[derive(Debug, Deserialize, Clone)]
pub struct CruduiConfig {
    pub console_url: String,
    pub console_port: u16,
    pub directory_url: String,
    pub log_level: String,
}


impl CruduiConfig {
    pub fn new_config() -> Result<Self, ConfigError> {
        let run_mode = env::var("CRUDUI_MODE").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .add_source(File::with_name("default.config.toml"))
            .add_source(File::with_name(&format!("{run_mode}.config.toml")))
            .add_source(Environment::default())
            .build()?;
        config.try_deserialize()
    }
}
