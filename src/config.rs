use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealweek_shared::Day;
use serde::{Deserialize, Deserializer};
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    /// Day selected when a session starts
    #[serde(default, deserialize_with = "day_from_str")]
    pub start_day: Day,
}

fn day_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Day, D::Error> {
    let value = String::deserialize(deserializer)?;
    Day::parse(&value).map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    /// Label shown for a slot without a meal
    #[serde(default = "default_empty_label")]
    pub empty_label: String,
    /// Shown instead of the grocery list when no meal has ingredients
    #[serde(default = "default_empty_list_message")]
    pub empty_list_message: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            empty_label: default_empty_label(),
            empty_list_message: default_empty_list_message(),
        }
    }
}

fn default_empty_label() -> String {
    "Empty".to_string()
}

fn default_empty_list_message() -> String {
    "No ingredients yet. Add some meals and generate the list.".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWEEK__SESSION__START_DAY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?
            .set_default("session.start_day", Day::default().to_string())?
            .set_default("render.empty_label", default_empty_label())?
            .set_default("render.empty_list_message", default_empty_list_message())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWEEK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.render.empty_label.trim().is_empty() {
            return Err("Render empty_label must not be blank".to_string());
        }
        if self.render.empty_list_message.trim().is_empty() {
            return Err("Render empty_list_message must not be blank".to_string());
        }
        if tracing_subscriber::EnvFilter::try_new(&self.observability.log_level).is_err() {
            return Err(format!(
                "Invalid log level '{}'",
                self.observability.log_level
            ));
        }
        Ok(())
    }
}
