use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use fridgeplan_ingredient::DEFAULT_EXPIRING_WINDOW_DAYS;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub user: UserConfig,
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
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Ingredients expiring within this many days are listed on the dashboard.
    #[serde(default = "default_expiring_window_days")]
    pub expiring_window_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: default_expiring_window_days(),
        }
    }
}

fn default_expiring_window_days() -> i64 {
    DEFAULT_EXPIRING_WINDOW_DAYS
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON snapshot to read. The demo data is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    #[serde(default = "default_user_id")]
    pub id: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: default_user_id(),
        }
    }
}

fn default_user_id() -> String {
    "demo".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FRIDGEPLAN__DASHBOARD__EXPIRING_WINDOW_DAYS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?
            .set_default(
                "dashboard.expiring_window_days",
                default_expiring_window_days(),
            )?
            .set_default("user.id", default_user_id())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FRIDGEPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.dashboard.expiring_window_days < 0 {
            return Err("Dashboard expiring_window_days must not be negative".to_string());
        }
        if self.user.id.trim().is_empty() {
            return Err("User id must not be empty".to_string());
        }
        Ok(())
    }
}
