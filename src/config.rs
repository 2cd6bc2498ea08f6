use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use folio_contact::DeliveryConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (SMTP_PASSWORD, etc.)
    /// 2. Environment variables (FOLIO__DELIVERY__RECIPIENT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, env::vars().collect())
    }

    /// Same as [`Config::load`], reading variables from `vars` instead of the
    /// process environment.
    pub fn load_with_env(
        config_path: Option<String>,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        for (var, key) in [
            ("CONTACT_RECIPIENT", "delivery.recipient"),
            ("CONTACT_SENDER", "delivery.sender"),
            ("SMTP_HOST", "delivery.smtp_host"),
            ("SMTP_USERNAME", "delivery.smtp_username"),
            ("SMTP_PASSWORD", "delivery.smtp_password"),
        ] {
            if let Some(value) = vars.get(var) {
                builder = builder.set_override(key, value.as_str())?;
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars)),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Missing delivery settings are not an error here, they are reported
    /// on every contact submission instead.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.delivery.timeout_ms == 0 {
            return Err("Delivery timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}
