//! Application configuration management.
//!
//! Every value is read from the environment once at startup through
//! [`init_config`] and kept in [`APP_CONFIG`]. Handlers and services read it
//! with `APP_CONFIG.get()`.

use anyhow::Context;
use envconfig::Envconfig;
use std::sync::OnceLock;

use crate::api::invoice::TaxRule;

/// Application configuration loaded from environment variables.
#[derive(Envconfig, Clone, Debug)]
pub struct AppConfig {
    /// Environment name to deploy the app
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding
    /// Example: "0.0.0.0", "localhost"
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding
    #[envconfig(default = "8080")]
    pub web_server_port: u16,

    /// Path to SSL private key file, only read in prod
    #[envconfig(default = "server.key")]
    pub private_key_path: String,

    /// Path to SSL certificate file, only read in prod
    #[envconfig(default = "server.crt")]
    pub certificate_path: String,

    /// Base url of the external pets REST api
    /// Example: "http://localhost:5000/api"
    #[envconfig(default = "http://localhost:5000/api")]
    pub pets_api_base_url: String,

    /// Request timeout in seconds for the pets api. No timeout when unset
    pub pets_api_timeout_secs: Option<u64>,

    /// Tax rule applied to new invoices
    /// Values: "unconditional", "final_consumer_threshold"
    #[envconfig(default = "unconditional")]
    pub invoice_tax_rule: TaxRule,

    /// Refresh period of the IoT simulator
    #[envconfig(default = "3000")]
    pub iot_refresh_millis: u64,

    /// 🔒 SENSITIVE: logfire write token. Telemetry is disabled when unset
    pub logfire_token: Option<String>,

    /// Values: "error", "warn", "info", "debug", "trace"
    #[envconfig(default = "info")]
    pub log_level: String,

    /// Dashboard origin allowed by CORS
    #[envconfig(default = "http://localhost:3000")]
    pub allowed_origin: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Endpoint of the pets resource in the external api
    pub fn pets_endpoint(&self) -> String {
        format!("{}/pets", self.pets_api_base_url.trim_end_matches('/'))
    }

    pub fn iot_refresh_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.iot_refresh_millis)
    }
}

/// Global application configuration instance, set by [`init_config`]
pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loads the configuration from the environment into [`APP_CONFIG`].
pub fn init_config() -> anyhow::Result<&'static AppConfig> {
    let app_config = AppConfig::init_from_env()
        .context("failed to load app config. check the environment variables")?;

    Ok(APP_CONFIG.get_or_init(|| app_config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::init_from_hashmap(&HashMap::new()).unwrap();

        assert_eq!(config.env, "local");
        assert_eq!(config.web_server_port, 8080);
        assert_eq!(config.invoice_tax_rule, TaxRule::Unconditional);
        assert!(config.pets_api_timeout_secs.is_none());
        assert!(config.logfire_token.is_none());
        assert!(!config.is_prod());
    }

    #[test]
    fn test_config_from_values() {
        let values = HashMap::from([
            ("ENV".to_string(), "PROD".to_string()),
            (
                "PETS_API_BASE_URL".to_string(),
                "https://vet.example/api/".to_string(),
            ),
            (
                "INVOICE_TAX_RULE".to_string(),
                "final_consumer_threshold".to_string(),
            ),
        ]);
        let config = AppConfig::init_from_hashmap(&values).unwrap();

        assert!(config.is_prod());
        assert_eq!(config.pets_endpoint(), "https://vet.example/api/pets");
        assert_eq!(config.invoice_tax_rule, TaxRule::FinalConsumerThreshold);
    }
}
