/// Storefront configuration
use crate::error::{AppError, Result};
use learn2code_client::{ApiConfig, DEFAULT_API_BASE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "learn2code.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_checkout")]
    pub checkout: CheckoutSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Holds `session.json` and `cart.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutSettings {
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        // Override with environment variables (LEARN2CODE_API__BASE_URL, ...)
        let env = config::Environment::with_prefix("LEARN2CODE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::load_with_env(config_path, env)
    }

    fn load_with_env(config_path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match config_path {
            // An explicit path must exist
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        let config = settings.add_source(env).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.checkout.tax_rate.is_sign_negative() {
            return Err(AppError::Config(format!(
                "checkout.tax_rate must not be negative (got {})",
                self.checkout.tax_rate
            )));
        }

        if self.checkout.currency.trim().is_empty() {
            return Err(AppError::Config(
                "checkout.currency is required (set LEARN2CODE_CHECKOUT__CURRENCY)".to_string(),
            ));
        }

        Ok(())
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api.base_url.clone())
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./.learn2code")
}

fn default_checkout() -> CheckoutSettings {
    CheckoutSettings {
        tax_rate: default_tax_rate(),
        currency: default_currency(),
    }
}

fn default_tax_rate() -> Decimal {
    Decimal::new(13, 2)
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: default_storage(),
            checkout: default_checkout(),
        }
    }
}
