use std::path::PathBuf;

use banca_data::models::pricing::ExchangeRates;
use banca_data::{Catalog, CatalogError};
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

use crate::state::ScreenId;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid setting: {0}")]
    Invalid(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Kebab-case name of the first screen shown
    #[serde(default = "default_start_screen")]
    pub start_screen: String,

    /// JSON catalog replacing the built-in data
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Overrides the catalog's exchange quote
    #[serde(default)]
    pub exchange: Option<ExchangeRates>,

    /// Overrides the loan offer's effective annual rate
    #[serde(default)]
    pub loan_rate: Option<f64>,

    #[serde(default = "default_log_buffer_size")]
    pub log_buffer_size: usize,
}

fn default_start_screen() -> String {
    "login".to_string()
}

fn default_log_buffer_size() -> usize {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_screen: default_start_screen(),
            catalog_path: None,
            exchange: None,
            loan_rate: None,
            log_buffer_size: default_log_buffer_size(),
        }
    }
}

impl Settings {
    /// Layer the optional config file with `BANCA__*` environment variables
    pub fn new() -> Result<Self, SettingsError> {
        let config_path =
            std::env::var("BANCA_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("BANCA").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Settings from TOML text alone, without the environment
    pub fn from_toml(toml: &str) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(rates) = &self.exchange {
            if !rates.is_consistent() {
                return Err(SettingsError::Invalid(format!(
                    "exchange rates must be positive with buy <= sell, got buy {} sell {}",
                    rates.buy, rates.sell
                )));
            }
        }
        if let Some(rate) = self.loan_rate {
            if !(rate > 0.0 && rate < 1.0) {
                return Err(SettingsError::Invalid(format!(
                    "loan_rate must be between 0 and 1, got {}",
                    rate
                )));
            }
        }
        if self.log_buffer_size == 0 {
            return Err(SettingsError::Invalid(
                "log_buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// First screen; unknown names fall back to home
    pub fn start_screen(&self) -> ScreenId {
        ScreenId::resolve(&self.start_screen)
    }

    /// The configured catalog with rate overrides applied
    pub fn load_catalog(&self) -> Result<Catalog, SettingsError> {
        let mut catalog = match &self.catalog_path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Catalog::load(path)?
            }
            None => Catalog::builtin(),
        };

        if let Some(rates) = self.exchange {
            catalog = catalog.rates(rates);
        }
        if let Some(rate) = self.loan_rate {
            let mut offer = catalog.loan_offer;
            offer.annual_rate = rate;
            catalog = catalog.loan_offer(offer);
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.start_screen(), ScreenId::Login);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_unknown_start_screen_falls_back_to_home() {
        let settings = Settings::from_toml(r#"start_screen = "nowhere""#).unwrap();
        assert_eq!(settings.start_screen(), ScreenId::Home);
    }

    #[test]
    fn test_overrides_reach_the_catalog() {
        let settings = Settings::from_toml(
            r#"
            loan_rate = 0.2

            [exchange]
            buy = 3.70
            sell = 3.80
            "#,
        )
        .unwrap();
        settings.validate().unwrap();

        let catalog = settings.load_catalog().unwrap();
        assert_eq!(catalog.rates.sell, 3.80);
        assert_eq!(catalog.loan_offer.annual_rate, 0.2);
    }

    #[test]
    fn test_validate_rejects_inverted_quote() {
        let settings = Settings {
            exchange: Some(ExchangeRates {
                buy: 3.9,
                sell: 3.7,
            }),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_loan_rate_out_of_range() {
        for rate in [0.0, 1.0, -0.1] {
            let settings = Settings {
                loan_rate: Some(rate),
                ..Settings::default()
            };
            assert!(settings.validate().is_err(), "rate {} accepted", rate);
        }
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let settings = Settings {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..Settings::default()
        };
        assert!(matches!(
            settings.load_catalog(),
            Err(SettingsError::Catalog(_))
        ));
    }

    #[test]
    fn test_catalog_file_with_inverted_rates_is_rejected() {
        let catalog = Catalog::builtin().rates(ExchangeRates {
            buy: 3.90,
            sell: 3.75,
        });
        let path = std::env::temp_dir().join(format!("banca-rates-{}.json", std::process::id()));
        std::fs::write(&path, catalog.to_json().unwrap()).unwrap();

        let settings = Settings {
            catalog_path: Some(path.clone()),
            ..Settings::default()
        };
        let result = settings.load_catalog();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(SettingsError::Catalog(CatalogError::InvalidRates { .. }))
        ));
    }
}
