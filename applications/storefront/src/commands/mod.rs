//! Storefront commands
//!
//! Each command returns the text to print so the binary decides where it goes
//! and tests can assert on it.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod students;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::store::LocalStore;
use learn2code_client::ApiClient;
use learn2code_core::AuthIdentity;
use rust_decimal::{Decimal, RoundingStrategy};

/// Everything a command needs: settings, the API client and local state.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: AppConfig,
    pub client: ApiClient,
    pub store: LocalStore,
}

impl Storefront {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = ApiClient::new(config.api_config())?;
        let store = LocalStore::new(config.storage.data_dir.clone());
        Ok(Self {
            config,
            client,
            store,
        })
    }

    /// The stored session, or [`AppError::NotSignedIn`].
    pub async fn require_session(&self) -> Result<AuthIdentity> {
        self.store
            .load_session()
            .await?
            .ok_or(AppError::NotSignedIn)
    }

    pub(crate) fn money(&self, amount: Decimal) -> String {
        format_money(&self.config.checkout.currency, amount)
    }
}

/// `USD 39.99`
pub(crate) fn format_money(currency: &str, amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{} {:.2}", currency, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_is_rounded_to_cents() {
        assert_eq!(format_money("USD", "39.99".parse().unwrap()), "USD 39.99");
        assert_eq!(format_money("USD", "20".parse().unwrap()), "USD 20.00");
        assert_eq!(format_money("CAD", "10.005".parse().unwrap()), "CAD 10.01");
    }
}
