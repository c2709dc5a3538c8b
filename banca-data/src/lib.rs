mod error;
mod macros;
pub mod models;
mod seed;

pub use crate::error::CatalogError;

use chrono::NaiveDate;
use macros::setter;
use models::{
    AccountId, BillerId, ContactId, MerchantId,
    accounts::Account,
    feed::{Notification, Offer},
    goals::SavingsGoal,
    payments::{Biller, Merchant},
    people::{Contact, UserProfile},
    places::Branch,
    pricing::{ExchangeRates, LoanOffer},
    transactions::Transaction,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reference data served to the app.
///
/// Stands in for the account, rates and transaction-history services: the
/// built-in catalog is compiled into the binary, and a JSON catalog with the
/// same shape can replace it at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Date the data is current as of; "today" for relative date labels
    pub as_of: NaiveDate,
    pub profile: UserProfile,
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub service_categories: Vec<String>,
    #[serde(default)]
    pub billers: Vec<Biller>,
    #[serde(default)]
    pub merchants: Vec<Merchant>,
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub rates: ExchangeRates,
    #[serde(default)]
    pub loan_offer: LoanOffer,
}

impl Catalog {
    /// The compiled-in prototype data
    pub fn builtin() -> Self {
        seed::builtin()
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.accounts.is_empty() {
            return Err(CatalogError::Empty);
        }
        if !self.rates.is_consistent() {
            return Err(CatalogError::InvalidRates {
                buy: self.rates.buy,
                sell: self.rates.sell,
            });
        }
        Ok(())
    }

    setter!(as_of: NaiveDate);
    setter!(profile: UserProfile);
    setter!(accounts: Vec<Account>);
    setter!(contacts: Vec<Contact>);
    setter!(transactions: Vec<Transaction>);
    setter!(goals: Vec<SavingsGoal>);
    setter!(billers: Vec<Biller>);
    setter!(merchants: Vec<Merchant>);
    setter!(rates: ExchangeRates);
    setter!(loan_offer: LoanOffer);

    /// The account selected when the app starts
    ///
    /// Falls back to an empty placeholder only for catalogs that skipped
    /// validation.
    pub fn default_account(&self) -> Account {
        self.accounts.first().cloned().unwrap_or_default()
    }

    pub fn account(&self, id: &AccountId) -> Result<&Account, CatalogError> {
        self.accounts
            .iter()
            .find(|a| &a.id == id)
            .ok_or_else(|| CatalogError::not_found("account", id.as_str()))
    }

    pub fn contact(&self, id: &ContactId) -> Result<&Contact, CatalogError> {
        self.contacts
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| CatalogError::not_found("contact", id.as_str()))
    }

    pub fn biller(&self, id: &BillerId) -> Result<&Biller, CatalogError> {
        self.billers
            .iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| CatalogError::not_found("biller", id.as_str()))
    }

    pub fn merchant(&self, id: &MerchantId) -> Result<&Merchant, CatalogError> {
        self.merchants
            .iter()
            .find(|m| &m.id == id)
            .ok_or_else(|| CatalogError::not_found("merchant", id.as_str()))
    }

    pub fn credit_cards(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(|a| a.is_credit())
    }

    pub fn deposit_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(|a| !a.is_credit())
    }

    pub fn favorite_contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter().filter(|c| c.favorite)
    }

    pub fn favorite_billers(&self) -> impl Iterator<Item = &Biller> {
        self.billers.iter().filter(|b| b.favorite)
    }

    /// Most recent transactions first
    pub fn recent_transactions(&self, limit: usize) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.transactions.iter().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions.truncate(limit);
        transactions
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Money, accounts::AccountType};

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.default_account().name, "Cuenta Simple Soles");
        assert_eq!(catalog.default_account().balance, Money::from_cents(1_245_000));
    }

    #[test]
    fn test_builtin_has_credit_card_with_statement() {
        let catalog = Catalog::builtin();
        let card = catalog.credit_cards().next().expect("a credit card");
        assert_eq!(card.account_type, AccountType::CreditCard);
        let line = card.credit_line.as_ref().expect("credit line");
        assert_eq!(line.monthly_payment, Money::from_cents(45_000));
        assert!(catalog.deposit_accounts().all(|a| !a.is_credit()));
    }

    #[test]
    fn test_account_lookup() {
        let catalog = Catalog::builtin();
        let account = catalog.account(&"2".into()).unwrap();
        assert_eq!(account.currency, Currency::Usd);

        let missing = catalog.account(&"99".into());
        assert!(matches!(
            missing,
            Err(CatalogError::NotFound { kind: "account", .. })
        ));
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let catalog = Catalog::builtin();
        let recent = catalog.recent_transactions(3);
        assert_eq!(recent.len(), 3);
        assert!(recent[0].date >= recent[1].date);
        assert!(recent[1].date >= recent[2].date);
        assert_eq!(recent[0].title, "Sueldo Mayo");
    }

    #[test]
    fn test_json_catalog_round_trip() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        let loaded = Catalog::from_json(&json).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_json_catalog_defaults_optional_sections() {
        let json = r#"{
            "as_of": "2024-05-24",
            "profile": {
                "full_name": "Ana Torres",
                "short_name": "Ana T.",
                "email": "ana@email.com",
                "phone": "+51 900 000 000",
                "tier": "Nivel Plata",
                "points": 10
            },
            "accounts": [{
                "id": "a",
                "name": "Cuenta Soles",
                "number": "191-****0001-0-10",
                "balance": 100000,
                "currency": "PEN",
                "type": "checking"
            }]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.accounts.len(), 1);
        assert!(catalog.contacts.is_empty());
        assert_eq!(catalog.rates.buy, 3.72);
        assert_eq!(catalog.rates.sell, 3.75);
        assert_eq!(catalog.accounts[0].balance, Money::from_units(1_000));
    }

    #[test]
    fn test_json_catalog_without_accounts_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.accounts.clear();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(matches!(Catalog::from_json(&json), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_json_catalog_with_inverted_rates_is_rejected() {
        let catalog = Catalog::builtin().rates(ExchangeRates {
            buy: 3.80,
            sell: 3.75,
        });
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::InvalidRates { .. })
        ));

        let zero = Catalog::builtin().rates(ExchangeRates { buy: 0.0, sell: 3.75 });
        assert!(matches!(zero.validate(), Err(CatalogError::InvalidRates { .. })));
    }

    #[test]
    fn test_setters_override_sections() {
        let catalog = Catalog::builtin().rates(ExchangeRates {
            buy: 3.70,
            sell: 3.80,
        });
        assert_eq!(catalog.rates.sell, 3.80);
    }

    #[test]
    fn test_goal_progress() {
        let catalog = Catalog::builtin();
        let percents: Vec<u16> = catalog.goals.iter().map(|g| g.progress_percent()).collect();
        assert_eq!(percents, vec![80, 33, 33, 5]);
    }

    #[test]
    fn test_contact_initials() {
        let catalog = Catalog::builtin();
        let contact = catalog.contact(&"c2".into()).unwrap();
        assert_eq!(contact.initials(), "ML");
    }
}
