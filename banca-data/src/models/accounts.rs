use super::{AccountId, Currency, Money};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// Masked account or card number, e.g. `191-****4567-0-12`
    pub number: String,
    /// Available balance, or the available credit line for cards
    pub balance: Money,
    pub currency: Currency,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Statement data, present only on credit cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_line: Option<CreditLine>,
}

impl Account {
    pub fn is_credit(&self) -> bool {
        self.account_type == AccountType::CreditCard
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    #[default]
    Savings,
    Checking,
    CreditCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditLine {
    pub brand: String,
    pub monthly_payment: Money,
    pub minimum_payment: Money,
    pub total_debt: Money,
}
