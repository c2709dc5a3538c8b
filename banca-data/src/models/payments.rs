use super::{BillerId, MerchantId, Money};
use serde::{Deserialize, Serialize};

/// A utility or service company that accepts bill payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biller {
    pub id: BillerId,
    pub name: String,
    /// Label of the saved favorite, e.g. "Casa Playa"
    pub detail: String,
    pub category: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub bills: Vec<Bill>,
}

/// A pending receipt for a biller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub period: String,
    pub due: String,
    pub amount: Money,
    #[serde(default)]
    pub overdue: bool,
}

/// A QR payee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: MerchantId,
    pub name: String,
    pub code: String,
    /// Amount pre-filled when the QR code carries one
    pub suggested_amount: Money,
}
