use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub kind: BranchKind,
    pub address: String,
    pub distance: String,
    pub open: bool,
    /// "Cierra 6:00 PM", "Mantenimiento", ...
    pub note: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchKind {
    Agency,
    Atm,
}

impl BranchKind {
    pub fn label(&self) -> &'static str {
        match self {
            BranchKind::Agency => "Agencia",
            BranchKind::Atm => "ATM",
        }
    }
}
