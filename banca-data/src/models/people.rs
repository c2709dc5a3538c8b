use super::ContactId;
use serde::{Deserialize, Serialize};

/// A saved transfer recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub bank: String,
    /// Masked destination account, e.g. `*4521`
    pub account: String,
    #[serde(default)]
    pub favorite: bool,
}

impl Contact {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub short_name: String,
    pub email: String,
    pub phone: String,
    pub tier: String,
    pub points: u32,
}
