use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub time: String,
    /// Grouped under "HOY" instead of "ANTERIORES"
    #[serde(default)]
    pub today: bool,
    #[serde(default)]
    pub unread: bool,
}

/// A partner benefit shown on the "Para ti" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub title: String,
    pub detail: String,
    pub badge: String,
}
