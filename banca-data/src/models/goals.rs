use super::{Currency, GoalId, Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub title: String,
    pub category: String,
    pub current: Money,
    pub target: Money,
    pub currency: Currency,
    /// Scheduled monthly contribution in whole units
    pub monthly_contribution: i64,
}

impl SavingsGoal {
    /// Completion in whole percent, capped at 100
    pub fn progress_percent(&self) -> u16 {
        if self.target.cents() <= 0 {
            return 100;
        }
        let ratio = self.current.cents().max(0) * 100 / self.target.cents();
        ratio.min(100) as u16
    }
}

/// Categories offered when creating a new goal
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    #[default]
    Viajes,
    Educacion,
    Hogar,
    Vehiculo,
    Tecnologia,
    Otros,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 6] = [
        GoalCategory::Viajes,
        GoalCategory::Educacion,
        GoalCategory::Hogar,
        GoalCategory::Vehiculo,
        GoalCategory::Tecnologia,
        GoalCategory::Otros,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Viajes => "Viajes",
            GoalCategory::Educacion => "Educación",
            GoalCategory::Hogar => "Hogar",
            GoalCategory::Vehiculo => "Vehículo",
            GoalCategory::Tecnologia => "Tecnología",
            GoalCategory::Otros => "Otros",
        }
    }
}
