use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User configuration: the monthly spending limit, the motivational
/// copy shown on the warning tiers, the expense categories, and the
/// reminder preference.
///
/// Unknown keys found in a persisted document are carried in `extra`
/// so they survive a load/save round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Spending limit per calendar month. Zero means no limit is
    /// configured and budget health reports `Unconfigured`.
    pub monthly_limit: f64,
    pub motivation: MotivationMessages,
    /// Expense categories in display order. Never empty: deleting the
    /// last remaining entry is rejected.
    pub categories: Vec<String>,
    pub notification: NotificationPrefs,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_limit: 0.0,
            motivation: MotivationMessages::default(),
            categories: default_categories(),
            notification: NotificationPrefs::default(),
            extra: Map::new(),
        }
    }
}

/// Messages surfaced alongside the warning and danger budget tiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotivationMessages {
    pub warning: String,
    pub danger: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for MotivationMessages {
    fn default() -> Self {
        Self {
            warning: "Careful, you are spending a lot!".to_string(),
            danger: "Stop! You are over budget!".to_string(),
            extra: Map::new(),
        }
    }
}

/// Daily reminder preference. The time is kept as the raw `HH:MM`
/// string the user entered; scheduling happens outside the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationPrefs {
    pub enabled: bool,
    pub time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            enabled: false,
            time: "09:00".to_string(),
            extra: Map::new(),
        }
    }
}

pub fn default_categories() -> Vec<String> {
    [
        "Food",
        "Transport",
        "Bills",
        "Housing",
        "Entertainment",
        "Shopping",
        "Other",
    ]
    .iter()
    .map(|name| (*name).to_string())
    .collect()
}
