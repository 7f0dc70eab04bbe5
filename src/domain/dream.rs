use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title shown until the user names their own goal.
pub const PLACEHOLDER_TITLE: &str = "Name your dream";

/// A savings goal: a title, a target amount, and a target date. Replaced
/// wholesale by the "set dream" operation; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dream {
    pub title: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dream {
    /// The default goal for a fresh document: placeholder title, zero
    /// target, dated today.
    pub fn placeholder(today: NaiveDate) -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            target_amount: 0.0,
            target_date: today,
            extra: Map::new(),
        }
    }

    /// Percentage of the target covered by `balance`, clamped to
    /// `0..=100`. A balance past the target reads as 100, a negative
    /// balance as 0, and a zero target always reports 0.
    pub fn progress_percent(&self, balance: f64) -> f64 {
        progress_percent(balance, self.target_amount)
    }
}

pub fn progress_percent(balance: f64, target_amount: f64) -> f64 {
    if target_amount > 0.0 {
        ((balance / target_amount) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
