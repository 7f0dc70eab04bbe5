use serde::{Deserialize, Serialize};

/// Tier classification for budget health within the active window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No limit configured; nothing to evaluate against.
    Unconfigured,
    Safe,
    Warning,
    Danger,
}

/// Remaining budget and its tier, derived from a limit and the spend
/// inside the active window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetEvaluation {
    pub limit: f64,
    pub spent: f64,
    /// May go negative once spending passes the limit.
    pub remaining: f64,
    /// Share of the limit still unspent; `None` when unconfigured.
    pub remaining_percent: Option<f64>,
    pub status: BudgetStatus,
}

impl BudgetEvaluation {
    /// A missing or non-finite limit is treated as 0, which reads as
    /// "no limit configured". The tier thresholds are fixed: more than
    /// 40% remaining is safe, more than 10% is a warning, anything at
    /// or below 10% is danger.
    pub fn from_parts(limit: f64, spent: f64) -> Self {
        let limit = if limit.is_finite() { limit } else { 0.0 };
        let remaining = limit - spent;
        if limit <= 0.0 {
            return Self {
                limit,
                spent,
                remaining,
                remaining_percent: None,
                status: BudgetStatus::Unconfigured,
            };
        }
        let percent = (remaining / limit) * 100.0;
        let status = if percent > 40.0 {
            BudgetStatus::Safe
        } else if percent > 10.0 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Danger
        };
        Self {
            limit,
            spent,
            remaining,
            remaining_percent: Some(percent),
            status,
        }
    }
}
