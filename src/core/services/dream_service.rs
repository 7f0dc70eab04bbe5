use chrono::NaiveDate;

use crate::domain::Dream;
use crate::errors::BudgetError;

pub struct DreamService;

impl DreamService {
    /// Replaces the goal wholesale; there is no partial-field update.
    /// All checks run before any field is written, so a rejected call
    /// leaves the previous goal intact.
    pub fn set(
        dream: &mut Dream,
        title: &str,
        target_amount: f64,
        target_date: NaiveDate,
    ) -> Result<(), BudgetError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BudgetError::Validation("dream title is required".into()));
        }
        if !(target_amount.is_finite() && target_amount > 0.0) {
            return Err(BudgetError::Validation(
                "dream target must be a number greater than zero".into(),
            ));
        }
        dream.title = title.to_string();
        dream.target_amount = target_amount;
        dream.target_date = target_date;
        Ok(())
    }
}
