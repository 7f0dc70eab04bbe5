use crate::domain::Settings;
use crate::errors::BudgetError;

/// Result of an add that did not fail: a new entry, or a silent no-op
/// for blank input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddCategoryOutcome {
    Added,
    EmptyInput,
}

pub struct CategoryService;

impl CategoryService {
    /// Trims the name first. Duplicates are matched exactly,
    /// case-sensitive.
    pub fn add(settings: &mut Settings, name: &str) -> Result<AddCategoryOutcome, BudgetError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(AddCategoryOutcome::EmptyInput);
        }
        if settings.categories.iter().any(|existing| existing == name) {
            return Err(BudgetError::DuplicateCategory(name.to_string()));
        }
        settings.categories.push(name.to_string());
        Ok(AddCategoryOutcome::Added)
    }

    /// Removes the category at `index` and returns its name. The list
    /// never shrinks below one entry.
    pub fn delete(settings: &mut Settings, index: usize) -> Result<String, BudgetError> {
        if index >= settings.categories.len() {
            return Err(BudgetError::Validation(format!(
                "no category at index {index}"
            )));
        }
        if settings.categories.len() <= 1 {
            return Err(BudgetError::LastCategory);
        }
        Ok(settings.categories.remove(index))
    }
}
