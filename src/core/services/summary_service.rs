use serde::Serialize;

use crate::domain::{
    AppState, BudgetEvaluation, BudgetStatus, Dream, TimeFilter, Transaction, TransactionKind,
    WindowBounds,
};

/// How many entries the dashboard's recent list shows.
pub const RECENT_LIMIT: usize = 5;

/// Income and expense sums for a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TypeTotals {
    pub income: f64,
    pub expense: f64,
}

/// Summed expense amount for one category within a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub total: f64,
}

/// Everything the main screen needs, derived in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub balance: f64,
    pub dream: Dream,
    pub goal_progress_percent: f64,
    /// Budget health for the current calendar month.
    pub budget: BudgetEvaluation,
    /// The configured message for the warning and danger tiers, absent
    /// otherwise.
    pub motivation: Option<String>,
    pub recent: Vec<Transaction>,
}

/// Window-filtered transaction list, newest first, with its totals.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub filter: TimeFilter,
    pub totals: TypeTotals,
    pub entries: Vec<Transaction>,
}

/// Budget usage and per-category expense breakdown for one window.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub filter: TimeFilter,
    pub budget: BudgetEvaluation,
    pub by_category: Vec<CategorySpend>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals_by_type(
        transactions: &[Transaction],
        bounds: &WindowBounds,
        filter: TimeFilter,
    ) -> TypeTotals {
        let mut totals = TypeTotals::default();
        for txn in transactions
            .iter()
            .filter(|txn| bounds.contains(filter, txn.date))
        {
            match txn.kind {
                TransactionKind::Income => totals.income += txn.amount,
                TransactionKind::Expense => totals.expense += txn.amount,
            }
        }
        totals
    }

    /// Expense totals per category, in the order each category is first
    /// seen. Categories without spend inside the window are absent
    /// rather than zero-valued, so chart consumers get no empty slices.
    pub fn spending_by_category(
        transactions: &[Transaction],
        bounds: &WindowBounds,
        filter: TimeFilter,
    ) -> Vec<CategorySpend> {
        let mut spending: Vec<CategorySpend> = Vec::new();
        for txn in transactions {
            if !txn.is_expense() || !bounds.contains(filter, txn.date) {
                continue;
            }
            match spending
                .iter_mut()
                .find(|entry| entry.category == txn.category)
            {
                Some(entry) => entry.total += txn.amount,
                None => spending.push(CategorySpend {
                    category: txn.category.clone(),
                    total: txn.amount,
                }),
            }
        }
        spending
    }

    /// Newest first. The sort is stable, so same-date entries keep
    /// their insertion order.
    pub fn sorted_by_date_descending(transactions: &[Transaction]) -> Vec<Transaction> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn dashboard(state: &AppState, bounds: &WindowBounds) -> DashboardView {
        let spent = Self::totals_by_type(&state.transactions, bounds, TimeFilter::Month).expense;
        let budget = BudgetEvaluation::from_parts(state.settings.monthly_limit, spent);
        let motivation = match budget.status {
            BudgetStatus::Warning => Some(state.settings.motivation.warning.clone()),
            BudgetStatus::Danger => Some(state.settings.motivation.danger.clone()),
            BudgetStatus::Safe | BudgetStatus::Unconfigured => None,
        };
        let mut recent = Self::sorted_by_date_descending(&state.transactions);
        recent.truncate(RECENT_LIMIT);
        DashboardView {
            balance: state.balance,
            dream: state.dream.clone(),
            goal_progress_percent: state.dream.progress_percent(state.balance),
            budget,
            motivation,
            recent,
        }
    }

    pub fn history(state: &AppState, bounds: &WindowBounds, filter: TimeFilter) -> HistoryView {
        let filtered: Vec<Transaction> = state
            .transactions
            .iter()
            .filter(|txn| bounds.contains(filter, txn.date))
            .cloned()
            .collect();
        let totals = Self::totals_by_type(&filtered, bounds, TimeFilter::All);
        HistoryView {
            filter,
            totals,
            entries: Self::sorted_by_date_descending(&filtered),
        }
    }

    /// The monthly limit applies to whichever window is selected; only
    /// the spend side narrows with the filter.
    pub fn analysis(state: &AppState, bounds: &WindowBounds, filter: TimeFilter) -> AnalysisView {
        let spent = Self::totals_by_type(&state.transactions, bounds, filter).expense;
        AnalysisView {
            filter,
            budget: BudgetEvaluation::from_parts(state.settings.monthly_limit, spent),
            by_category: Self::spending_by_category(&state.transactions, bounds, filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: &str, kind: TransactionKind, amount: f64, category: &str, d: NaiveDate) -> Transaction {
        Transaction {
            id: id.into(),
            kind,
            amount,
            category: category.into(),
            note: String::new(),
            date: d,
        }
    }

    fn march_state() -> AppState {
        let mut state = AppState::bootstrap(date(2024, 3, 15));
        state.apply(txn("a", TransactionKind::Income, 1000.0, "Salary", date(2024, 3, 1)));
        state.apply(txn("b", TransactionKind::Expense, 120.0, "Food", date(2024, 3, 11)));
        state.apply(txn("c", TransactionKind::Expense, 80.0, "Transport", date(2024, 3, 14)));
        state.apply(txn("d", TransactionKind::Expense, 60.0, "Food", date(2024, 3, 14)));
        state.apply(txn("e", TransactionKind::Expense, 40.0, "Food", date(2023, 12, 30)));
        state
    }

    #[test]
    fn totals_split_by_kind_inside_the_window() {
        let state = march_state();
        let bounds = WindowBounds::at(date(2024, 3, 15));
        let month = SummaryService::totals_by_type(&state.transactions, &bounds, TimeFilter::Month);
        assert_eq!(month.income, 1000.0);
        assert_eq!(month.expense, 260.0);
        let all = SummaryService::totals_by_type(&state.transactions, &bounds, TimeFilter::All);
        assert_eq!(all.expense, 300.0);
    }

    #[test]
    fn category_spend_keeps_first_encounter_order_and_omits_income() {
        let state = march_state();
        let bounds = WindowBounds::at(date(2024, 3, 15));
        let spend =
            SummaryService::spending_by_category(&state.transactions, &bounds, TimeFilter::Month);
        assert_eq!(spend.len(), 2);
        assert_eq!(spend[0].category, "Food");
        assert_eq!(spend[0].total, 180.0);
        assert_eq!(spend[1].category, "Transport");
        assert_eq!(spend[1].total, 80.0);
    }

    #[test]
    fn categories_without_spend_in_window_are_absent() {
        let state = march_state();
        let bounds = WindowBounds::at(date(2024, 3, 15));
        let spend =
            SummaryService::spending_by_category(&state.transactions, &bounds, TimeFilter::Today);
        assert!(spend.is_empty());
    }

    #[test]
    fn sort_is_newest_first_with_stable_ties() {
        let state = march_state();
        let sorted = SummaryService::sorted_by_date_descending(&state.transactions);
        let ids: Vec<&str> = sorted.iter().map(|txn| txn.id.as_str()).collect();
        // "c" and "d" share 2024-03-14 and keep their insertion order.
        assert_eq!(ids, ["c", "d", "b", "a", "e"]);
    }

    #[test]
    fn dashboard_surfaces_motivation_only_on_warning_tiers() {
        let mut state = march_state();
        let bounds = WindowBounds::at(date(2024, 3, 15));

        state.settings.monthly_limit = 1000.0; // 260 spent -> safe
        assert_eq!(SummaryService::dashboard(&state, &bounds).motivation, None);

        state.settings.monthly_limit = 300.0; // ~13% remaining -> warning
        let view = SummaryService::dashboard(&state, &bounds);
        assert_eq!(view.budget.status, BudgetStatus::Warning);
        assert_eq!(
            view.motivation.as_deref(),
            Some(state.settings.motivation.warning.as_str())
        );

        state.settings.monthly_limit = 270.0; // <10% remaining -> danger
        let view = SummaryService::dashboard(&state, &bounds);
        assert_eq!(view.budget.status, BudgetStatus::Danger);
        assert_eq!(
            view.motivation.as_deref(),
            Some(state.settings.motivation.danger.as_str())
        );
    }

    #[test]
    fn dashboard_recent_list_is_capped() {
        let mut state = march_state();
        for day in 1..=9 {
            state.apply(txn(
                &format!("x{day}"),
                TransactionKind::Expense,
                1.0,
                "Food",
                date(2024, 2, day),
            ));
        }
        let bounds = WindowBounds::at(date(2024, 3, 15));
        let view = SummaryService::dashboard(&state, &bounds);
        assert_eq!(view.recent.len(), RECENT_LIMIT);
        assert_eq!(view.recent[0].id, "c");
    }

    #[test]
    fn history_filters_then_totals_the_same_window() {
        let state = march_state();
        let bounds = WindowBounds::at(date(2024, 3, 15));
        let week = SummaryService::history(&state, &bounds, TimeFilter::Week);
        // Week of 2024-03-10: "b", "c", "d".
        assert_eq!(week.entries.len(), 3);
        assert_eq!(week.totals.income, 0.0);
        assert_eq!(week.totals.expense, 260.0);
        assert_eq!(week.entries[0].id, "c");
    }

    #[test]
    fn analysis_applies_the_monthly_limit_to_the_selected_window() {
        let mut state = march_state();
        state.settings.monthly_limit = 1000.0;
        let bounds = WindowBounds::at(date(2024, 3, 15));
        let year = SummaryService::analysis(&state, &bounds, TimeFilter::Year);
        assert_eq!(year.budget.limit, 1000.0);
        assert_eq!(year.budget.spent, 260.0);
        let all = SummaryService::analysis(&state, &bounds, TimeFilter::All);
        assert_eq!(all.budget.spent, 300.0);
        assert_eq!(all.by_category.len(), 2);
    }
}
