use crate::domain::Settings;
use crate::errors::BudgetError;

pub struct SettingsService;

impl SettingsService {
    /// Zero is accepted and reads as "no limit configured".
    pub fn set_monthly_limit(settings: &mut Settings, limit: f64) -> Result<(), BudgetError> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(BudgetError::Validation(
                "monthly limit must be zero or a positive number".into(),
            ));
        }
        settings.monthly_limit = limit;
        Ok(())
    }

    pub fn set_motivation(settings: &mut Settings, warning: &str, danger: &str) {
        settings.motivation.warning = warning.trim().to_string();
        settings.motivation.danger = danger.trim().to_string();
    }

    /// The time string is stored verbatim; reminder scheduling lives
    /// outside the core.
    pub fn set_notification(settings: &mut Settings, enabled: bool, time: &str) {
        settings.notification.enabled = enabled;
        settings.notification.time = time.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_the_unconfigured_sentinel() {
        let mut settings = Settings::default();
        settings.monthly_limit = 500.0;
        SettingsService::set_monthly_limit(&mut settings, 0.0).unwrap();
        assert_eq!(settings.monthly_limit, 0.0);
    }

    #[test]
    fn negative_and_non_finite_limits_are_rejected() {
        let mut settings = Settings::default();
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = SettingsService::set_monthly_limit(&mut settings, bad).unwrap_err();
            assert!(matches!(err, BudgetError::Validation(_)));
        }
        assert_eq!(settings.monthly_limit, 0.0);
    }

    #[test]
    fn motivation_messages_are_trimmed() {
        let mut settings = Settings::default();
        SettingsService::set_motivation(&mut settings, "  easy now  ", " stop ");
        assert_eq!(settings.motivation.warning, "easy now");
        assert_eq!(settings.motivation.danger, "stop");
    }
}
