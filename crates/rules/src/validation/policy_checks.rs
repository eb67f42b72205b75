//! Template policy advisories. These never block a save.

use autosched_core::TemplatePolicy;

use super::ValidationResult;
use crate::messages::{WARN_AUTOSTART_LOCKED, WARN_AUTOSTOP_LOCKED};
use crate::schedule::{ScheduleConfig, ScheduleField};

pub(super) fn check_policy(cfg: &ScheduleConfig, policy: &TemplatePolicy, result: &mut ValidationResult) {
    if cfg.autostart_enabled {
        if !policy.allow_user_autostart {
            result.warn(ScheduleField::AutostartEnabled, WARN_AUTOSTART_LOCKED);
        }

        let outside = cfg.days_of_week.difference(&policy.allowed_autostart_days);
        if !outside.is_empty() {
            result.warn(
                ScheduleField::DaysOfWeek,
                format!("The template does not allow autostart on: {outside}."),
            );
        }
    }

    if cfg.autostop_enabled && !policy.allow_user_autostop {
        result.warn(ScheduleField::AutostopEnabled, WARN_AUTOSTOP_LOCKED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autosched_core::DaySet;
    use chrono::Weekday;

    fn run(cfg: &ScheduleConfig, policy: &TemplatePolicy) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_policy(cfg, policy, &mut result);
        result
    }

    #[test]
    fn days_outside_template_requirement() {
        let cfg = ScheduleConfig {
            autostart_enabled: true,
            days_of_week: DaySet::EMPTY.with(Weekday::Mon).with(Weekday::Sat),
            ..ScheduleConfig::default()
        };
        let policy = TemplatePolicy {
            allowed_autostart_days: DaySet::weekdays(),
            ..TemplatePolicy::default()
        };
        let result = run(&cfg, &policy);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].field, ScheduleField::DaysOfWeek);
        assert!(result.warnings[0].message.contains("Sat"));
    }

    #[test]
    fn locked_halves_warn_only_when_enabled() {
        let policy = TemplatePolicy {
            allow_user_autostart: false,
            allow_user_autostop: false,
            ..TemplatePolicy::default()
        };
        assert!(run(&ScheduleConfig::default(), &policy).warnings.is_empty());

        let cfg = ScheduleConfig {
            autostart_enabled: true,
            days_of_week: DaySet::weekdays(),
            autostop_enabled: true,
            ttl_hours: 2.0,
            ..ScheduleConfig::default()
        };
        let fields: Vec<ScheduleField> = run(&cfg, &policy).warnings.iter().map(|w| w.field).collect();
        assert_eq!(fields, vec![ScheduleField::AutostartEnabled, ScheduleField::AutostopEnabled]);
    }
}
