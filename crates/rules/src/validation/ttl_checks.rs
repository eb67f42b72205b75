//! Autostop TTL checks.

use super::ValidationResult;
use crate::messages::{ERROR_NO_STOP, ERROR_TTL_MAX, ERROR_TTL_MIN, ERROR_TTL_NAN};
use crate::schedule::{ScheduleConfig, ScheduleField, MAX_TTL_HOURS};

/// Rules run in order and each overwrites the previous message, so the
/// autostop positivity check wins when several apply.
pub(super) fn validate_ttl(cfg: &ScheduleConfig, result: &mut ValidationResult) {
    let ttl = cfg.ttl_hours;

    if !ttl.is_finite() {
        result.error(ScheduleField::TtlHours, ERROR_TTL_NAN);
    }
    if ttl < 0.0 {
        result.error(ScheduleField::TtlHours, ERROR_TTL_MIN);
    }
    if ttl > MAX_TTL_HOURS {
        result.error(ScheduleField::TtlHours, ERROR_TTL_MAX);
    }
    // NaN is not > 0, so it fails here as well.
    if cfg.autostop_enabled && !(ttl > 0.0) {
        result.error(ScheduleField::TtlHours, ERROR_NO_STOP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;
    use autosched_core::TemplatePolicy;

    fn ttl(autostop_enabled: bool, ttl_hours: f64) -> Option<String> {
        let cfg = ScheduleConfig {
            autostop_enabled,
            ttl_hours,
            ..ScheduleConfig::default()
        };
        validate(&cfg, &TemplatePolicy::default())
            .message(ScheduleField::TtlHours)
            .map(str::to_string)
    }

    #[test]
    fn zero_ttl_with_autostop() {
        assert_eq!(ttl(true, 0.0).as_deref(), Some(ERROR_NO_STOP));
    }

    #[test]
    fn zero_ttl_without_autostop() {
        assert_eq!(ttl(false, 0.0), None);
    }

    #[test]
    fn max_boundary() {
        assert_eq!(ttl(true, 720.0), None);
        assert_eq!(ttl(true, 720.5).as_deref(), Some(ERROR_TTL_MAX));
        // The range check applies whether or not autostop is on.
        assert_eq!(ttl(false, 721.0).as_deref(), Some(ERROR_TTL_MAX));
    }

    #[test]
    fn negative_ttl() {
        assert_eq!(ttl(false, -1.0).as_deref(), Some(ERROR_TTL_MIN));
        // Positivity is evaluated last and replaces the range message.
        assert_eq!(ttl(true, -1.0).as_deref(), Some(ERROR_NO_STOP));
    }

    #[test]
    fn fractional_ttl_is_allowed() {
        assert_eq!(ttl(true, 0.25), None);
    }

    #[test]
    fn non_finite_ttl() {
        assert_eq!(ttl(false, f64::NAN).as_deref(), Some(ERROR_TTL_NAN));
        assert_eq!(ttl(true, f64::NAN).as_deref(), Some(ERROR_NO_STOP));
        assert_eq!(ttl(false, f64::INFINITY).as_deref(), Some(ERROR_TTL_MAX));
    }
}
