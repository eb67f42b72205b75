//! Autostart checks: days of week, start time, and timezone.

use super::ValidationResult;
use crate::messages::{ERROR_NO_DAY_OF_WEEK, ERROR_NO_TIME, ERROR_TIME, ERROR_TIMEZONE};
use crate::schedule::{parse_start_time, ScheduleConfig, ScheduleField};
use crate::timezone::{resolve_timezone, suggest_timezone};

pub(super) fn validate_days(cfg: &ScheduleConfig, result: &mut ValidationResult) {
    if cfg.autostart_enabled && cfg.days_of_week.is_empty() {
        result.error(ScheduleField::DaysOfWeek, ERROR_NO_DAY_OF_WEEK);
    }
}

pub(super) fn validate_start_time(cfg: &ScheduleConfig, result: &mut ValidationResult) {
    if cfg.start_time.is_empty() {
        if cfg.autostart_enabled {
            result.error(ScheduleField::StartTime, ERROR_NO_TIME);
        }
        return;
    }

    if parse_start_time(&cfg.start_time).is_err() {
        result.error(ScheduleField::StartTime, ERROR_TIME);
    }
}

/// Only checked once a start time is set; an empty zone then fails too.
pub(super) fn validate_timezone(cfg: &ScheduleConfig, result: &mut ValidationResult) {
    if cfg.start_time.is_empty() {
        return;
    }

    if resolve_timezone(&cfg.timezone).is_err() {
        match suggest_timezone(&cfg.timezone) {
            Some(name) => result.error_with_suggestion(
                ScheduleField::Timezone,
                ERROR_TIMEZONE,
                format!("Did you mean '{name}'?"),
            ),
            None => result.error(ScheduleField::Timezone, ERROR_TIMEZONE),
        }
    }
}
