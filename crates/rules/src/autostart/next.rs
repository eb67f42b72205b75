//! Next autostart instant, evaluated with the `cron` crate in the schedule's zone.

use std::str::FromStr;

use autosched_core::ScheduleError;
use chrono::{DateTime, Utc};
use cron::Schedule;
use tracing::debug;

use crate::schedule::{parse_start_time, ScheduleConfig};
use crate::timezone::resolve_timezone;

/// First autostart strictly after `after`, or `None` when autostart is off
/// or no day is selected.
///
/// The `cron` crate takes a leading seconds field. Days are passed by name
/// because it numbers weekdays 1-7 from Sunday, unlike the 0-6 stored format.
pub fn next_autostart(
    cfg: &ScheduleConfig,
    after: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, ScheduleError> {
    if !cfg.autostart_enabled || cfg.days_of_week.is_empty() {
        return Ok(None);
    }

    let (hour, minute) = parse_start_time(&cfg.start_time)?;
    let tz = resolve_timezone(&cfg.timezone)?;
    let days: Vec<String> = cfg.days_of_week.iter().map(|d| d.to_string()).collect();
    let expr = format!("0 {minute} {hour} * * {}", days.join(","));

    let schedule = Schedule::from_str(&expr)
        .map_err(|e| ScheduleError::cron(expr.clone(), e.to_string()))?;
    let next = schedule
        .after(&after.with_timezone(&tz))
        .next()
        .map(|t| t.with_timezone(&Utc));

    debug!(cron = %expr, timezone = %tz, ?next, "computed next autostart");
    Ok(next)
}
