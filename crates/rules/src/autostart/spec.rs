//! `CRON_TZ=<zone> <mm> <HH> * * <dow>` rendering and parsing.

use autosched_core::{DaySet, ScheduleError, WEEK};
use serde::{Deserialize, Serialize};

use crate::schedule::{parse_start_time, ScheduleConfig};
use crate::timezone::resolve_timezone;

const TZ_PREFIX: &str = "CRON_TZ=";

/// The autostart half of a schedule, as decoded from a cron spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutostartSchedule {
    pub days: DaySet,
    pub start_time: String,
    pub timezone: String,
}

/// Render the stored cron spec for `cfg`, or `None` when autostart is off.
pub fn autostart_cron(cfg: &ScheduleConfig) -> Result<Option<String>, ScheduleError> {
    if !cfg.autostart_enabled {
        return Ok(None);
    }

    let (hour, minute) = parse_start_time(&cfg.start_time)?;
    let tz = resolve_timezone(&cfg.timezone)?;
    if cfg.days_of_week.is_empty() {
        return Err(ScheduleError::cron("", "autostart needs at least one day"));
    }

    let dow = if cfg.days_of_week == DaySet::all() {
        "*".to_string()
    } else {
        cfg.days_of_week
            .iter()
            .map(|d| d.num_days_from_sunday().to_string())
            .collect::<Vec<_>>()
            .join(",")
    };

    Ok(Some(format!("{TZ_PREFIX}{} {minute} {hour} * * {dow}", tz.name())))
}

/// Decode a stored cron spec. A missing `CRON_TZ=` prefix means UTC.
pub fn parse_autostart_cron(spec: &str) -> Result<AutostartSchedule, ScheduleError> {
    let trimmed = spec.trim();
    let err = |reason: &str| ScheduleError::cron(trimmed, reason);

    let (timezone, expr) = match trimmed.strip_prefix(TZ_PREFIX) {
        Some(rest) => rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| err("missing cron fields after CRON_TZ"))?,
        None => ("UTC", trimmed),
    };
    resolve_timezone(timezone)?;

    let fields: Vec<&str> = expr.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(err(&format!(
            "expected 5 fields (min hour dom month dow), got {}",
            fields.len()
        )));
    }

    let minute = parse_single(fields[0], 59).ok_or_else(|| err("minute must be a single value 0-59"))?;
    let hour = parse_single(fields[1], 23).ok_or_else(|| err("hour must be a single value 0-23"))?;
    if fields[2] != "*" || fields[3] != "*" {
        return Err(err("day-of-month and month must be '*'"));
    }
    let days = parse_dow_field(fields[4]).ok_or_else(|| err("invalid day-of-week field"))?;
    if days.is_empty() {
        return Err(err("no days selected"));
    }

    Ok(AutostartSchedule {
        days,
        start_time: format!("{hour:02}:{minute:02}"),
        timezone: timezone.to_string(),
    })
}

fn parse_single(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|v| *v <= max)
}

/// Supports `*`, `N`, `N-M` and comma lists. Both 0 and 7 are Sunday.
fn parse_dow_field(field: &str) -> Option<DaySet> {
    if field == "*" {
        return Some(DaySet::all());
    }

    let mut days = DaySet::EMPTY;
    for part in field.split(',') {
        let (start, end) = match part.split_once('-') {
            Some((s, e)) => (parse_single(s, 7)?, parse_single(e, 7)?),
            None => {
                let v = parse_single(part, 7)?;
                (v, v)
            }
        };
        if start > end {
            return None;
        }
        for n in start..=end {
            days.insert(WEEK[(n % 7) as usize]);
        }
    }
    Some(days)
}
