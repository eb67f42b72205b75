//! Workspace schedule value type: autostart days/time/zone plus autostop TTL.
//!
//! A [`ScheduleConfig`] is a plain value. Edits go through the transitions in
//! [`transitions`], which return a new config instead of mutating in place.

mod transitions;

pub use transitions::{default_schedule, empty_schedule};

use std::fmt;

use autosched_core::{DaySet, ScheduleError};
use serde::{Deserialize, Serialize};

use crate::autostart::parse_autostart_cron;

/// Upper bound for the autostop TTL: 30 days.
pub const MAX_TTL_HOURS: f64 = 24.0 * 30.0;

pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Form state for a workspace's autostart/autostop schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    #[serde(default)]
    pub autostart_enabled: bool,
    #[serde(default)]
    pub days_of_week: DaySet,
    /// `HH:mm`, 24h clock, or empty.
    #[serde(default)]
    pub start_time: String,
    /// IANA zone name, or empty.
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub autostop_enabled: bool,
    #[serde(default)]
    pub ttl_hours: f64,
}

impl ScheduleConfig {
    /// Build form state from what the server stores: the autostart cron spec
    /// (if any) and the autostop TTL in milliseconds (if any).
    pub fn from_server(
        autostart_schedule: Option<&str>,
        ttl_ms: Option<u64>,
    ) -> Result<Self, ScheduleError> {
        let mut cfg = ScheduleConfig::default();

        if let Some(spec) = autostart_schedule.filter(|s| !s.trim().is_empty()) {
            let autostart = parse_autostart_cron(spec)?;
            cfg.autostart_enabled = true;
            cfg.days_of_week = autostart.days;
            cfg.start_time = autostart.start_time;
            cfg.timezone = autostart.timezone;
        }

        if let Some(ms) = ttl_ms.filter(|ms| *ms > 0) {
            cfg.autostop_enabled = true;
            cfg.ttl_hours = ms as f64 / MS_PER_HOUR;
        }

        Ok(cfg)
    }

    /// TTL to submit back to the server, `None` when autostop is off.
    pub fn ttl_ms(&self) -> Option<u64> {
        if self.autostop_enabled && self.ttl_hours.is_finite() && self.ttl_hours > 0.0 {
            Some((self.ttl_hours * MS_PER_HOUR).round() as u64)
        } else {
            None
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ScheduleError> {
        serde_yaml::from_str(yaml).map_err(|e| ScheduleError::Serialize(e.to_string()))
    }
}

/// Fields of a [`ScheduleConfig`], used as keys for validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleField {
    AutostartEnabled,
    DaysOfWeek,
    StartTime,
    Timezone,
    AutostopEnabled,
    TtlHours,
}

impl ScheduleField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleField::AutostartEnabled => "autostartEnabled",
            ScheduleField::DaysOfWeek => "daysOfWeek",
            ScheduleField::StartTime => "startTime",
            ScheduleField::Timezone => "timezone",
            ScheduleField::AutostopEnabled => "autostopEnabled",
            ScheduleField::TtlHours => "ttlHours",
        }
    }
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an `HH:mm` start time into `(hour, minute)`.
///
/// Exactly two digits on each side of the colon; hour 0..=23, minute 0..=59.
pub fn parse_start_time(s: &str) -> Result<(u32, u32), ScheduleError> {
    let invalid = || ScheduleError::InvalidStartTime(s.to_string());

    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = s[0..2].parse().map_err(|_| invalid())?;
    let minute: u32 = s[3..5].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}
