//! Human-readable durations and the shutdown/activity-bump helper text.

use autosched_core::{ScheduleError, TemplatePolicy};
use tracing::warn;

use crate::messages::{ERROR_TTL_MAX, NO_SHUTDOWN};
use crate::schedule::{MAX_TTL_HOURS, MS_PER_HOUR};

/// Largest span the formatter accepts: 100,000,000 days.
const MAX_HUMANIZE_MS: f64 = 8.64e15;

const UNITS: &[(&str, u64)] = &[("day", 86_400), ("hour", 3_600), ("minute", 60), ("second", 1)];

/// Render a millisecond span as e.g. `"1 day, 6 hours and 30 minutes"`.
///
/// Rounded to whole seconds; zero components are dropped. Positive spans
/// that round to zero render as `"less than a second"`.
pub fn humanize_duration(ms: f64) -> Result<String, ScheduleError> {
    if ms.is_nan() || ms < 0.0 {
        return Err(ScheduleError::InvalidDuration(ms));
    }
    if ms > MAX_HUMANIZE_MS {
        return Err(ScheduleError::DurationOverflow(ms));
    }

    let mut remaining = (ms / 1000.0).round() as u64;
    let mut parts = Vec::new();
    for (unit, secs) in UNITS {
        let n = remaining / secs;
        remaining %= secs;
        if n > 0 {
            let plural = if n == 1 { "" } else { "s" };
            parts.push(format!("{n} {unit}{plural}"));
        }
    }

    Ok(match parts.as_slice() {
        [] if ms > 0.0 => "less than a second".to_string(),
        [] => "0 seconds".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    })
}

/// Helper text under the TTL field.
///
/// Never fails: out-of-range and unrenderable values map to the max-TTL
/// message.
pub fn describe_shutdown(ttl_hours: f64) -> String {
    try_describe_shutdown(ttl_hours).unwrap_or_else(|e| {
        warn!(ttl_hours, error = %e, "cannot describe shutdown");
        ERROR_TTL_MAX.to_string()
    })
}

/// Like [`describe_shutdown`] but only the overflow case degrades to the
/// max-TTL message; invalid input (negative, NaN) is returned as an error.
pub fn try_describe_shutdown(ttl_hours: f64) -> Result<String, ScheduleError> {
    if ttl_hours == 0.0 {
        return Ok(NO_SHUTDOWN.to_string());
    }
    if ttl_hours > MAX_TTL_HOURS {
        return Ok(ERROR_TTL_MAX.to_string());
    }
    match humanize_duration(ttl_hours * MS_PER_HOUR) {
        Ok(d) => Ok(format!("Your workspace will shut down {d} after its next start.")),
        Err(ScheduleError::DurationOverflow(_)) => Ok(ERROR_TTL_MAX.to_string()),
        Err(e) => Err(e),
    }
}

/// Explains how activity extends the autostop deadline for this template.
///
/// Empty when the template has no activity bump.
pub fn describe_activity_bump(policy: &TemplatePolicy) -> String {
    if policy.activity_bump_ms == 0 {
        return String::new();
    }
    match humanize_duration(policy.activity_bump_ms as f64) {
        Ok(d) => format!(
            "This will be extended by {d} after last activity in the workspace was detected."
        ),
        Err(e) => {
            warn!(activity_bump_ms = policy.activity_bump_ms, error = %e, "cannot describe activity bump");
            String::new()
        }
    }
}
