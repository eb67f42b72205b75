//! IANA timezone resolution backed by the `chrono-tz` database.

use autosched_core::{ScheduleDefaults, ScheduleError};
use chrono_tz::{Tz, TZ_VARIANTS};
use tracing::{debug, warn};

use crate::validation::fuzzy::fuzzy_match;

/// Resolve a zone name such as `"America/Chicago"`.
///
/// Names are matched exactly; empty or unknown names are an
/// [`ScheduleError::InvalidTimezone`].
pub fn resolve_timezone(name: &str) -> Result<Tz, ScheduleError> {
    name.parse::<Tz>().map_err(|e| {
        debug!(timezone = %name, error = %e, "timezone did not resolve");
        ScheduleError::InvalidTimezone(name.to_string())
    })
}

/// Replace a default zone that does not resolve with `UTC`.
///
/// The zone may come from the process `TZ`, which can hold a path such as
/// `:/etc/localtime` or a POSIX rule rather than an IANA name.
pub fn checked_defaults(mut defaults: ScheduleDefaults) -> ScheduleDefaults {
    if resolve_timezone(&defaults.timezone).is_err() {
        warn!(timezone = %defaults.timezone, "default timezone is not an IANA name, using UTC");
        defaults.timezone = Tz::UTC.name().to_string();
    }
    defaults
}

/// All known zone names, for populating a selection list.
pub fn timezone_names() -> impl Iterator<Item = &'static str> {
    TZ_VARIANTS.iter().map(|tz| tz.name())
}

/// Closest known zone name to `input`, if any is reasonably close.
pub fn suggest_timezone(input: &str) -> Option<&'static str> {
    if input.trim().is_empty() {
        return None;
    }
    let names: Vec<&'static str> = timezone_names().collect();
    fuzzy_match(input, &names)
}
