//! Dormancy window classifier: which workspaces a template schedule change
//! would make dormant or delete, relative to a reference instant.
//!
//! Both filters keep input order and never fail. A missing or zero duration
//! means the feature is off, so nothing is selected.

mod query;

pub use self::query::WorkspaceQuery;

use autosched_core::{DormancyPolicy, WorkspaceRecord};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tracing::debug;

/// `from + ms`, or `None` if the result is out of range.
fn project(from: DateTime<Utc>, ms: u64) -> Option<DateTime<Utc>> {
    let delta = TimeDelta::try_milliseconds(i64::try_from(ms).ok()?)?;
    from.checked_add_signed(delta)
}

/// Active workspaces whose inactivity window has already elapsed at `now`.
///
/// A record qualifies when it is not dormant yet and
/// `last_used_at + time_til_dormant_ms <= now`.
pub fn going_dormant<'a>(
    records: &'a [WorkspaceRecord],
    time_til_dormant_ms: Option<u64>,
    now: DateTime<Utc>,
) -> Vec<&'a WorkspaceRecord> {
    let Some(ms) = time_til_dormant_ms.filter(|ms| *ms > 0) else {
        return Vec::new();
    };

    let selected: Vec<&WorkspaceRecord> = records
        .iter()
        .filter(|r| r.dormant_at.is_none())
        .filter(|r| project(r.last_used_at, ms).is_some_and(|at| at <= now))
        .collect();

    debug!(total = records.len(), selected = selected.len(), "going dormant");
    selected
}

/// Dormant workspaces whose auto-delete window has already elapsed at `now`.
///
/// A record qualifies when `dormant_at + time_til_autodelete_ms <= now`.
pub fn going_to_be_deleted<'a>(
    records: &'a [WorkspaceRecord],
    time_til_autodelete_ms: Option<u64>,
    now: DateTime<Utc>,
) -> Vec<&'a WorkspaceRecord> {
    let Some(ms) = time_til_autodelete_ms.filter(|ms| *ms > 0) else {
        return Vec::new();
    };

    let selected: Vec<&WorkspaceRecord> = records
        .iter()
        .filter(|r| {
            r.dormant_at
                .and_then(|at| project(at, ms))
                .is_some_and(|at| at <= now)
        })
        .collect();

    debug!(total = records.len(), selected = selected.len(), "going to be deleted");
    selected
}

/// Both previews for one template change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DormancyPreview<'a> {
    pub going_dormant: Vec<&'a WorkspaceRecord>,
    pub going_to_be_deleted: Vec<&'a WorkspaceRecord>,
}

impl DormancyPreview<'_> {
    pub fn is_empty(&self) -> bool {
        self.going_dormant.is_empty() && self.going_to_be_deleted.is_empty()
    }
}

pub fn preview<'a>(
    records: &'a [WorkspaceRecord],
    policy: &DormancyPolicy,
    now: DateTime<Utc>,
) -> DormancyPreview<'a> {
    DormancyPreview {
        going_dormant: going_dormant(records, policy.time_til_dormant_ms, now),
        going_to_be_deleted: going_to_be_deleted(records, policy.time_til_dormant_autodelete_ms, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const HOUR_MS: u64 = 3_600_000;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn ms(n: i64) -> TimeDelta {
        TimeDelta::milliseconds(n)
    }

    #[test]
    fn dormant_boundary_is_inclusive() {
        let records = vec![WorkspaceRecord::new("a", t0())];
        let now = t0() + ms(HOUR_MS as i64);
        assert_eq!(going_dormant(&records, Some(HOUR_MS), now).len(), 1);
    }

    #[test]
    fn dormant_one_ms_early_is_excluded() {
        let records = vec![WorkspaceRecord::new("a", t0())];
        let now = t0() + ms(HOUR_MS as i64 - 1);
        assert!(going_dormant(&records, Some(HOUR_MS), now).is_empty());
    }

    #[test]
    fn already_dormant_records_are_skipped() {
        let records = vec![WorkspaceRecord::new("a", t0()).dormant_since(t0())];
        let now = t0() + ms(10 * HOUR_MS as i64);
        assert!(going_dormant(&records, Some(HOUR_MS), now).is_empty());
    }

    #[test]
    fn disabled_duration_selects_nothing() {
        let records = vec![WorkspaceRecord::new("a", t0()).dormant_since(t0())];
        let later = t0() + ms(1_000 * HOUR_MS as i64);
        assert!(going_dormant(&records, None, later).is_empty());
        assert!(going_dormant(&records, Some(0), later).is_empty());
        assert!(going_to_be_deleted(&records, None, later).is_empty());
        assert!(going_to_be_deleted(&records, Some(0), later).is_empty());
    }

    #[test]
    fn deletion_needs_dormant_at() {
        let records = vec![WorkspaceRecord::new("active", t0() - ms(100 * HOUR_MS as i64))];
        let now = t0();
        assert!(going_to_be_deleted(&records, Some(HOUR_MS), now).is_empty());
        assert!(going_to_be_deleted(&records, Some(u64::MAX), now).is_empty());
    }

    #[test]
    fn deletion_counts_from_dormant_at() {
        let records = vec![
            WorkspaceRecord::new("old", t0()).dormant_since(t0() - ms(2 * HOUR_MS as i64)),
            WorkspaceRecord::new("fresh", t0()).dormant_since(t0() - ms(HOUR_MS as i64 / 2)),
        ];
        let selected = going_to_be_deleted(&records, Some(HOUR_MS), t0());
        let names: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["old"]);
    }

    #[test]
    fn filters_preserve_input_order() {
        let records = vec![
            WorkspaceRecord::new("c", t0() - ms(3 * HOUR_MS as i64)),
            WorkspaceRecord::new("a", t0() - ms(5 * HOUR_MS as i64)),
            WorkspaceRecord::new("skip", t0()),
            WorkspaceRecord::new("b", t0() - ms(2 * HOUR_MS as i64)),
        ];
        let names: Vec<&str> = going_dormant(&records, Some(HOUR_MS), t0())
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn overflowing_projection_is_excluded() {
        let records = vec![WorkspaceRecord::new("a", t0())];
        assert!(going_dormant(&records, Some(u64::MAX), t0()).is_empty());
    }

    #[test]
    fn preview_runs_both_filters() {
        let records = vec![
            WorkspaceRecord::new("idle", t0() - ms(48 * HOUR_MS as i64)),
            WorkspaceRecord::new("dormant", t0() - ms(48 * HOUR_MS as i64))
                .dormant_since(t0() - ms(24 * HOUR_MS as i64)),
        ];
        let policy = DormancyPolicy {
            time_til_dormant_ms: Some(24 * HOUR_MS),
            time_til_dormant_autodelete_ms: Some(12 * HOUR_MS),
        };
        let result = preview(&records, &policy, t0());
        assert_eq!(result.going_dormant.len(), 1);
        assert_eq!(result.going_dormant[0].name, "idle");
        assert_eq!(result.going_to_be_deleted.len(), 1);
        assert_eq!(result.going_to_be_deleted[0].name, "dormant");
        assert!(!result.is_empty());
    }
}
