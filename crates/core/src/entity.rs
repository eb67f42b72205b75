use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::days::DaySet;

pub type WorkspaceId = Uuid;

/// Workspace summary as returned by the workspace query layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRecord {
    pub id: WorkspaceId,
    #[serde(default)]
    pub name: String,
    pub last_used_at: DateTime<Utc>,
    #[serde(default)]
    pub dormant_at: Option<DateTime<Utc>>,
}

impl WorkspaceRecord {
    pub fn new(name: impl Into<String>, last_used_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            last_used_at,
            dormant_at: None,
        }
    }

    pub fn dormant_since(mut self, at: DateTime<Utc>) -> Self {
        self.dormant_at = Some(at);
        self
    }

    pub fn is_dormant(&self) -> bool {
        self.dormant_at.is_some()
    }
}

/// Template-level constraints on what a workspace owner may change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePolicy {
    #[serde(default = "default_true")]
    pub allow_user_autostart: bool,
    #[serde(default = "default_true")]
    pub allow_user_autostop: bool,
    #[serde(default = "DaySet::all")]
    pub allowed_autostart_days: DaySet,
    /// How far each detected activity pushes the autostop deadline.
    #[serde(default = "default_activity_bump_ms")]
    pub activity_bump_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_activity_bump_ms() -> u64 {
    3_600_000
}

impl Default for TemplatePolicy {
    fn default() -> Self {
        Self {
            allow_user_autostart: true,
            allow_user_autostop: true,
            allowed_autostart_days: DaySet::all(),
            activity_bump_ms: default_activity_bump_ms(),
        }
    }
}

impl TemplatePolicy {
    /// Whether the owner may toggle `day` in the autostart schedule.
    pub fn day_editable(&self, day: Weekday) -> bool {
        self.allow_user_autostart && self.allowed_autostart_days.contains(day)
    }

    /// A schedule form can only be submitted if at least one half is editable.
    pub fn can_submit(&self) -> bool {
        self.allow_user_autostart || self.allow_user_autostop
    }
}

/// Template dormancy settings. `None` or zero disables the transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DormancyPolicy {
    #[serde(default)]
    pub time_til_dormant_ms: Option<u64>,
    #[serde(default)]
    pub time_til_dormant_autodelete_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_defaults_from_partial_yaml() {
        let policy: TemplatePolicy = serde_yaml::from_str("allowUserAutostop: false").unwrap();
        assert!(policy.allow_user_autostart);
        assert!(!policy.allow_user_autostop);
        assert_eq!(policy.allowed_autostart_days, DaySet::all());
        assert!(policy.can_submit());
    }

    #[test]
    fn omitted_fields_match_default_policy() {
        let policy: TemplatePolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, TemplatePolicy::default());
        assert_eq!(policy.activity_bump_ms, 3_600_000);
    }

    #[test]
    fn day_editable_requires_autostart_and_day() {
        let policy = TemplatePolicy {
            allowed_autostart_days: DaySet::weekdays(),
            ..TemplatePolicy::default()
        };
        assert!(policy.day_editable(Weekday::Mon));
        assert!(!policy.day_editable(Weekday::Sat));

        let locked = TemplatePolicy {
            allow_user_autostart: false,
            allow_user_autostop: false,
            ..TemplatePolicy::default()
        };
        assert!(!locked.day_editable(Weekday::Mon));
        assert!(!locked.can_submit());
    }

    #[test]
    fn record_parses_camel_case_json() {
        let record: WorkspaceRecord = serde_json::from_str(
            r#"{"id":"9f0c6f2e-3a55-4c6e-9d1b-6a4a2b1f7c11","name":"dev","lastUsedAt":"2024-01-01T00:00:00Z","dormantAt":null}"#,
        )
        .unwrap();
        assert_eq!(record.name, "dev");
        assert!(!record.is_dormant());
    }
}
