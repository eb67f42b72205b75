//! Integration tests that validate every example schedule in
//! `data/schedules/examples/`.

use autosched_core::TemplatePolicy;
use autosched_rules::messages::{ERROR_NO_DAY_OF_WEEK, ERROR_NO_STOP, ERROR_TIMEZONE, ERROR_TTL_MAX};
use autosched_rules::{autostart_cron, validate, ScheduleConfig, ScheduleField, ValidationResult};
use chrono::Weekday;

/// Resolve the examples directory relative to the workspace root.
/// Integration tests run from the crate directory, so we go up two levels.
fn examples_dir() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.join("../../data/schedules/examples")
}

fn load_schedule(filename: &str) -> ScheduleConfig {
    let path = examples_dir().join(filename);
    let yaml = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    ScheduleConfig::from_yaml(&yaml)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

fn check(filename: &str) -> ValidationResult {
    validate(&load_schedule(filename), &TemplatePolicy::default())
}

// ── weekday-mornings.yml ────────────────────────────────────

#[test]
fn weekday_mornings_is_valid() {
    let cfg = load_schedule("weekday-mornings.yml");
    assert!(cfg.autostart_enabled);
    assert_eq!(cfg.days_of_week.len(), 5);
    assert!(!cfg.days_of_week.contains(Weekday::Sat));
    assert_eq!(cfg.ttl_hours, 8.0);

    let result = check("weekday-mornings.yml");
    assert!(result.valid, "{:?}", result.errors);

    assert_eq!(
        autostart_cron(&cfg).unwrap().as_deref(),
        Some("CRON_TZ=Europe/Dublin 30 9 * * 1,2,3,4,5")
    );
    assert_eq!(cfg.ttl_ms(), Some(8 * 3_600_000));
}

// ── weekend-only.yml ────────────────────────────────────────

#[test]
fn weekend_only_warns_under_weekday_template() {
    let cfg = load_schedule("weekend-only.yml");
    let policy = TemplatePolicy {
        allowed_autostart_days: autosched_core::DaySet::weekdays(),
        ..TemplatePolicy::default()
    };
    let result = validate(&cfg, &policy);
    assert!(result.valid);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].field, ScheduleField::DaysOfWeek);
}

// ── no-days.yml ─────────────────────────────────────────────

#[test]
fn no_days_is_rejected() {
    let result = check("no-days.yml");
    assert!(!result.valid);
    assert_eq!(result.message(ScheduleField::DaysOfWeek), Some(ERROR_NO_DAY_OF_WEEK));
    assert_eq!(result.errors.len(), 1);
}

// ── autostop-zero.yml ───────────────────────────────────────

#[test]
fn autostop_zero_is_rejected() {
    let result = check("autostop-zero.yml");
    assert_eq!(result.message(ScheduleField::TtlHours), Some(ERROR_NO_STOP));
}

// ── bad-timezone.yml ────────────────────────────────────────

#[test]
fn bad_timezone_reports_zone_and_ttl() {
    let result = check("bad-timezone.yml");
    assert!(!result.valid);
    let tz = &result.errors[&ScheduleField::Timezone];
    assert_eq!(tz.message, ERROR_TIMEZONE);
    assert_eq!(tz.suggestion.as_deref(), Some("Did you mean 'America/Chicago'?"));
    assert_eq!(result.message(ScheduleField::TtlHours), Some(ERROR_TTL_MAX));
}

#[test]
fn every_example_parses() {
    let mut count = 0;
    for entry in std::fs::read_dir(examples_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|e| e.to_str()) != Some("yml") {
            continue;
        }
        let yaml = std::fs::read_to_string(&path).unwrap();
        ScheduleConfig::from_yaml(&yaml)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        count += 1;
    }
    assert!(count >= 5);
}
