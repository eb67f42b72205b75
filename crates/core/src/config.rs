use std::env;

use serde::{Deserialize, Serialize};

use crate::days::DaySet;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_f64(profile: &str, key: &str, default: f64) -> f64 {
    match profiled_env_opt(profile, key) {
        Some(v) => v.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %v, "not a number, using default {default}");
            default
        }),
        None => default,
    }
}

fn profiled_env_days(profile: &str, key: &str, default: DaySet) -> DaySet {
    match profiled_env_opt(profile, key) {
        Some(v) => v.parse().unwrap_or_else(|e| {
            tracing::warn!(key, value = %v, error = %e, "bad day list, using default");
            default
        }),
        None => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub schedule: ScheduleDefaults,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `AUTOSCHED_PROFILE`. When set (e.g. `STAGING`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("AUTOSCHED_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            schedule: ScheduleDefaults::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  schedule:    start={}, tz={}, days=[{}], ttl={}h",
            self.schedule.start_time,
            self.schedule.timezone,
            self.schedule.days,
            self.schedule.ttl_hours
        );
    }

    /// JSON view for `--print-config` style output.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "schedule": {
                "start_time": self.schedule.start_time,
                "timezone": self.schedule.timezone,
                "days": self.schedule.days,
                "ttl_hours": self.schedule.ttl_hours,
            },
        })
    }
}

// ── Schedule defaults ─────────────────────────────────────────

/// Values filled in when a user switches autostart or autostop on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDefaults {
    pub start_time: String,
    pub timezone: String,
    pub days: DaySet,
    pub ttl_hours: f64,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            start_time: "09:30".to_string(),
            timezone: "UTC".to_string(),
            days: DaySet::weekdays(),
            ttl_hours: 8.0,
        }
    }
}

impl ScheduleDefaults {
    fn from_env_profiled(p: &str) -> Self {
        let fallback = Self::default();
        // The local zone comes from TZ when no explicit default is configured.
        let local_tz = env_opt("TZ").unwrap_or(fallback.timezone);
        Self {
            start_time: profiled_env_or(p, "DEFAULT_START_TIME", &fallback.start_time),
            timezone: profiled_env_or(p, "DEFAULT_TIMEZONE", &local_tz),
            days: profiled_env_days(p, "DEFAULT_DAYS", fallback.days),
            ttl_hours: profiled_env_f64(p, "DEFAULT_TTL_HOURS", fallback.ttl_hours),
        }
    }
}
