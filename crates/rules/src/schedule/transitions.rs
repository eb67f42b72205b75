//! Switch transitions for the autostart and autostop halves of a schedule.

use autosched_core::{DaySet, ScheduleDefaults};

use super::ScheduleConfig;

/// Cleared autostart fields: no days, no time, no zone.
pub fn empty_schedule(cfg: &ScheduleConfig) -> ScheduleConfig {
    ScheduleConfig {
        autostart_enabled: false,
        days_of_week: DaySet::EMPTY,
        start_time: String::new(),
        timezone: String::new(),
        ..cfg.clone()
    }
}

/// Autostart switched on with the configured default days, time and zone.
pub fn default_schedule(cfg: &ScheduleConfig, defaults: &ScheduleDefaults) -> ScheduleConfig {
    ScheduleConfig {
        autostart_enabled: true,
        days_of_week: defaults.days,
        start_time: defaults.start_time.clone(),
        timezone: defaults.timezone.clone(),
        ..cfg.clone()
    }
}

impl ScheduleConfig {
    /// Flip autostart. Turning it off clears days, time and zone; turning it
    /// on fills them from `defaults`.
    pub fn toggle_autostart(&self, defaults: &ScheduleDefaults) -> ScheduleConfig {
        if self.autostart_enabled {
            empty_schedule(self)
        } else {
            default_schedule(self, defaults)
        }
    }

    /// Flip autostop. Turning it off zeroes the TTL; turning it on sets
    /// `default_ttl_hours`.
    pub fn toggle_autostop(&self, default_ttl_hours: f64) -> ScheduleConfig {
        if self.autostop_enabled {
            ScheduleConfig {
                autostop_enabled: false,
                ttl_hours: 0.0,
                ..self.clone()
            }
        } else {
            ScheduleConfig {
                autostop_enabled: true,
                ttl_hours: default_ttl_hours,
                ..self.clone()
            }
        }
    }
}
