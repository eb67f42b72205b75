//! Workspace schedule rules.
//!
//! This crate provides:
//! - The [`ScheduleConfig`] value and its autostart/autostop transitions
//! - Field-level validation with template policy advisories
//! - Human-readable shutdown and activity-bump text
//! - Autostart cron spec conversion and next-start computation
//! - Dormancy/auto-delete preview filters over workspace records

pub mod autostart;
pub mod dormancy;
pub mod duration;
pub mod messages;
pub mod schedule;
pub mod timezone;
pub mod validation;

pub use autostart::{autostart_cron, next_autostart, parse_autostart_cron};
pub use dormancy::{going_dormant, going_to_be_deleted, preview, DormancyPreview, WorkspaceQuery};
pub use duration::{describe_activity_bump, describe_shutdown, humanize_duration, try_describe_shutdown};
pub use schedule::{ScheduleConfig, ScheduleField, MAX_TTL_HOURS};
pub use timezone::{checked_defaults, resolve_timezone};
pub use validation::{validate, ValidationResult};
