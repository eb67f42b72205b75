//! User-facing message text for schedule validation and derived projections.

pub const ERROR_NO_DAY_OF_WEEK: &str = "Must set at least one day of week if autostart is enabled.";
pub const ERROR_NO_TIME: &str = "Start time is required when autostart is enabled.";
pub const ERROR_TIME: &str = "Time must be in HH:mm format.";
pub const ERROR_TIMEZONE: &str = "Invalid timezone.";
pub const ERROR_NO_STOP: &str =
    "Time until shutdown must be greater than zero when autostop is enabled.";
pub const ERROR_TTL_MAX: &str =
    "Please enter a limit that is less than or equal to 720 hours (30 days).";
pub const ERROR_TTL_MIN: &str = "Time until shutdown must be greater than or equal to 0.";
pub const ERROR_TTL_NAN: &str = "Time until shutdown must be a number.";

pub const NO_SHUTDOWN: &str = "Your workspace will not automatically shut down.";

pub const WARN_AUTOSTART_LOCKED: &str =
    "The template for this workspace does not allow modification of autostart.";
pub const WARN_AUTOSTOP_LOCKED: &str =
    "The template for this workspace does not allow modification of autostop.";
