use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid start time '{0}', expected HH:mm")]
    InvalidStartTime(String),

    #[error("Invalid cron spec '{spec}': {reason}")]
    InvalidCronSpec { spec: String, reason: String },

    /// The duration is too large for the humanizer to render.
    #[error("Duration of {0}ms is out of range")]
    DurationOverflow(f64),

    /// Negative or NaN durations.
    #[error("Invalid duration: {0}ms")]
    InvalidDuration(f64),

    #[error("{0}")]
    Other(String),
}

impl ScheduleError {
    pub fn cron(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCronSpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}
