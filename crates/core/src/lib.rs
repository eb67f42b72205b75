pub mod config;
pub mod days;
pub mod entity;
pub mod error;

pub use config::{Config, ScheduleDefaults};
pub use days::*;
pub use entity::*;
pub use error::ScheduleError;
