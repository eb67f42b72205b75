//! Autostart cron specs: conversion to and from the stored server format,
//! and next-start computation.
//!
//! The server keeps the autostart schedule as a 5-field cron line with a
//! timezone prefix, e.g. `CRON_TZ=Europe/Dublin 30 9 * * 1,2,3,4,5`. Only
//! the shapes the schedule form can produce are accepted: a single minute and
//! hour, wildcard day-of-month and month, and a day-of-week list.

mod next;
mod spec;

pub use self::next::next_autostart;
pub use self::spec::{autostart_cron, parse_autostart_cron, AutostartSchedule};
