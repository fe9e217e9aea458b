use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::config::{parse_timezone, ScheduleConfig};
use crate::error::{JobPushError, Result};

/// How far from the configured time a heartbeat still counts as on time.
pub const SCHEDULE_TOLERANCE_MINUTES: u32 = 5;

impl ScheduleConfig {
    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }

    /// Configured time as minutes after midnight, if any.
    pub fn target_minute(&self) -> Result<Option<u32>> {
        let Some(time) = self.time.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let invalid = || JobPushError::Config(format!("schedule.time must be HH:MM, got {:?}", time));
        let (hour, minute) = time.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = minute.trim().parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Some(hour * 60 + minute))
    }
}

/// Whether a heartbeat at `now` falls inside the scheduled window.
///
/// With no time configured every heartbeat runs. The comparison is on
/// minute-of-day in the schedule's zone and does not wrap around midnight.
pub fn should_run_now(schedule: &ScheduleConfig, now: DateTime<Utc>) -> Result<bool> {
    let Some(target) = schedule.target_minute()? else {
        return Ok(true);
    };

    let local = now.with_timezone(&schedule.tz()?);
    let current = local.hour() * 60 + local.minute();

    Ok(current.abs_diff(target) <= SCHEDULE_TOLERANCE_MINUTES)
}
