// crates/lockdown-core/src/window.rs

//! # Date Windows
//!
//! Derives the calendar weeks used to compare traffic during a lockdown
//! with a baseline taken four weeks earlier.

use crate::model::{MonitoringDates, Week};
use chrono::{Datelike, Duration, NaiveDate};

/// Distance between the lockdown week and the "before" baseline.
pub const BEFORE_OFFSET_DAYS: i64 = 28;

/// The Monday..Sunday week containing `date`.
pub fn week_of(date: NaiveDate) -> Week {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    Week {
        monday,
        sunday: monday + Duration::days(6),
    }
}

impl Week {
    /// The same week shifted `days` earlier.
    pub fn shifted_back(self, days: i64) -> Week {
        Week {
            monday: self.monday - Duration::days(days),
            sunday: self.sunday - Duration::days(days),
        }
    }
}

/// Lockdown week and "before" baseline for a lockdown starting on `start`.
pub fn monitoring_dates(start: NaiveDate) -> MonitoringDates {
    let lockdown = week_of(start);
    MonitoringDates {
        lockdown,
        before: lockdown.shifted_back(BEFORE_OFFSET_DAYS),
    }
}
