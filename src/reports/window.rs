//! Report windows
//!
//! A report window is an inclusive timestamp range with a display label.
//! Preset constructors take the reference date as a parameter so callers (and
//! tests) control "today".

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// An inclusive date-time window for report filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWindow {
    /// Display label ("Daily", "Weekly", ...)
    pub label: String,
    /// First instant included in the window
    pub start: NaiveDateTime,
    /// Last instant included in the window
    pub end: NaiveDateTime,
}

impl ReportWindow {
    /// The given day, 00:00:00 through 23:59:59
    pub fn daily(today: NaiveDate) -> Self {
        Self {
            label: "Daily".to_string(),
            start: start_of(today),
            end: end_of(today),
        }
    }

    /// Most recent Monday 00:00:00 through the following Sunday 23:59:59
    pub fn weekly(today: NaiveDate) -> Self {
        let monday = today - Days::new(today.weekday().num_days_from_monday() as u64);
        let sunday = monday + Days::new(6);
        Self {
            label: "Weekly".to_string(),
            start: start_of(monday),
            end: end_of(sunday),
        }
    }

    /// First through last day of the given day's month
    pub fn monthly(today: NaiveDate) -> Self {
        let first = today.with_day(1).expect("day 1 is always valid");
        let last = last_day_of_month(first);
        Self {
            label: "Monthly".to_string(),
            start: start_of(first),
            end: end_of(last),
        }
    }

    /// Caller-supplied inclusive date range
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            label: "Custom".to_string(),
            start: start_of(start),
            end: end_of(end),
        }
    }

    /// Whether a timestamp falls inside the window (bounds inclusive)
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }
}

fn start_of(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is always valid")
}

fn end_of(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .expect("23:59:59 is always valid")
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let next_month_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .expect("first of month is always valid");
    next_month_first - Days::new(1)
}
