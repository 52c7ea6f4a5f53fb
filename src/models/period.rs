//! Calendar month periods
//!
//! Monthly statistics and month queries are expressed as a [`MonthPeriod`],
//! whose inclusive date bounds are computed once at construction.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// One calendar month, e.g. "2024-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthKey", into = "MonthKey")]
pub struct MonthPeriod {
    year: i32,
    month: u32,
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct MonthKey {
    year: i32,
    month: u32,
}

impl TryFrom<MonthKey> for MonthPeriod {
    type Error = LedgerError;

    fn try_from(key: MonthKey) -> Result<Self, Self::Error> {
        Self::new(key.year, key.month)
    }
}

impl From<MonthPeriod> for MonthKey {
    fn from(period: MonthPeriod) -> Self {
        Self {
            year: period.year,
            month: period.month,
        }
    }
}

impl MonthPeriod {
    /// Create a monthly period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> LedgerResult<Self> {
        let invalid = || LedgerError::Validation(format!("Invalid month: {:04}-{:02}", year, month));

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            start,
            end: next_start - Duration::days(1),
        })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(chrono::Months::new(1))
            .map(|next| next - Duration::days(1))
            .unwrap_or(date);
        Self {
            year: date.year(),
            month: date.month(),
            start,
            end,
        }
    }

    /// Get the current month in local time
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let s = s.trim();
        let invalid =
            || LedgerError::Validation(format!("Invalid month '{}': use YYYY-MM (e.g., 2024-01)", s));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for MonthPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start.cmp(&other.start)
    }
}

impl PartialOrd for MonthPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
