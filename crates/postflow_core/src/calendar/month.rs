//! Pure month navigation for the calendar view.
//!
//! # Responsibility
//! - Track the displayed month and step it forwards/backwards.
//! - Derive the day keys and grid offset the view needs.
//!
//! # Invariants
//! - Navigation is pure date arithmetic, independent of scheduled data.
//! - `month` stays within 1..=12.

use crate::calendar::date_key::DateKey;
use chrono::{Datelike, NaiveDate};

/// Displayed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Creates a cursor for the given year/month, rejecting invalid months.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Advances the displayed month by one.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Retreats the displayed month by one.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    fn first_day(&self) -> NaiveDate {
        // Day 1 of a month in 1..=12 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("first day of a valid month")
    }

    /// Number of days in the displayed month.
    pub fn days_in_month(&self) -> u32 {
        let this = self.first_day();
        let next = self.next().first_day();
        next.signed_duration_since(this).num_days() as u32
    }

    /// Leading blank cells before day 1 in a Sunday-first week grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Canonical date keys for every day of the displayed month, in order.
    pub fn day_keys(&self) -> Vec<DateKey> {
        let first = self.first_day();
        (0..self.days_in_month())
            .filter_map(|offset| first.checked_add_days(chrono::Days::new(u64::from(offset))))
            .map(DateKey::new)
            .collect()
    }

    /// Human label such as `June 2025`.
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}
