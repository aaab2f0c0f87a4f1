//! Calendar arithmetic for the attendance widget.
//!
//! Everything here is a pure function of its inputs. The current date is
//! always passed in by the caller so the grid can be built and tested
//! without touching a clock.

use crate::date_key::DateKey;
use crate::selection::{DayMark, SelectionState};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column headers for the grid. Weeks start on Sunday everywhere.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid month: {0}, must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("{year}-{month:02} is outside the supported calendar range")]
    OutOfRange { year: i32, month: u32 },
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The month currently shown by the widget.
///
/// Only the year and month matter; any day inside the month identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ViewMonth {
    year: i32,
    month: u32,
}

impl ViewMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::OutOfRange { year, month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`, clamped to the supported year range.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year().clamp(MIN_YEAR, MAX_YEAR),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Always valid: year and month are range-checked on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(first)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Whether `date` falls in this month (same year and month).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Every date of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first_day()
            .iter_days()
            .take_while(move |date| self.contains(*date))
    }

    /// Navigate to the previous month. Stays put at the lower range limit.
    pub fn previous(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .filter(|date| date.year() >= MIN_YEAR)
            .map(Self::containing)
            .unwrap_or(*self)
    }

    /// Navigate to the next month. Stays put at the upper range limit.
    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .filter(|date| date.year() <= MAX_YEAR)
            .map(Self::containing)
            .unwrap_or(*self)
    }

    /// Heading text, e.g. "June 2025".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// A single cell of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub key: DateKey,
    /// Day of month shown in the cell
    pub day: u32,
    /// False for filler days borrowed from the neighbouring months
    pub in_month: bool,
    pub is_weekend: bool,
    pub is_today: bool,
}

impl CalendarDay {
    /// Whether clicking this cell can change the selection.
    pub fn is_selectable(&self) -> bool {
        self.in_month && !self.is_weekend
    }

    /// The mark to paint on this cell. Filler days never show a mark,
    /// even when the date is marked in its own month.
    pub fn display_mark(&self, selection: &SelectionState) -> Option<DayMark> {
        if self.in_month {
            selection.mark(&self.key)
        } else {
            None
        }
    }
}

/// Full weeks covering a month, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub days: Vec<CalendarDay>,
}

impl CalendarGrid {
    /// Build the grid for `view`, flagging the cell equal to `today`.
    ///
    /// Starts on the Sunday on or before the 1st and ends on the Saturday
    /// on or after the last day, so the length is always a multiple of 7.
    pub fn build(view: ViewMonth, today: NaiveDate) -> Self {
        let first = view.first_day();
        let last = view.last_day();

        let lead = u64::from(first.weekday().num_days_from_sunday());
        let trail = u64::from(6 - last.weekday().num_days_from_sunday());
        let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
        let end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

        let mut days = Vec::new();
        let mut current = start;
        while current <= end {
            days.push(CalendarDay {
                date: current,
                key: DateKey::new(current),
                day: current.day(),
                in_month: view.contains(current),
                is_weekend: is_weekend(current),
                is_today: current == today,
            });
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }

        tracing::trace!(month = %view.title(), cells = days.len(), "built calendar grid");
        Self { days }
    }

    /// The grid split into rows of seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
