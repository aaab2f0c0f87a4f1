//! Monthly attendance figures derived from the current selection.

use crate::calendar::{is_weekend, ViewMonth};
use crate::date_key::DateKey;
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};
use std::fmt;

// Share of non-holiday working days that must be spent in the office,
// kept as an exact fraction for integer rounding
const REQUIRED_NUMERATOR: u32 = 3;
const REQUIRED_DENOMINATOR: u32 = 5;

pub const REQUIRED_ATTENDANCE_RATIO: f64 = REQUIRED_NUMERATOR as f64 / REQUIRED_DENOMINATOR as f64;

/// The required share as a whole percentage.
pub const REQUIRED_ATTENDANCE_PERCENT: u32 = 100 * REQUIRED_NUMERATOR / REQUIRED_DENOMINATOR;

/// Attendance figures for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    /// Weekdays in the month
    pub total_working_days: u32,
    /// Holidays marked on weekdays of the month
    pub holidays: u32,
    /// Office days needed to reach the required ratio
    pub required_working_days: u32,
    /// Working days marked on weekdays of the month
    pub current_attendance: u32,
    /// Whole-number percentage of attended days, 0 when nothing is countable
    pub attendance_percentage: u32,
    pub remaining_days: u32,
}

impl AttendanceStats {
    /// Compute the figures for `view` from the marks in `selection`.
    ///
    /// Marks outside the month or on weekends are ignored, so selections
    /// carried over from other months never leak in.
    pub fn compute(view: ViewMonth, selection: &SelectionState) -> Self {
        let counts = |key: &&DateKey| {
            let date = key.date();
            view.contains(date) && !is_weekend(date)
        };

        let total_working_days = view.days().filter(|d| !is_weekend(*d)).count() as u32;
        let holidays = selection.holidays().filter(counts).count() as u32;
        let current_attendance = selection.working_days().filter(counts).count() as u32;

        let countable = total_working_days.saturating_sub(holidays);
        let required_working_days = (REQUIRED_NUMERATOR * countable).div_ceil(REQUIRED_DENOMINATOR);
        let attendance_percentage = if countable == 0 {
            0
        } else {
            // round(100 * attended / countable), halves rounding up
            (200 * current_attendance + countable) / (2 * countable)
        };
        let remaining_days = required_working_days.saturating_sub(current_attendance);

        Self {
            total_working_days,
            holidays,
            required_working_days,
            current_attendance,
            attendance_percentage,
            remaining_days,
        }
    }

    pub fn requirement_met(&self) -> bool {
        self.remaining_days == 0
    }

    pub fn advisory(&self) -> Advisory {
        if self.remaining_days > 0 {
            Advisory::NeedMore(self.remaining_days)
        } else {
            Advisory::RequirementMet
        }
    }

    /// The labelled figures shown in the stats panel, in display order.
    pub fn items(&self) -> [StatItem; 4] {
        [
            StatItem::new(StatKind::TotalWorkingDays, self.total_working_days.to_string()),
            StatItem::new(StatKind::Holidays, self.holidays.to_string()),
            StatItem::new(StatKind::RequiredOfficeDays, self.required_working_days.to_string()),
            StatItem::new(StatKind::Attendance, format!("{}%", self.attendance_percentage)),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    TotalWorkingDays,
    Holidays,
    RequiredOfficeDays,
    Attendance,
}

impl StatKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::TotalWorkingDays => "Total Working Days",
            StatKind::Holidays => "Total Holidays",
            StatKind::RequiredOfficeDays => "Required Office Days",
            StatKind::Attendance => "Attendance",
        }
    }
}

/// One labelled figure, value already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub kind: StatKind,
    pub value: String,
}

impl StatItem {
    fn new(kind: StatKind, value: String) -> Self {
        Self { kind, value }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Message shown under the stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    NeedMore(u32),
    RequirementMet,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NeedMore(days) => write!(
                f,
                "You need {} more office day{} to meet the {}% requirement.",
                days,
                if *days == 1 { "" } else { "s" },
                REQUIRED_ATTENDANCE_PERCENT
            ),
            Advisory::RequirementMet => {
                write!(f, "You have met the attendance requirement for this month! 🎉")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn april_2025() -> ViewMonth {
        // 30 days, 8 of them on weekends
        ViewMonth::new(2025, 4).unwrap()
    }

    fn weekdays(view: ViewMonth) -> Vec<DateKey> {
        view.days().filter(|d| !is_weekend(*d)).map(DateKey::new).collect()
    }

    fn key(y: i32, m: u32, d: u32) -> DateKey {
        DateKey::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_empty_selection() {
        let stats = AttendanceStats::compute(april_2025(), &SelectionState::new());

        assert_eq!(stats.total_working_days, 22);
        assert_eq!(stats.holidays, 0);
        assert_eq!(stats.required_working_days, 14);
        assert_eq!(stats.current_attendance, 0);
        assert_eq!(stats.attendance_percentage, 0);
        assert_eq!(stats.remaining_days, 14);
    }

    #[test]
    fn test_ten_working_days_no_holidays() {
        let selection = weekdays(april_2025())
            .into_iter()
            .take(10)
            .fold(SelectionState::new(), |s, k| s.toggle_working(k));

        let stats = AttendanceStats::compute(april_2025(), &selection);
        assert_eq!(stats.total_working_days, 22);
        assert_eq!(stats.required_working_days, 14);
        assert_eq!(stats.current_attendance, 10);
        assert_eq!(stats.attendance_percentage, 45);
        assert_eq!(stats.remaining_days, 4);
        assert_eq!(stats.advisory(), Advisory::NeedMore(4));
    }

    #[test]
    fn test_two_holidays_full_attendance() {
        let days = weekdays(april_2025());
        let mut selection = SelectionState::new();
        for (i, k) in days.into_iter().enumerate() {
            selection = if i < 2 {
                selection.toggle_holiday(k)
            } else {
                selection.toggle_working(k)
            };
        }

        let stats = AttendanceStats::compute(april_2025(), &selection);
        assert_eq!(stats.holidays, 2);
        assert_eq!(stats.current_attendance, 20);
        assert_eq!(stats.required_working_days, 12);
        assert_eq!(stats.attendance_percentage, 100);
        assert_eq!(stats.remaining_days, 0);
        assert!(stats.requirement_met());
        assert_eq!(stats.advisory(), Advisory::RequirementMet);
    }

    #[test]
    fn test_every_weekday_a_holiday() {
        let selection = weekdays(april_2025())
            .into_iter()
            .fold(SelectionState::new(), |s, k| s.toggle_holiday(k));

        let stats = AttendanceStats::compute(april_2025(), &selection);
        assert_eq!(stats.holidays, 22);
        assert_eq!(stats.required_working_days, 0);
        assert_eq!(stats.attendance_percentage, 0);
        assert_eq!(stats.remaining_days, 0);
    }

    #[test]
    fn test_marks_outside_month_or_on_weekends_ignored() {
        let selection = SelectionState::new()
            .toggle_working(key(2025, 3, 31)) // previous month
            .toggle_holiday(key(2025, 5, 1)) // next month
            .toggle_working(key(2025, 4, 5)) // Saturday
            .toggle_holiday(key(2025, 4, 6)) // Sunday
            .toggle_working(key(2025, 4, 7));

        let stats = AttendanceStats::compute(april_2025(), &selection);
        assert_eq!(stats.holidays, 0);
        assert_eq!(stats.current_attendance, 1);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // June 2025 has 21 weekdays; 13 holidays leave 8 countable and
        // one attended day is exactly 12.5%
        let view = ViewMonth::new(2025, 6).unwrap();
        let days = weekdays(view);
        assert_eq!(days.len(), 21);

        let mut selection = SelectionState::new();
        for k in &days[..13] {
            selection = selection.toggle_holiday(*k);
        }
        selection = selection.toggle_working(days[13]);

        let stats = AttendanceStats::compute(view, &selection);
        assert_eq!(stats.attendance_percentage, 13);
        assert_eq!(stats.required_working_days, 5); // ceil(4.8)
    }

    #[test]
    fn test_advisory_wording() {
        assert_eq!(
            Advisory::NeedMore(1).to_string(),
            "You need 1 more office day to meet the 60% requirement."
        );
        assert_eq!(
            Advisory::NeedMore(4).to_string(),
            "You need 4 more office days to meet the 60% requirement."
        );
        assert_eq!(
            Advisory::RequirementMet.to_string(),
            "You have met the attendance requirement for this month! 🎉"
        );
    }

    #[test]
    fn test_items_labels_and_values() {
        let stats = AttendanceStats::compute(april_2025(), &SelectionState::new());
        let items = stats.items();

        let labels: Vec<_> = items.iter().map(|i| i.label()).collect();
        assert_eq!(
            labels,
            vec!["Total Working Days", "Total Holidays", "Required Office Days", "Attendance"]
        );
        assert_eq!(items[0].value, "22");
        assert_eq!(items[3].value, "0%");
    }

    #[test]
    fn test_stats_json_shape() {
        let stats = AttendanceStats::compute(april_2025(), &SelectionState::new());
        let json = serde_json::to_value(stats).unwrap();

        assert_eq!(json["total_working_days"], 22);
        assert_eq!(json["required_working_days"], 14);
        assert_eq!(json["attendance_percentage"], 0);
    }

    #[test]
    fn test_required_share_is_sixty_percent() {
        assert_eq!(REQUIRED_ATTENDANCE_RATIO, 0.6);
        assert_eq!(REQUIRED_ATTENDANCE_PERCENT, 60);
    }
}
