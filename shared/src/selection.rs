//! Working-day / holiday marks.
//!
//! A day carries at most one mark, so the "working days" and "holidays"
//! views of the selection can never overlap.

use crate::date_key::DateKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What the user marked a day as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMark {
    /// Attended in the office (single click)
    Working,
    /// Exempt from the attendance requirement (double click)
    Holiday,
}

/// Marks for every day the user has touched, across all months.
///
/// Transitions never mutate in place: each toggle returns a new state so
/// the previous value can be compared against for re-rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    marks: BTreeMap<DateKey, DayMark>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self, key: &DateKey) -> Option<DayMark> {
        self.marks.get(key).copied()
    }

    pub fn is_working_day(&self, key: &DateKey) -> bool {
        self.mark(key) == Some(DayMark::Working)
    }

    pub fn is_holiday(&self, key: &DateKey) -> bool {
        self.mark(key) == Some(DayMark::Holiday)
    }

    pub fn working_days(&self) -> impl Iterator<Item = &DateKey> {
        self.keys_marked(DayMark::Working)
    }

    pub fn holidays(&self) -> impl Iterator<Item = &DateKey> {
        self.keys_marked(DayMark::Holiday)
    }

    fn keys_marked(&self, wanted: DayMark) -> impl Iterator<Item = &DateKey> {
        self.marks
            .iter()
            .filter(move |(_, mark)| **mark == wanted)
            .map(|(key, _)| key)
    }

    /// Toggle `key` in or out of the working days.
    pub fn toggle_working(&self, key: DateKey) -> Self {
        self.toggle(key, DayMark::Working)
    }

    /// Toggle `key` in or out of the holidays.
    pub fn toggle_holiday(&self, key: DateKey) -> Self {
        self.toggle(key, DayMark::Holiday)
    }

    /// Clears `key` if it already carries `mark`, otherwise sets it,
    /// replacing whatever other mark it had.
    pub fn toggle(&self, key: DateKey, mark: DayMark) -> Self {
        let mut marks = self.marks.clone();
        if marks.get(&key) == Some(&mark) {
            marks.remove(&key);
        } else {
            marks.insert(key, mark);
        }
        Self { marks }
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_toggle_working_inserts_then_removes() {
        let state = SelectionState::new().toggle_working(key("2025-06-10"));
        assert!(state.is_working_day(&key("2025-06-10")));

        let state = state.toggle_working(key("2025-06-10"));
        assert!(!state.is_working_day(&key("2025-06-10")));
        assert!(state.is_empty());
    }

    #[test]
    fn test_holiday_replaces_working_day() {
        let state = SelectionState::new()
            .toggle_working(key("2025-06-10"))
            .toggle_holiday(key("2025-06-10"));

        assert!(state.is_holiday(&key("2025-06-10")));
        assert!(!state.is_working_day(&key("2025-06-10")));
        assert_eq!(state.working_days().count(), 0);
        assert_eq!(state.holidays().count(), 1);
    }

    #[test]
    fn test_working_day_replaces_holiday() {
        let state = SelectionState::new()
            .toggle_holiday(key("2025-06-10"))
            .toggle_working(key("2025-06-10"));

        assert_eq!(state.mark(&key("2025-06-10")), Some(DayMark::Working));
        assert_eq!(state.holidays().count(), 0);
    }

    #[test]
    fn test_toggle_leaves_previous_state_untouched() {
        let before = SelectionState::new().toggle_working(key("2025-06-10"));
        let after = before.toggle_holiday(key("2025-06-11"));

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_ne!(before, after);
    }

    #[test]
    fn test_views_stay_disjoint() {
        let keys = ["2025-06-02", "2025-06-03", "2025-06-04"];
        let mut state = SelectionState::new();
        for (i, k) in keys.iter().cycle().take(20).enumerate() {
            state = if i % 3 == 0 {
                state.toggle_holiday(key(k))
            } else {
                state.toggle_working(key(k))
            };
            for w in state.working_days() {
                assert!(!state.holidays().any(|h| h == w), "{} in both views", w);
            }
        }
    }
}
