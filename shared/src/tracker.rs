//! Widget state and its transitions.
//!
//! [`AttendanceTracker`] is the state the view renders from. It only
//! changes through [`AttendanceTracker::reduce`], which takes an event and
//! returns the next state. [`AttendanceSession`] is the application root:
//! it owns the tracker together with the click timers, which are
//! bookkeeping only and never trigger a re-render themselves.

use crate::calendar::{is_weekend, CalendarGrid, ViewMonth};
use crate::click::{ClickConfig, ClickKind, ClickTimer};
use crate::date_key::DateKey;
use crate::selection::{DayMark, SelectionState};
use crate::stats::AttendanceStats;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceEvent {
    /// A classified click on a day cell
    Mark { date: NaiveDate, kind: ClickKind },
    PreviousMonth,
    NextMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceTracker {
    view: ViewMonth,
    selection: SelectionState,
}

impl AttendanceTracker {
    pub fn new(view: ViewMonth) -> Self {
        Self {
            view,
            selection: SelectionState::default(),
        }
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Whether a click on `date` may change the selection: weekdays of the
    /// displayed month only.
    pub fn accepts(&self, date: NaiveDate) -> bool {
        self.view.contains(date) && !is_weekend(date)
    }

    /// Apply `event` and return the resulting state.
    ///
    /// Navigation never touches the selection, so marks made in one month
    /// are still there when the user comes back to it.
    pub fn reduce(&self, event: AttendanceEvent) -> Self {
        match event {
            AttendanceEvent::Mark { date, kind } => {
                if !self.accepts(date) {
                    return self.clone();
                }
                let mark = match kind {
                    ClickKind::Single => DayMark::Working,
                    ClickKind::Double => DayMark::Holiday,
                };
                Self {
                    view: self.view,
                    selection: self.selection.toggle(DateKey::new(date), mark),
                }
            }
            AttendanceEvent::PreviousMonth => self.with_view(self.view.previous()),
            AttendanceEvent::NextMonth => self.with_view(self.view.next()),
        }
    }

    fn with_view(&self, view: ViewMonth) -> Self {
        tracing::debug!(from = %self.view.title(), to = %view.title(), "month changed");
        Self {
            view,
            selection: self.selection.clone(),
        }
    }

    pub fn grid(&self, today: NaiveDate) -> CalendarGrid {
        CalendarGrid::build(self.view, today)
    }

    pub fn stats(&self) -> AttendanceStats {
        AttendanceStats::compute(self.view, &self.selection)
    }
}

/// Everything the widget keeps for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct AttendanceSession {
    tracker: AttendanceTracker,
    clicks: ClickTimer,
}

impl AttendanceSession {
    /// Start a session showing the month that contains `today`.
    pub fn new(today: NaiveDate, config: ClickConfig) -> Self {
        Self {
            tracker: AttendanceTracker::new(ViewMonth::containing(today)),
            clicks: ClickTimer::new(config),
        }
    }

    pub fn tracker(&self) -> &AttendanceTracker {
        &self.tracker
    }

    pub fn selection(&self) -> &SelectionState {
        self.tracker.selection()
    }

    pub fn view(&self) -> ViewMonth {
        self.tracker.view()
    }

    pub fn clicks(&self) -> &ClickTimer {
        &self.clicks
    }

    /// Handle a click on the cell for `date` made at `now_ms`.
    ///
    /// Clicks on weekends or on filler days from neighbouring months are
    /// dropped without touching the selection or the click timers.
    pub fn on_date_activated(&mut self, date: NaiveDate, now_ms: u64) -> Option<ClickKind> {
        if !self.tracker.accepts(date) {
            tracing::trace!(%date, "ignoring click on unselectable day");
            return None;
        }

        let key = DateKey::new(date);
        let kind = self.clicks.classify(key, now_ms);
        tracing::debug!(%key, ?kind, "day clicked");

        self.tracker = self.tracker.reduce(AttendanceEvent::Mark { date, kind });
        Some(kind)
    }

    pub fn go_to_previous_month(&mut self) {
        self.tracker = self.tracker.reduce(AttendanceEvent::PreviousMonth);
    }

    pub fn go_to_next_month(&mut self) {
        self.tracker = self.tracker.reduce(AttendanceEvent::NextMonth);
    }

    pub fn grid(&self, today: NaiveDate) -> CalendarGrid {
        self.tracker.grid(today)
    }

    pub fn stats(&self) -> AttendanceStats {
        self.tracker.stats()
    }
}
