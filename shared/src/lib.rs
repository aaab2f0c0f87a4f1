//! Domain logic for the office attendance tracker.
//!
//! The frontend renders from the types in this crate and feeds user input
//! back through [`AttendanceSession`]. No function here reads a clock; the
//! current date and click timestamps are always passed in.

pub mod calendar;
pub mod click;
pub mod date_key;
pub mod selection;
pub mod stats;
pub mod tracker;

pub use calendar::{
    is_weekend, CalendarDay, CalendarError, CalendarGrid, ViewMonth, WEEKDAY_LABELS,
};
pub use click::{ClickConfig, ClickKind, ClickTimer};
pub use date_key::{DateKey, DateKeyError};
pub use selection::{DayMark, SelectionState};
pub use stats::{
    Advisory, AttendanceStats, StatItem, StatKind,
    REQUIRED_ATTENDANCE_PERCENT, REQUIRED_ATTENDANCE_RATIO,
};
pub use tracker::{AttendanceEvent, AttendanceSession, AttendanceTracker};
