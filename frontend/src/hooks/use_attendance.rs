use chrono::NaiveDate;
use shared::{
    AttendanceSession, AttendanceStats, CalendarGrid, ClickConfig, SelectionState, ViewMonth,
};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils;
use crate::services::logging::Logger;

/// Configuration for the attendance widget
#[derive(Clone, Copy, PartialEq)]
pub struct AttendanceConfig {
    pub click: ClickConfig,
    /// Log month changes to the console
    pub log_transitions: bool,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            click: ClickConfig::default(),
            log_transitions: true,
        }
    }
}

/// What the view needs for one render
#[derive(Clone, PartialEq)]
pub struct AttendanceState {
    pub view: ViewMonth,
    pub grid: CalendarGrid,
    pub selection: SelectionState,
    pub stats: AttendanceStats,
}

impl AttendanceState {
    pub fn from_session(session: &AttendanceSession, today: NaiveDate) -> Self {
        Self {
            view: session.view(),
            grid: session.grid(today),
            selection: session.selection().clone(),
            stats: session.stats(),
        }
    }
}

#[derive(Clone)]
pub struct UseAttendanceActions {
    pub on_date_activated: Callback<NaiveDate>,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

pub struct UseAttendanceResult {
    pub state: AttendanceState,
    pub actions: UseAttendanceActions,
}

/// Hook owning the attendance session for the lifetime of the page.
///
/// The session lives in a mutable ref so click timers can be updated
/// without a render; only clicks that change the selection and month
/// navigation force an update. Click details are logged by the session
/// itself.
#[hook]
pub fn use_attendance(config: Option<AttendanceConfig>) -> UseAttendanceResult {
    let config = config.unwrap_or_default();
    let logger = Logger::new("attendance", config.log_transitions);
    let today = *use_state(date_utils::today);
    let session = use_mut_ref(move || AttendanceSession::new(today, config.click));
    let trigger = use_force_update();

    let on_date_activated = {
        let session = session.clone();
        let trigger = trigger.clone();
        use_callback((), move |date: NaiveDate, _| {
            let kind = session.borrow_mut().on_date_activated(date, date_utils::now_ms());
            if kind.is_some() {
                trigger.force_update();
            }
        })
    };

    let prev_month = {
        let session = session.clone();
        let trigger = trigger.clone();
        use_callback(logger, move |_: MouseEvent, logger| {
            session.borrow_mut().go_to_previous_month();
            logger.info(&format!("showing {}", session.borrow().view().title()));
            trigger.force_update();
        })
    };

    let next_month = {
        let session = session.clone();
        let trigger = trigger.clone();
        use_callback(logger, move |_: MouseEvent, logger| {
            session.borrow_mut().go_to_next_month();
            logger.info(&format!("showing {}", session.borrow().view().title()));
            trigger.force_update();
        })
    };

    let state = AttendanceState::from_session(&session.borrow(), today);

    let actions = UseAttendanceActions {
        on_date_activated,
        prev_month,
        next_month,
    };

    UseAttendanceResult { state, actions }
}
