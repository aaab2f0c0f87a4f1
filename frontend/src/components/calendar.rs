use chrono::NaiveDate;
use shared::{CalendarDay, CalendarGrid, DayMark, SelectionState, WEEKDAY_LABELS};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub title: String,
    pub grid: CalendarGrid,
    pub selection: SelectionState,
    pub on_day_click: Callback<NaiveDate>,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
}

/// CSS classes for a day cell.
pub fn day_class(day: &CalendarDay, mark: Option<DayMark>) -> String {
    let mut classes = vec!["calendar-day"];
    if !day.in_month {
        classes.push("outside-month");
    }
    if day.is_weekend {
        classes.push("weekend");
    }
    if day.is_selectable() {
        classes.push("selectable");
    } else {
        classes.push("disabled");
    }
    match mark {
        Some(DayMark::Working) => classes.push("working-day"),
        Some(DayMark::Holiday) => classes.push("holiday"),
        None => {}
    }
    if day.is_today {
        classes.push("today");
    }
    classes.join(" ")
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_days = props.grid.days.iter().map(|day| {
        let class = day_class(day, day.display_mark(&props.selection));
        let onclick = {
            let on_day_click = props.on_day_click.clone();
            let date = day.date;
            Callback::from(move |_: MouseEvent| on_day_click.emit(date))
        };

        html! {
            <div key={day.key.to_string()} class={class} {onclick} title={day.key.to_string()}>
                <div class="day-number">{day.day}</div>
            </div>
        }
    });

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <h2>{&props.title}</h2>
                <div class="calendar-nav">
                    <button
                        class="nav-button"
                        onclick={props.on_prev_month.clone()}
                        title="Previous month"
                    >
                        {"‹"}
                    </button>
                    <button
                        class="nav-button"
                        onclick={props.on_next_month.clone()}
                        title="Next month"
                    >
                        {"›"}
                    </button>
                </div>
            </div>

            <div class="calendar-weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="weekday">{*label}</div>
                })}
            </div>
            <div class="calendar-grid">
                {for calendar_days}
            </div>

            <div class="calendar-legend">
                <div class="legend-item">
                    <div class="legend-swatch working-day"></div>
                    <span>{"Working Day"}</span>
                </div>
                <div class="legend-item">
                    <div class="legend-swatch holiday"></div>
                    <span>{"Holiday"}</span>
                </div>
                <div class="legend-item">
                    <div class="legend-swatch weekend"></div>
                    <span>{"Weekend"}</span>
                </div>
            </div>
        </div>
    }
}
