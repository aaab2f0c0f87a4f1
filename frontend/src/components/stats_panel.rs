use shared::{AttendanceStats, StatKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: AttendanceStats,
}

fn stat_icon(kind: StatKind) -> &'static str {
    match kind {
        StatKind::TotalWorkingDays => "📅",
        StatKind::Holidays => "🕒",
        StatKind::RequiredOfficeDays => "🏢",
        StatKind::Attendance => "%",
    }
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let advisory_class = if props.stats.requirement_met() {
        "advisory met"
    } else {
        "advisory pending"
    };

    html! {
        <div class="stats-panel">
            <h2>{"Attendance Stats"}</h2>
            <div class="stats-list">
                {for props.stats.items().into_iter().map(|item| {
                    let label = item.label();
                    html! {
                        <div key={label} class="stat-item">
                            <div class="stat-icon">{stat_icon(item.kind)}</div>
                            <div>
                                <p class="stat-label">{label}</p>
                                <p class="stat-value">{item.value}</p>
                            </div>
                        </div>
                    }
                })}
            </div>
            <div class={advisory_class}>
                <p>{props.stats.advisory().to_string()}</p>
            </div>
        </div>
    }
}
