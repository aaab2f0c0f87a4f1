mod components;
mod hooks;
mod services;

use components::calendar::Calendar;
use components::header::Header;
use components::stats_panel::StatsPanel;
use hooks::use_attendance::use_attendance;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let attendance = use_attendance(None);
    let state = attendance.state;
    let actions = attendance.actions;

    html! {
        <div class="app">
            <Header />
            <main class="main">
                <div class="container layout">
                    <section class="calendar-section">
                        <Calendar
                            title={state.view.title()}
                            grid={state.grid}
                            selection={state.selection}
                            on_day_click={actions.on_date_activated}
                            on_prev_month={actions.prev_month}
                            on_next_month={actions.next_month}
                        />
                    </section>
                    <aside class="stats-section">
                        <StatsPanel stats={state.stats} />
                    </aside>
                </div>
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting attendance tracker");

    match gloo::utils::document().get_element_by_id("app") {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
}
