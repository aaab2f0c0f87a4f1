use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>
                    <span class="header-icon">{"👤"}</span>
                    {"Attendance Tracker"}
                </h1>
                <p class="header-hint">
                    {"Single click to mark a working day • Double click to mark a holiday"}
                </p>
            </div>
        </header>
    }
}
