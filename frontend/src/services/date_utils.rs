use chrono::NaiveDate;
use js_sys::Date;

/// Today's local calendar date according to the browser.
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Milliseconds since the epoch, used to time clicks
pub fn now_ms() -> u64 {
    Date::now() as u64
}
