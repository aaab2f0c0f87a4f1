pub mod calendar;
pub mod header;
pub mod stats_panel;
