pub mod use_attendance;
