//! Single- vs double-click classification for day cells.

use crate::date_key::DateKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for click classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickConfig {
    /// Two clicks on the same day closer than this are a double click
    pub double_click_window_ms: u64,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            double_click_window_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickKind {
    Single,
    Double,
}

/// Last click time per day, in epoch milliseconds.
///
/// The caller supplies the timestamp on every click; nothing here reads a
/// clock. Timers are kept per day so quick clicks on different days never
/// pair up into a double click.
#[derive(Debug, Clone, Default)]
pub struct ClickTimer {
    config: ClickConfig,
    last_click: HashMap<DateKey, u64>,
}

impl ClickTimer {
    pub fn new(config: ClickConfig) -> Self {
        Self {
            config,
            last_click: HashMap::new(),
        }
    }

    pub fn config(&self) -> ClickConfig {
        self.config
    }

    /// Classify a click on `key` made at `now_ms` and record it.
    ///
    /// `now_ms` must be milliseconds since the Unix epoch. A day that was
    /// never clicked reads as timestamp 0, so a clock starting near zero
    /// would turn every first click into a double click. A double click
    /// resets the day's timer to 0 so a quick third click starts over as a
    /// single click.
    pub fn classify(&mut self, key: DateKey, now_ms: u64) -> ClickKind {
        let last = self.last_click(&key);
        if now_ms.saturating_sub(last) < self.config.double_click_window_ms {
            self.last_click.insert(key, 0);
            ClickKind::Double
        } else {
            self.last_click.insert(key, now_ms);
            ClickKind::Single
        }
    }

    /// Timestamp of the last recorded click on `key`, 0 if none.
    pub fn last_click(&self, key: &DateKey) -> u64 {
        self.last_click.get(key).copied().unwrap_or(0)
    }
}
