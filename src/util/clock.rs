//! Time-of-day stamps for chat entries.
//!
//! In the browser the stamp uses the user's locale via
//! `Date.toLocaleTimeString`. Elsewhere (tests, non-`csr` builds) it falls
//! back to a 12-hour `chrono` rendering of local time.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{NaiveTime, Timelike};

/// Current local time of day, formatted for display.
pub fn local_time_stamp() -> String {
    #[cfg(feature = "csr")]
    {
        let locale = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| "en-US".to_owned());
        String::from(js_sys::Date::new_0().to_locale_time_string(&locale))
    }
    #[cfg(not(feature = "csr"))]
    {
        format_clock(chrono::Local::now().time())
    }
}

/// Render `time` as `h:mm:ss AM/PM`.
#[must_use]
pub fn format_clock(time: NaiveTime) -> String {
    let time = time.with_nanosecond(0).unwrap_or(time);
    time.format("%-I:%M:%S %p").to_string()
}
