//! Human readable rendering of timestamps.

use chrono::{DateTime, Utc};

use crate::datatypes::Lang;

impl Lang {
    /// Long date with weekday and time of day, e.g. `Sunday, January 1, 2023 12:00 AM`.
    const fn long_datetime_pattern(self) -> &'static str {
        match self {
            Self::EnUS => "%A, %B %-d, %Y %-I:%M %p",
            Self::DeDE => "%A, %-d. %B %Y %H:%M",
        }
    }
}

/// Format a timestamp as a long localized date-time string.
///
/// Timestamps are shown in UTC so that the same account renders the same text
/// regardless of the machine it is viewed on.
#[must_use]
pub fn format_long_datetime(at: DateTime<Utc>, lang: Lang) -> String {
    at.format_localized(lang.long_datetime_pattern(), lang.locale())
        .to_string()
}
