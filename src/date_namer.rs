//! Daily note naming
//!
//! Maps the current local date to the `DD-MM-YYYY` display string and the
//! `DD-MM-YYYY.md` file name. Always recomputed, never cached.

use chrono::{Datelike, Local, NaiveDate};

use crate::constants as C;

/// Display date and file name for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyName {
    /// `DD-MM-YYYY`
    pub display_date: String,
    /// `DD-MM-YYYY.md`
    pub file_name: String,
}

impl DailyName {
    /// Name for today's local date (honours MOMENT_TODAY)
    pub fn today() -> Self {
        Self::for_date(today())
    }

    /// Name for a given date
    pub fn for_date(date: NaiveDate) -> Self {
        // Year is printed bare: no zero padding, no sign
        let display_date = format!("{:02}-{:02}-{}", date.day(), date.month(), date.year());
        let file_name = format!("{}{}", display_date, C::MARKDOWN_EXTENSION);
        Self { display_date, file_name }
    }
}

/// Current local date, allowing override via MOMENT_TODAY for testing
fn today() -> NaiveDate {
    if let Ok(value) = std::env::var(C::ENV_TODAY) {
        match NaiveDate::parse_from_str(value.trim(), C::DATE_OVERRIDE_FORMAT) {
            Ok(date) => return date,
            Err(e) => tracing::warn!("ignoring {}={:?}: {}", C::ENV_TODAY, value, e),
        }
    }
    Local::now().date_naive()
}
