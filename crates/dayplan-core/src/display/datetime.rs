//! DateTime display utilities.
//!
//! Wrapper types formatting timestamps and calendar dates consistently across
//! every view.

use std::fmt;

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A plan date with its weekday, e.g. `Fri 2024-03-01`.
pub struct PlanDate<'a>(pub &'a Date);

impl fmt::Display for PlanDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_plan_date_includes_weekday() {
        assert_eq!(PlanDate(&date(2024, 3, 1)).to_string(), "Fri 2024-03-01");
    }
}
