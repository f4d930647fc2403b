/// Relative "time since" formatting for repository timestamps.
///
/// Elapsed time is computed by subtracting calendar fields, not by dividing an
/// exact duration:
///
/// 1. `years`, `months` and `days` are the differences of the year, month and
///    day-of-month fields of `now` and `then` (both in UTC).
/// 2. A negative day count borrows one month worth a flat 30 days.
/// 3. A negative month count borrows one year worth 12 months.
///
/// The flat 30-day borrow ignores the real length of the previous month, so
/// Jan 28 → Mar 5 reads "1 month 7 days" regardless of leap years.
use chrono::{DateTime, Datelike, Utc};

/// Days added to a negative day difference when borrowing a month.
const DAYS_PER_BORROWED_MONTH: i32 = 30;

/// Which unit spelling to use when formatting elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStyle {
    /// "2 years 1 month 3 days ago"
    #[default]
    Long,
    /// "2y 1m 3d ago"
    Short,
}

/// Elapsed calendar time between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl DurationParts {
    /// Compute the calendar difference from `then` to `now`.
    ///
    /// `then` is expected to be at or before `now`; a future `then` yields
    /// negative parts, which format as "today".
    #[must_use]
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let mut years = now.year() - then.year();
        #[allow(clippy::cast_possible_wrap)]
        let mut months = now.month() as i32 - then.month() as i32;
        #[allow(clippy::cast_possible_wrap)]
        let mut days = now.day() as i32 - then.day() as i32;

        if days < 0 {
            months -= 1;
            days += DAYS_PER_BORROWED_MONTH;
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years,
            months,
            days,
        }
    }

    /// Render the parts, omitting zero components. All-zero renders as "today".
    #[must_use]
    pub fn format(&self, style: TimeStyle) -> String {
        let units = [
            (self.years, "year", 'y'),
            (self.months, "month", 'm'),
            (self.days, "day", 'd'),
        ];

        let parts: Vec<String> = units
            .iter()
            .filter(|(value, _, _)| *value > 0)
            .map(|&(value, word, suffix)| match style {
                TimeStyle::Long => format!("{value} {word}{}", plural(value)),
                TimeStyle::Short => format!("{value}{suffix}"),
            })
            .collect();

        if parts.is_empty() {
            return "today".to_owned();
        }
        format!("{} ago", parts.join(" "))
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format the time elapsed from `then` to `now`.
#[must_use]
pub fn format_since(then: DateTime<Utc>, now: DateTime<Utc>, style: TimeStyle) -> String {
    DurationParts::between(then, now).format(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_same_instant_is_today() {
        let now = at(2024, 6, 15);
        assert_eq!(format_since(now, now, TimeStyle::Long), "today");
        assert_eq!(format_since(now, now, TimeStyle::Short), "today");
    }

    #[test]
    fn test_same_day_different_hour_is_today() {
        let then = Utc.with_ymd_and_hms(2024, 6, 15, 0, 1, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 0).unwrap();
        assert_eq!(format_since(then, now, TimeStyle::Long), "today");
    }

    #[test]
    fn test_years_and_days_without_borrow() {
        let then = at(2022, 3, 10);
        let now = at(2024, 3, 13);
        assert_eq!(
            DurationParts::between(then, now),
            DurationParts {
                years: 2,
                months: 0,
                days: 3
            }
        );
        assert_eq!(format_since(then, now, TimeStyle::Long), "2 years 3 days ago");
        assert_eq!(format_since(then, now, TimeStyle::Short), "2y 3d ago");
    }

    #[test]
    fn test_day_borrow_adds_flat_thirty_days() {
        // Feb 2023 has 28 days, so the true gap is 5 days; the borrow says 7.
        let then = at(2023, 1, 28);
        let now = at(2023, 2, 5);
        let parts = DurationParts::between(then, now);
        assert_eq!(
            parts,
            DurationParts {
                years: 0,
                months: 0,
                days: 7
            }
        );
        assert_eq!(parts.format(TimeStyle::Long), "7 days ago");
    }

    #[test]
    fn test_day_borrow_after_thirty_one_day_month() {
        // Dec 28 → Jan 5 is 8 real days; the flat borrow yields 7.
        let parts = DurationParts::between(at(2023, 12, 28), at(2024, 1, 5));
        assert_eq!(
            parts,
            DurationParts {
                years: 0,
                months: 0,
                days: 7
            }
        );
    }

    #[test]
    fn test_month_borrow_cascades_into_years() {
        let parts = DurationParts::between(at(2020, 11, 20), at(2024, 2, 10));
        assert_eq!(
            parts,
            DurationParts {
                years: 3,
                months: 2,
                days: 20
            }
        );
        assert_eq!(
            parts.format(TimeStyle::Long),
            "3 years 2 months 20 days ago"
        );
        assert_eq!(parts.format(TimeStyle::Short), "3y 2m 20d ago");
    }

    #[test]
    fn test_singular_units() {
        let parts = DurationParts::between(at(2023, 5, 1), at(2024, 6, 2));
        assert_eq!(parts.format(TimeStyle::Long), "1 year 1 month 1 day ago");
        assert_eq!(parts.format(TimeStyle::Short), "1y 1m 1d ago");
    }

    #[test]
    fn test_only_months() {
        let parts = DurationParts::between(at(2024, 1, 15), at(2024, 4, 15));
        assert_eq!(parts.format(TimeStyle::Long), "3 months ago");
        assert_eq!(parts.format(TimeStyle::Short), "3m ago");
    }

    #[test]
    fn test_future_timestamp_formats_as_today() {
        let parts = DurationParts::between(at(2025, 1, 1), at(2024, 1, 1));
        assert_eq!(parts.format(TimeStyle::Long), "today");
    }
}
