use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// Goal creation dates and deadline urgency are computed at day granularity,
/// so the clock only ever hands out dates, never instants.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date. Useful for tests and replaying a view
/// as it looked on a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Whole calendar days from `from` until `to`. Negative when `to` is in the past.
pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_future_and_past() {
        assert_eq!(days_until(date(2024, 1, 1), date(2024, 1, 11)), 10);
        assert_eq!(days_until(date(2024, 1, 11), date(2024, 1, 6)), -5);
        assert_eq!(days_until(date(2024, 3, 1), date(2024, 3, 1)), 0);
    }

    #[test]
    fn test_days_until_crosses_leap_day() {
        assert_eq!(days_until(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_until(date(2023, 2, 28), date(2023, 3, 1)), 1);
    }

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let clock = FixedClock(date(2025, 6, 30));
        assert_eq!(clock.today(), date(2025, 6, 30));
        assert_eq!(clock.today(), clock.today());
    }
}
