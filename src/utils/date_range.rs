use chrono::{Datelike, NaiveDate};

/// Renders a leave period for display.
///
/// A single day reads `Dec 10, 2025`; a span reads `Dec 20-22, 2025`. Spans
/// always print the start month and the end year, so `Dec 30-2, 2026` is what
/// a request crossing into January looks like.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return start.format("%b %-d, %Y").to_string();
    }

    format!("{}-{}, {}", start.format("%b %-d"), end.day(), end.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_day() {
        assert_eq!(format_date_range(d(2025, 12, 10), d(2025, 12, 10)), "Dec 10, 2025");
        assert_eq!(format_date_range(d(2026, 3, 1), d(2026, 3, 1)), "Mar 1, 2026");
    }

    #[test]
    fn span_within_a_month() {
        assert_eq!(format_date_range(d(2025, 12, 20), d(2025, 12, 22)), "Dec 20-22, 2025");
    }

    #[test]
    fn span_across_year_end_keeps_start_month() {
        assert_eq!(format_date_range(d(2025, 12, 30), d(2026, 1, 2)), "Dec 30-2, 2026");
    }
}
