use chrono::{Months, NaiveDate};

/// Whole calendar days from `today` until `date`; negative once `date` has passed.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Same calendar day one year later, clamped to the end of the month
/// (29 February rolls to 28 February in non-leap years).
pub fn add_one_year(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn days_until_counts_calendar_days() {
        let today = date(2025, 9, 24);
        assert_eq!(days_until(date(2025, 9, 24), today), 0);
        assert_eq!(days_until(date(2025, 10, 24), today), 30);
        assert_eq!(days_until(date(2025, 9, 23), today), -1);
    }

    #[test]
    fn leap_day_clamps_to_end_of_february() {
        assert_eq!(add_one_year(date(2024, 2, 29)), date(2025, 2, 28));
        assert_eq!(add_one_year(date(2027, 2, 28)), date(2028, 2, 28));
        assert_eq!(add_one_year(date(2025, 12, 31)), date(2026, 12, 31));
    }
}
