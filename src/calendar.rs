//! Due-date generation with day-of-month clamping.

use chrono::{Datelike, NaiveDate};

use crate::error::{ScheduleError, ScheduleResult};

/// Number of days in `month` of `year`.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year()) => 29,
        2 => 28,
        _ => unreachable!("month out of range"),
    }
}

/// The `payment_day`-th day of the month `months_ahead` months after the
/// month of `anchor`, clamped to the last day of short months.
///
/// Clamping never rolls into the next month: payment day 31 in April falls
/// due on April 30.
fn due_date_in_month(
    anchor: NaiveDate,
    months_ahead: u32,
    payment_day: u32,
) -> ScheduleResult<NaiveDate> {
    let total_months = anchor.year() as i64 * 12 + anchor.month() as i64 - 1 + months_ahead as i64;
    let year = (total_months / 12) as i32;
    let month = (total_months % 12 + 1) as u32;
    let day = payment_day.min(days_in_month(year, month));

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::InvalidTerm {
        term_months: months_ahead,
        deferment_months: 0,
    })
}

/// Generates the ordered due dates of all `term_months` periods.
///
/// Period k (1-based) falls due on the `payment_day`-th of the month k
/// months after the start month, so the first period spans from the start
/// date to the first due date and can be shorter or longer than one full
/// month. Interest accrual uses the actual elapsed days, never an assumed
/// 30-day month.
///
/// # Errors
///
/// `InvalidPaymentDay` if `payment_day` is outside 1..=31; `InvalidTerm`
/// if the dates run past the supported calendar range.
pub fn due_dates(
    start_date: NaiveDate,
    payment_day: u32,
    term_months: u32,
) -> ScheduleResult<Vec<NaiveDate>> {
    if payment_day == 0 || payment_day > 31 {
        return Err(ScheduleError::InvalidPaymentDay { day: payment_day });
    }

    (1..=term_months)
        .map(|k| due_date_in_month(start_date, k, payment_day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_period_is_month_after_start() {
        let dates = due_dates(date(2023, 7, 14), 20, 3).unwrap();
        assert_eq!(
            dates,
            vec![date(2023, 8, 20), date(2023, 9, 20), date(2023, 10, 20)]
        );
    }

    #[test]
    fn test_first_period_when_start_day_is_after_payment_day() {
        let dates = due_dates(date(2023, 7, 25), 20, 1).unwrap();
        assert_eq!(dates, vec![date(2023, 8, 20)]);
    }

    #[rstest]
    #[case(date(2024, 1, 10), 31, vec![
        date(2024, 2, 29), date(2024, 3, 31), date(2024, 4, 30), date(2024, 5, 31)
    ])]
    #[case(date(2023, 1, 10), 31, vec![
        date(2023, 2, 28), date(2023, 3, 31), date(2023, 4, 30), date(2023, 5, 31)
    ])]
    #[case(date(2023, 11, 5), 30, vec![
        date(2023, 12, 30), date(2024, 1, 30), date(2024, 2, 29), date(2024, 3, 30)
    ])]
    fn test_clamps_to_short_months_without_rollover(
        #[case] start: NaiveDate,
        #[case] payment_day: u32,
        #[case] expected: Vec<NaiveDate>,
    ) {
        let dates = due_dates(start, payment_day, expected.len() as u32).unwrap();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_dates_strictly_increase_across_year_boundary() {
        let dates = due_dates(date(2023, 10, 2), 15, 6).unwrap();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(dates[2], date(2024, 1, 15));
    }

    #[rstest]
    #[case(0)]
    #[case(32)]
    fn test_rejects_payment_day_out_of_range(#[case] day: u32) {
        let err = due_dates(date(2023, 7, 14), day, 12).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidPaymentDay { day });
    }
}
