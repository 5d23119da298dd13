//! Birthday arithmetic.
//!
//! Pure functions over `chrono::NaiveDate`. "Today" is always passed in so
//! results are reproducible.
//!
//! A Feb 29 birthday is observed on Mar 1 in years without a Feb 29.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The date a birthday falls on in `year`.
///
/// Returns `None` only when `year` is outside chrono's representable range.
pub fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// The next date on or after `today` on which `birthday` is observed.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year < today {
        occurrence_in(birthday, today.year().checked_add(1)?)
    } else {
        Some(this_year)
    }
}

/// Days remaining until the next occurrence of `birthday`, counted from
/// `today`. Always in `0..366`; 0 when the birthday is today.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::calendar::days_until_next;
///
/// let birthday = NaiveDate::from_ymd_opt(1990, 5, 21).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
/// assert_eq!(days_until_next(birthday, today), Some(1));
/// ```
pub fn days_until_next(birthday: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_occurrence(birthday, today).map(|next| (next - today).num_days())
}

/// The day to send congratulations for a birthday observed on `date`.
///
/// Weekend dates move forward to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date + Duration::days(shift)
}
