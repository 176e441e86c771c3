//! Upcoming-birthday report.

use crate::models::Record;
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

/// How many days past today the report looks ahead (inclusive).
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Group the birthdays falling within the next week by weekday.
///
/// Each record with a birthday whose next occurrence is between `today` and
/// `today + 7` days (both inclusive) is put in the bucket of that weekday.
/// Saturday and Sunday birthdays are celebrated on Monday. Buckets come out
/// in the order they were first filled, formatted as
/// `"{Weekday}: {name}, {name}"`.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut buckets: Vec<(&'static str, Vec<&str>)> = Vec::new();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let Some(next) = birthday.next_occurrence(today) else {
            warn!(
                contact = %record.name(),
                birthday = %birthday,
                "Birthday does not occur this year, skipping"
            );
            continue;
        };

        let delta = (next - today).num_days();
        if !(0..=BIRTHDAY_WINDOW_DAYS).contains(&delta) {
            continue;
        }

        let day = celebration_day(next.weekday());
        match buckets.iter_mut().find(|(name, _)| *name == day) {
            Some((_, names)) => names.push(record.name().as_str()),
            None => buckets.push((day, vec![record.name().as_str()])),
        }
    }

    buckets
        .into_iter()
        .map(|(day, names)| format!("{}: {}", day, names.join(", ")))
        .collect()
}

/// English name of the day a birthday is celebrated on.
fn celebration_day(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon | Weekday::Sat | Weekday::Sun => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
    }
}
