use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Next Friday counting from `today`; a Friday maps to itself.
/// Delivery rounds go out once a week.
pub fn next_friday(today: NaiveDate) -> NaiveDate {
    let days_ahead = (Weekday::Fri.num_days_from_monday() + 7
        - today.weekday().num_days_from_monday())
        % 7;

    today + Days::new(days_ahead as u64)
}
