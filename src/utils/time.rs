use chrono::{Datelike, Duration, NaiveDate};

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Monday of the week containing the given date
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(
        date.weekday().num_days_from_monday() as i64,
    ))
    .unwrap_or(date)
}

/// The canonical seven-day week (Monday to Sunday) starting at `monday`
pub fn week_dates(monday: NaiveDate) -> Vec<NaiveDate> {
    (0..7)
        .map(|i| {
            monday
                .checked_add_signed(Duration::days(i))
                .unwrap_or(monday)
        })
        .collect()
}

/// Date range for a weekly schedule (Monday to Sunday), formatted YYYY-MM-DD
pub fn weekly_date_range(date: NaiveDate) -> (String, String) {
    let monday = week_monday(date);
    let sunday = monday
        .checked_add_signed(Duration::days(6))
        .unwrap_or(monday);

    let start_date = monday.format("%Y-%m-%d").to_string();
    let end_date = sunday.format("%Y-%m-%d").to_string();

    (start_date, end_date)
}

/// Short weekday label ("Mon", "Tue", ...) for display
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
