use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// Midnight UTC on the first day of the given month.
pub fn month_start(year: i32, month: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    month_start(now.year(), now.month())
}

/// Moves `(year, month)` by `delta` months, either direction.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + delta;
    (index.div_euclid(12), (index.rem_euclid(12) + 1) as u32)
}
