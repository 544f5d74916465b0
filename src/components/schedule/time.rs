use crate::error::{validation_error, ScheduleResult};
use crate::utils::time::parse_time;

/// Minutes in one calendar day
pub const MINUTES_PER_DAY: i32 = 24 * 60;

fn parse_or_err(time_str: &str) -> ScheduleResult<(i32, i32)> {
    let (hour, minute) = parse_time(time_str)
        .ok_or_else(|| validation_error(&format!("Invalid time string: {:?}", time_str)))?;
    Ok((hour as i32, minute as i32))
}

/// Compute the elapsed duration label between two wall-clock times.
///
/// An end time numerically before the start time denotes an overnight
/// shift and wraps by 24 hours. Malformed input is an error, not "0h".
pub fn compute_duration(start_time: &str, end_time: &str) -> ScheduleResult<String> {
    let (start_hour, start_minute) = parse_or_err(start_time)?;
    let (end_hour, end_minute) = parse_or_err(end_time)?;

    let mut hours = end_hour - start_hour;
    let mut minutes = end_minute - start_minute;

    if minutes < 0 {
        hours -= 1;
        minutes += 60;
    }
    if hours < 0 {
        // Overnight shift
        hours += 24;
    }

    if minutes == 0 {
        Ok(format!("{}h", hours))
    } else {
        Ok(format!("{}h {}m", hours, minutes))
    }
}

/// Elapsed minutes between two wall-clock times, with overnight wraparound
pub fn duration_minutes(start_time: &str, end_time: &str) -> ScheduleResult<i32> {
    let (start, end) = shift_interval(start_time, end_time)?;
    Ok(end - start)
}

/// Half-open interval `[start, end)` in minutes since midnight of the
/// shift's day. Overnight end times are pushed past 1440 so that shifts
/// on the same day compare on a single axis.
pub fn shift_interval(start_time: &str, end_time: &str) -> ScheduleResult<(i32, i32)> {
    let (start_hour, start_minute) = parse_or_err(start_time)?;
    let (end_hour, end_minute) = parse_or_err(end_time)?;

    let start = start_hour * 60 + start_minute;
    let mut end = end_hour * 60 + end_minute;
    if end < start {
        end += MINUTES_PER_DAY;
    }

    Ok((start, end))
}
