use crate::models::Progress;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Progress of a subscription as of right now. Dates arrive as the raw
/// `YYYY-MM-DD` strings the form stored; anything unparsable renders as
/// 0% / 0 days rather than failing the row.
pub fn progress(start: &str, end: &str) -> Progress {
    progress_at(start, end, Local::now().naive_local())
}

pub fn progress_at(start: &str, end: &str, now: NaiveDateTime) -> Progress {
    match (parse_date(start), parse_date(end)) {
        (Some(start), Some(end)) => progress_between(start, end, now),
        _ => Progress {
            percent: 0,
            remaining_days: 0,
        },
    }
}

/// Maps (start, end, now) to the elapsed share of the span, rounded and
/// clamped to 0..=100, and the whole calendar days left, floored at 0. Both
/// ends anchor at midnight. A zero or negative span never divides: it reads
/// as 100% once `now` reaches `start`, 0% before.
pub fn progress_between(start: NaiveDate, end: NaiveDate, now: NaiveDateTime) -> Progress {
    let start = start.and_time(NaiveTime::MIN);
    let end = end.and_time(NaiveTime::MIN);
    let total = (end - start).num_milliseconds();
    let elapsed = (now - start).num_milliseconds();

    let percent = if total <= 0 {
        if elapsed >= 0 { 100 } else { 0 }
    } else {
        (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0).round() as u8
    };

    // Remaining days ignore the percent clamp: raw calendar days to the end
    // anchor, so a span past its end is always 0.
    let remaining_days = ((end - now).num_milliseconds() as f64 / MS_PER_DAY)
        .ceil()
        .max(0.0) as u32;

    Progress {
        percent,
        remaining_days,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
