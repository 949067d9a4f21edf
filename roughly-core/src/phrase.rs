use time::Duration;

use crate::round::div_nearest;

// Unit lengths in nanoseconds. Month and year are rough averages on
// purpose; no attempt is made to handle leap seconds, leap years, or
// daylight saving time.
const SECOND: i128 = 1_000_000_000;
const MINUTE: i128 = 60 * SECOND;
const HOUR: i128 = 60 * MINUTE;
const DAY: i128 = 24 * HOUR;
const MONTH: i128 = 30 * DAY + 12 * HOUR;
const YEAR: i128 = 365 * DAY;

/// Returns a coarse phrase describing the magnitude of `d`.
///
/// The sign of `d` is ignored; see [`rough_duration_direction`] for the
/// past/future form. The bands:
///
/// ```text
/// 0 <-> 29 secs                            less than a minute
/// 30 secs <-> 1 min 29 secs                1 minute
/// 1 min 30 secs <-> 44 mins 29 secs        [2..44] minutes
/// 44 mins 30 secs <-> 89 mins 29 secs      about 1 hour
/// 89 mins 30 secs <-> 23:59:29             about [2..24] hours
/// 23:59:30 <-> 41:59:29                    1 day
/// 41:59:30 <-> 29 days 23:59:29            [2..30] days
/// 29 days 23:59:30 <-> 59 days 23:59:29    about 1 month
/// 59 days 23:59:30 <-> 1 yr minus 1 sec    [2..12] months
/// 1 yr <-> 1 yr 3 months                   about 1 year
/// 1 yr 3 months <-> 1 yr 9 months          over 1 year
/// 1 yr 9 months <-> 2 yrs minus 1 sec      almost 2 years
/// 2 yrs <-> max                            about/over/almost N years
/// ```
#[must_use]
pub fn rough_duration(d: Duration) -> String {
    // Deliberately an explicit ordered chain, not a binary search; each
    // boundary can be inspected and tested on its own.
    let ns = d.whole_nanoseconds().abs();

    if ns <= 29 * SECOND {
        return "less than a minute".to_string();
    }
    if ns <= MINUTE + 29 * SECOND {
        return "1 minute".to_string();
    }
    if ns <= 44 * MINUTE + 29 * SECOND {
        return format!("{} minutes", div_nearest(ns, MINUTE));
    }
    if ns <= 89 * MINUTE + 29 * SECOND {
        return "about 1 hour".to_string();
    }
    if ns <= 23 * HOUR + 59 * MINUTE + 29 * SECOND {
        return format!("about {} hours", div_nearest(ns, HOUR));
    }
    if ns <= 41 * HOUR + 59 * MINUTE + 29 * SECOND {
        return "1 day".to_string();
    }
    if ns <= 29 * DAY + 23 * HOUR + 59 * MINUTE + 29 * SECOND {
        return format!("{} days", div_nearest(ns, DAY));
    }
    if ns <= 59 * DAY + 23 * HOUR + 59 * MINUTE + 29 * SECOND {
        return "about 1 month".to_string();
    }
    if ns <= YEAR - SECOND {
        return format!("{} months", div_nearest(ns, MONTH));
    }
    if ns <= YEAR + 3 * MONTH {
        return "about 1 year".to_string();
    }
    if ns <= YEAR + 9 * MONTH {
        return "over 1 year".to_string();
    }
    if ns <= 2 * YEAR - SECOND {
        return "almost 2 years".to_string();
    }

    // Two years and up, including the extremes of the representable range.
    // The remainder can go negative when the year count rounded up; a
    // negative remainder still reads as "about".
    let years = div_nearest(ns, YEAR);
    let remainder = ns - years * YEAR;

    if remainder <= 3 * MONTH {
        format!("about {years} years")
    } else if remainder <= 9 * MONTH {
        format!("over {years} years")
    } else {
        format!("almost {} years", years + 1)
    }
}

/// Returns [`rough_duration`] of `d` decorated with a past or future
/// indicator: `"{phrase} ago"` for zero or positive, `"in {phrase}"` for
/// negative.
#[must_use]
pub fn rough_duration_direction(d: Duration) -> String {
    let phrase = rough_duration(d);
    if d.is_negative() {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_band_boundaries_are_exact() {
        assert_eq!(rough_duration(Duration::seconds(29)), "less than a minute");
        assert_eq!(rough_duration(Duration::seconds(30)), "1 minute");
        assert_eq!(rough_duration(Duration::seconds(89)), "1 minute");
        assert_eq!(rough_duration(Duration::seconds(90)), "2 minutes");
    }

    #[test]
    fn day_band_holds_until_just_before_a_month() {
        // 719h59m29s is still inside the day band and rounds to 30 days;
        // eleven more seconds cross into "about 1 month".
        let edge = Duration::hours(719) + Duration::minutes(59) + Duration::seconds(29);
        assert_eq!(rough_duration(edge), "30 days");
        assert_eq!(rough_duration(edge + Duration::seconds(11)), "about 1 month");
    }

    #[test]
    fn exactly_thirty_days_has_crossed_into_months() {
        // The day band tops out at 29d 23:59:29, so a full 720h reads as
        // a month even though it rounds to 30 days.
        assert_eq!(rough_duration(Duration::hours(720)), "about 1 month");
    }

    #[test]
    fn year_tail_picks_about_over_almost() {
        let year = Duration::hours(365 * 24);
        let month = Duration::hours(30 * 24 + 12);

        assert_eq!(rough_duration(2 * year), "about 2 years");
        assert_eq!(rough_duration(2 * year + 2 * month), "about 2 years");
        assert_eq!(rough_duration(2 * year + 5 * month), "over 2 years");
        assert_eq!(rough_duration(100 * year), "about 100 years");
    }

    #[test]
    fn rounded_up_year_count_gives_negative_remainder() {
        // 2 years 10 months rounds to 3 years, leaving a negative
        // remainder, which lands in "about".
        let year = Duration::hours(365 * 24);
        let month = Duration::hours(30 * 24 + 12);
        assert_eq!(rough_duration(2 * year + 10 * month), "about 3 years");
    }

    #[test]
    fn extremes_fall_into_the_years_tail() {
        assert!(rough_duration(Duration::MAX).ends_with("years"));
        assert!(rough_duration(Duration::MIN).ends_with("years"));
    }

    #[test]
    fn zero_counts_as_past() {
        assert_eq!(
            rough_duration_direction(Duration::ZERO),
            "less than a minute ago"
        );
    }
}
