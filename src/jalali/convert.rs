//! Bridge between [`Date`] and the Persian arithmetic of
//! `calendrical_calculations`.
//!
//! The library counts days in Rata Die (R.D. 1 is 0001-01-01, proleptic
//! Gregorian) and numbers months from 1. Everything here speaks one-based
//! months as well; the zero-based shift happens in the calendar system.

use std::ops::RangeInclusive;

use calendrical_calculations::persian;
use calendrical_calculations::rata_die::RataDie;

use crate::date::Date;

/// Julian day number minus Rata Die, for the same day.
const JDN_RD_OFFSET: i64 = 1721425;

/// Jalali years passed to the library; a superset of what a marker can hold.
pub const YEARS: RangeInclusive<i32> = -6000..=300_000;

fn rata_die(date: Date) -> RataDie {
    RataDie::new(date.jdn() as i64 - JDN_RD_OFFSET)
}

/// Jalali `(year, month, day)` of a civil day.
///
/// Returns `None` if the library cannot represent the year.
pub fn to_jalali(date: Date) -> Option<(i32, i32, i32)> {
    persian::fast_persian_from_fixed(rata_die(date))
        .ok()
        .map(|(y, m, d)| (y, m as i32, d as i32))
}

/// Julian day number of a Jalali date.
///
/// `year` must lie in [`YEARS`], `month` in `1..=12` and `day` in `1..=31`.
pub fn jdn_from_jalali(year: i32, month: i32, day: i32) -> i64 {
    persian::fixed_from_fast_persian(year, month as u8, day as u8).to_i64_date() + JDN_RD_OFFSET
}

pub fn is_leap_year(year: i32) -> bool {
    persian::is_leap_year(year)
}

/// Number of days in `month` (`1..=12`) of a Jalali `year`.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ => 29 + is_leap_year(year) as i32,
    }
}

/// Day of week of a civil day, `0..=6` for Sunday through Saturday.
///
/// R.D. 1 is a Monday, so R.D. 0 and its multiples of 7 are Sundays.
pub fn day_of_week(date: Date) -> i32 {
    rata_die(date).to_i64_date().rem_euclid(7) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_days() {
        for ((y, m, d), jalali) in [
            ((1970, 1, 1), (1348, 10, 11)),
            ((2023, 3, 21), (1402, 1, 1)),
            ((2023, 8, 23), (1402, 6, 1)),
            ((2024, 3, 20), (1403, 1, 1)),
            ((2025, 3, 20), (1403, 12, 30)),
            ((2025, 3, 21), (1404, 1, 1)),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(Some(jalali), to_jalali(date), "{y:04}-{m:02}-{d:02}");
            assert_eq!(
                date.jdn() as i64,
                jdn_from_jalali(jalali.0, jalali.1, jalali.2),
                "{jalali:?}"
            );
        }
    }

    #[test]
    fn leap_years() {
        for (year, leap) in [(1399, true), (1400, false), (1401, false), (1402, false), (1403, true)] {
            assert_eq!(leap, is_leap_year(year), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(31, days_in_month(1402, 1));
        assert_eq!(31, days_in_month(1402, 6));
        assert_eq!(30, days_in_month(1402, 7));
        assert_eq!(29, days_in_month(1402, 12));
        assert_eq!(30, days_in_month(1403, 12));
    }

    #[test]
    fn weekday_matches_date() {
        for jdn in [0, 1, 2440588, 2460180, 2460181, 2460186] {
            let date = Date::from_jdn(jdn);
            assert_eq!(date.day_of_week(), day_of_week(date), "jdn {jdn}");
        }
    }
}
