//! Date markers: absolute instants in UTC, free of any calendar system.

use std::fmt;
use std::ops::Sub;

use chrono::{DateTime, Utc};

use crate::date::{Date, UNIX_EPOCH_JDN, days_in_gregorian_month};
use crate::error::CalendarError;
use crate::fields::{self, FieldArray};
use crate::gregorian;

const MS_PER_DAY: i64 = 86_400_000;

/// An absolute instant with millisecond resolution, normalized to UTC.
///
/// Supported range begins from the first instant of Julian day number 0
/// (`-4713-11-24T00:00:00.000Z`) and ends at 8.64e15 milliseconds after the
/// Unix epoch (`275760-09-13T00:00:00.000Z`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DateMarker {
    millis: i64,
}

impl DateMarker {
    /// Earliest supported marker, in milliseconds since the Unix epoch.
    pub const MIN_MILLIS: i64 = -(UNIX_EPOCH_JDN as i64) * MS_PER_DAY;
    /// Latest supported marker, in milliseconds since the Unix epoch.
    pub const MAX_MILLIS: i64 = 8_640_000_000_000_000;

    /// `1970-01-01T00:00:00.000Z`.
    pub const UNIX_EPOCH: Self = Self { millis: 0 };

    /// Creates a marker from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if `millis` is out of supported range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        (Self::MIN_MILLIS..=Self::MAX_MILLIS)
            .contains(&millis)
            .then_some(Self { millis })
    }
    /// Returns milliseconds since the Unix epoch.
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// Creates a marker from a UTC civil day and a time of day given as
    /// `[hour, minute, second, millisecond]`.
    ///
    /// The time of day is not range checked; out of range components simply
    /// carry into the neighbouring units.
    pub fn from_date_time(date: Date, time: [i32; 4]) -> Option<Self> {
        let [h, m, s, ms] = time.map(i64::from);
        let days = date.jdn() as i64 - UNIX_EPOCH_JDN as i64;
        Self::from_millis(days * MS_PER_DAY + ((h * 60 + m) * 60 + s) * 1000 + ms)
    }

    /// Returns the UTC civil day the marker falls on.
    pub fn date(&self) -> Date {
        // Within the supported range the day number is in 0..u32::MAX.
        let jdn = UNIX_EPOCH_JDN as i64 + self.millis.div_euclid(MS_PER_DAY);
        Date::from_jdn(jdn as u32)
    }

    /// Returns the UTC time of day as `[hour, minute, second, millisecond]`.
    pub fn time_of_day(&self) -> [i32; 4] {
        let ms = self.millis.rem_euclid(MS_PER_DAY) as i32;
        [
            ms / 3_600_000,
            ms / 60_000 % 60,
            ms / 1000 % 60,
            ms % 1000,
        ]
    }

    /// Moves the marker by whole days, keeping the time of day.
    ///
    /// Returns `None` when leaving the supported range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        days.checked_mul(MS_PER_DAY)
            .and_then(|delta| self.millis.checked_add(delta))
            .and_then(Self::from_millis)
    }

    /// Converts from a chrono UTC timestamp, truncating to milliseconds.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Option<Self> {
        Self::from_millis(datetime.timestamp_millis())
    }
    /// Converts into a chrono UTC timestamp.
    ///
    /// Returns `None` for the far end of the range chrono cannot represent.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }
}

/// Difference of two markers in milliseconds.
impl Sub<DateMarker> for DateMarker {
    type Output = i64;
    fn sub(self, rhs: DateMarker) -> Self::Output {
        self.millis - rhs.millis
    }
}

/// Formats as ISO 8601 in UTC, e.g. `2023-08-23T00:00:00.000Z`.
impl fmt::Display for DateMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, m, s, ms] = self.time_of_day();
        write!(
            f,
            "{}T{:02}:{:02}:{:02}.{:03}Z",
            self.date().iso_gregorian(),
            h,
            m,
            s,
            ms
        )
    }
}

/// Builds a marker from Gregorian UTC fields.
///
/// The month is zero-based and a negative day counts back from the 1st of
/// the month, see [`fields`](crate::fields).
///
/// # Example
///
/// ```
/// use kalendarilo_sistemo::marker::array_to_utc_date;
///
/// let marker = array_to_utc_date(&[1970, 0, 2]).unwrap();
/// assert_eq!(86_400_000, marker.millis());
/// ```
pub fn array_to_utc_date(fields: &[i32]) -> Result<DateMarker, CalendarError> {
    let [year, month, day, h, m, s, ms] = fields::expand(fields)?;
    let (anchor, shift) = fields::resolve_day(day, days_in_gregorian_month(year, month + 1))?;
    Date::from_gregorian(year, month + 1, anchor)
        .and_then(|date| date.checked_add_days(shift))
        .and_then(|date| DateMarker::from_date_time(date, [h, m, s, ms]))
        .ok_or(CalendarError::ConversionFailure {
            calendar: gregorian::NAME,
            year,
            month: month + 1,
            day,
        })
}

/// Decomposes a marker into Gregorian UTC fields with a zero-based month.
pub fn date_to_utc_array(marker: DateMarker) -> FieldArray {
    let (year, month, day) = marker.date().gregorian();
    let [h, m, s, ms] = marker.time_of_day();
    [year, month - 1, day, h, m, s, ms]
}
