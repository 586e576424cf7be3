//! Calendar-independant civil day.

/// A calendar-independant date, i.e. one civil day in UTC.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar
/// (November 24, 4714 BC in proleptic Gregorian calendar).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

/// Julian day number of 1970-01-01, the day of the Unix epoch.
pub const UNIX_EPOCH_JDN: u32 = 2440588;

/// Gregorian years accepted by [`Date::from_gregorian`]; beyond them the
/// integer formula would overflow.
const GREGORIAN_YEARS: std::ops::RangeInclusive<i32> = -4714..=1_000_000;

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. `month` is in `1..=12`; `day` is not checked against
    /// the length of the month and simply counts from the 1st.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_sistemo::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !GREGORIAN_YEARS.contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        let (y, m) = (year as i64, month as i64);
        let first = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + 1
            - 32075;
        Self::from_i64(first + day as i64 - 1)
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format, `month` in `1..=12`.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_sistemo::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_sistemo::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, numbered `0..=6` for Sunday
    /// through Saturday.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_sistemo::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        ((self.jdn as i64 + 1) % 7) as i32
    }

    /// Moves the date by `days`, returning `None` when leaving the supported
    /// range.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        Self::from_i64(self.jdn as i64 + days)
    }

    fn from_i64(jdn: i64) -> Option<Self> {
        u32::try_from(jdn).map(Self::from_jdn).ok()
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in `month` (`1..=12`) of a Gregorian `year`.
pub fn days_in_gregorian_month(year: i32, month: i32) -> i32 {
    match month {
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
