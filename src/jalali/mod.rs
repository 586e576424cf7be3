//! Jalali (Persian solar hijri) calendar.
//!
//! Day-level conversion is delegated to `calendrical_calculations`; this
//! module only maps between its dates and date markers. All work happens on
//! UTC civil days and the time of day passes through untouched, so
//! `array_to_marker(marker_to_array(m))` gives back `m` exactly.
//!
//! # Gregorian year threshold
//!
//! Field arrays whose year is at or above
//! [`JalaliConfig::gregorian_year_threshold`] (1500 by default) are taken as
//! Gregorian fields and handled exactly like [`GregorianCalendar`] does.
//! Conversely a marker whose Jalali year reaches the threshold decomposes
//! into its Gregorian fields, whose year is then past the threshold as well.
//!
//! # Examples
//!
//! ```
//! use kalendarilo_sistemo::CalendarSystem;
//! use kalendarilo_sistemo::jalali::JalaliCalendar;
//!
//! let jalali = JalaliCalendar::new();
//! let marker = jalali.array_to_marker(&[1402, 5, 1]).unwrap();
//!
//! assert_eq!("2023-08-23T00:00:00.000Z", marker.to_string());
//! assert_eq!([1402, 5, 1, 0, 0, 0, 0], jalali.marker_to_array(marker));
//! ```

use tracing::{debug, trace};

use crate::date::Date;
use crate::error::CalendarError;
use crate::fields::{self, Field, FieldArray};
use crate::gregorian::GregorianCalendar;
use crate::marker::{self, DateMarker};
use crate::system::CalendarSystem;

mod config;
mod convert;

pub use config::JalaliConfig;

/// Registry name of the Jalali calendar.
pub const NAME: &str = "jalali";

/// The Jalali calendar system.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct JalaliCalendar {
    config: JalaliConfig,
}

impl JalaliCalendar {
    /// Creates the calendar with the default [`JalaliConfig`].
    pub fn new() -> Self {
        Self::with_config(JalaliConfig::new())
    }
    /// Creates the calendar with a custom configuration.
    pub fn with_config(config: JalaliConfig) -> Self {
        Self { config }
    }
    /// Returns the configuration in use.
    pub fn config(&self) -> &JalaliConfig {
        &self.config
    }

    /// Determines if `year` is a leap year in Jalali calendar.
    ///
    /// ```
    /// use kalendarilo_sistemo::jalali::JalaliCalendar;
    ///
    /// assert!(JalaliCalendar::is_leap_year(1403));
    /// assert!(!JalaliCalendar::is_leap_year(1402));
    /// ```
    pub fn is_leap_year(year: i32) -> bool {
        convert::is_leap_year(year)
    }

    /// Number of days in the zero-based `month` of a Jalali `year`.
    ///
    /// Returns `Err` if `month` is not in `0..=11`.
    pub fn days_in_month(year: i32, month: i32) -> Result<i32, CalendarError> {
        if !(0..=11).contains(&month) {
            return Err(CalendarError::InvalidField {
                field: Field::Month,
                value: month,
                min: 0,
                max: 11,
            });
        }
        Ok(convert::days_in_month(year, month + 1))
    }
}

impl CalendarSystem for JalaliCalendar {
    fn name(&self) -> &str {
        NAME
    }

    fn array_to_marker(&self, fields: &[i32]) -> Result<DateMarker, CalendarError> {
        let full = fields::expand(fields)?;
        let [year, month, day, h, m, s, ms] = full;
        let threshold = self.config.gregorian_year_threshold();
        if year >= threshold {
            debug!(year, threshold, "reading field array as Gregorian");
            return GregorianCalendar.array_to_marker(&full);
        }

        // The library numbers months from 1.
        let month = month + 1;
        let failure = CalendarError::ConversionFailure {
            calendar: NAME,
            year,
            month,
            day,
        };
        if !convert::YEARS.contains(&year) {
            return Err(failure);
        }
        let (anchor, shift) = fields::resolve_day(day, convert::days_in_month(year, month))?;
        let jdn = convert::jdn_from_jalali(year, month, anchor) + shift;
        let marker = u32::try_from(jdn)
            .ok()
            .map(Date::from_jdn)
            .and_then(|date| DateMarker::from_date_time(date, [h, m, s, ms]))
            .ok_or(failure)?;
        trace!(?full, %marker, "converted Jalali fields");
        Ok(marker)
    }

    fn marker_to_array(&self, marker: DateMarker) -> FieldArray {
        let [h, m, s, ms] = marker.time_of_day();
        match convert::to_jalali(marker.date()) {
            Some((year, month, day)) if year < self.config.gregorian_year_threshold() => {
                [year, month - 1, day, h, m, s, ms]
            }
            Some(_) => marker::date_to_utc_array(marker),
            None => {
                debug!(%marker, "Jalali year not representable, writing Gregorian fields");
                marker::date_to_utc_array(marker)
            }
        }
    }

    fn marker_day_of_week(&self, marker: DateMarker) -> i32 {
        convert::day_of_week(marker.date())
    }
}
