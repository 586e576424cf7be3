//! Configuration for the Jalali calendar system.

use serde::Deserialize;

/// Policy knobs of [`JalaliCalendar`](super::JalaliCalendar).
///
/// Can be embedded in a host's TOML configuration; every key is optional.
///
/// # Example
///
/// ```
/// use kalendarilo_sistemo::jalali::JalaliConfig;
///
/// let config = JalaliConfig::new().with_gregorian_year_threshold(1600);
/// assert_eq!(1600, config.gregorian_year_threshold());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JalaliConfig {
    /// Field arrays with a year at or above this value hold Gregorian
    /// fields rather than Jalali ones.
    gregorian_year_threshold: i32,
}

impl JalaliConfig {
    /// Default for [`Self::gregorian_year_threshold`].
    pub const DEFAULT_GREGORIAN_YEAR_THRESHOLD: i32 = 1500;

    /// Creates a configuration with the defaults.
    pub fn new() -> Self {
        Self {
            gregorian_year_threshold: Self::DEFAULT_GREGORIAN_YEAR_THRESHOLD,
        }
    }

    /// Sets the year from which field arrays are read as Gregorian.
    pub fn with_gregorian_year_threshold(mut self, year: i32) -> Self {
        self.gregorian_year_threshold = year;
        self
    }

    /// Returns the year from which field arrays are read as Gregorian.
    pub fn gregorian_year_threshold(&self) -> i32 {
        self.gregorian_year_threshold
    }
}

impl Default for JalaliConfig {
    fn default() -> Self {
        Self::new()
    }
}
