//! Error types for calendar conversions.

use crate::fields::Field;

/// Error type for all fallible conversions from field arrays to markers.
///
/// An unknown calendar-system name is deliberately absent here: the
/// registry falls back to the Gregorian calendar instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a field array is empty or longer than 7 components.
    #[error("invalid field array length: {len} (must be 1..=7)")]
    InvalidLength {
        /// The length of the rejected array.
        len: usize,
    },

    /// Returned when one component of a field array is out of its domain.
    #[error("invalid {field}: {value} (must be {min}..={max})")]
    InvalidField {
        /// The offending component.
        field: Field,
        /// The rejected value.
        value: i32,
        /// Smallest accepted value.
        min: i32,
        /// Largest accepted value.
        max: i32,
    },

    /// Returned when valid fields describe an instant no marker can hold.
    #[error("{calendar} date {year}-{month}-{day} cannot be represented as a date marker")]
    ConversionFailure {
        /// Name of the calendar system that attempted the conversion.
        calendar: &'static str,
        /// Year as given.
        year: i32,
        /// One-based month in the calendar's own numbering.
        month: i32,
        /// Day as given.
        day: i32,
    },
}
