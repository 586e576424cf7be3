//! The capability set shared by every calendar system.

use std::fmt::Debug;

use crate::error::CalendarError;
use crate::fields::FieldArray;
use crate::marker::DateMarker;

/// A strategy translating between [`DateMarker`]s and the fields of one
/// calendar.
///
/// Implementations are stateless and must satisfy
/// `array_to_marker(&marker_to_array(m)) == Ok(m)` for every supported
/// marker `m`.
pub trait CalendarSystem: Debug + Send + Sync {
    /// Name the calendar system is registered under.
    fn name(&self) -> &str;

    /// Builds a marker from a field array of 1 to 7 components.
    ///
    /// See [`fields`](crate::fields) for defaults and the meaning of a
    /// negative day.
    fn array_to_marker(&self, fields: &[i32]) -> Result<DateMarker, CalendarError>;

    /// Decomposes a marker into the full 7-component field array.
    fn marker_to_array(&self, marker: DateMarker) -> FieldArray;

    /// Year of the marker in this calendar.
    fn marker_year(&self, marker: DateMarker) -> i32 {
        self.marker_to_array(marker)[0]
    }
    /// Zero-based month of the marker in this calendar.
    fn marker_month(&self, marker: DateMarker) -> i32 {
        self.marker_to_array(marker)[1]
    }
    /// One-based day of month of the marker in this calendar.
    fn marker_day(&self, marker: DateMarker) -> i32 {
        self.marker_to_array(marker)[2]
    }
    /// Day of week, `0..=6` for Sunday through Saturday in every calendar.
    fn marker_day_of_week(&self, marker: DateMarker) -> i32 {
        marker.date().day_of_week()
    }
}
