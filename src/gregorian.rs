//! Proleptic Gregorian calendar on UTC fields.

use crate::error::CalendarError;
use crate::fields::FieldArray;
use crate::marker::{self, DateMarker};
use crate::system::CalendarSystem;

/// Registry name of the Gregorian calendar.
pub const NAME: &str = "gregory";

/// The default calendar system: the UTC fields of the marker as they are.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GregorianCalendar;

impl CalendarSystem for GregorianCalendar {
    fn name(&self) -> &str {
        NAME
    }

    fn array_to_marker(&self, fields: &[i32]) -> Result<DateMarker, CalendarError> {
        marker::array_to_utc_date(fields)
    }

    fn marker_to_array(&self, marker: DateMarker) -> FieldArray {
        marker::date_to_utc_array(marker)
    }

    fn marker_year(&self, marker: DateMarker) -> i32 {
        marker.date().gregorian().0
    }
    fn marker_month(&self, marker: DateMarker) -> i32 {
        marker.date().gregorian().1 - 1
    }
    fn marker_day(&self, marker: DateMarker) -> i32 {
        marker.date().gregorian().2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getters() {
        let marker = DateMarker::from_millis(1_692_795_909_250).unwrap();
        let cal = GregorianCalendar;
        assert_eq!(2023, cal.marker_year(marker));
        assert_eq!(7, cal.marker_month(marker));
        assert_eq!(23, cal.marker_day(marker));
        assert_eq!(3, cal.marker_day_of_week(marker)); // Wednesday
    }

    #[test]
    fn getters_agree_with_array() {
        let cal = GregorianCalendar;
        for millis in [
            DateMarker::MIN_MILLIS,
            -62_135_596_800_001,
            -1,
            0,
            951_782_400_000,
            DateMarker::MAX_MILLIS,
        ] {
            let marker = DateMarker::from_millis(millis).unwrap();
            let arr = cal.marker_to_array(marker);
            assert_eq!(
                [arr[0], arr[1], arr[2]],
                [
                    cal.marker_year(marker),
                    cal.marker_month(marker),
                    cal.marker_day(marker)
                ],
                "{marker}"
            );
        }
    }

    #[test]
    fn round_trip() {
        let cal = GregorianCalendar;
        let mut millis = DateMarker::MIN_MILLIS;
        while millis <= DateMarker::MAX_MILLIS {
            let marker = DateMarker::from_millis(millis).unwrap();
            assert_eq!(Ok(marker), cal.array_to_marker(&cal.marker_to_array(marker)), "{marker}");
            millis += 86_400_000 * 9973 + 3_723_457;
        }
    }

    #[test]
    fn leap_day() {
        let cal = GregorianCalendar;
        let marker = cal.array_to_marker(&[2000, 1, 29]).unwrap();
        assert_eq!("2000-02-29T00:00:00.000Z", marker.to_string());
        assert!(cal.array_to_marker(&[1900, 1, 29]).is_err());
    }
}
