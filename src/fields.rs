//! Field arrays: calendar-specific decompositions of a date marker.
//!
//! A field array is `[year, month, day, hour, minute, second, millisecond]`
//! with a zero-based month and a one-based day. Input arrays may be cut short
//! after any component; the missing ones default to the first month, the
//! first day and midnight.
//!
//! A negative day is not a calendar day but an offset: `-n` means `n` days
//! before the 1st of the given month, so `[y, m, -3]` lands 3 days before
//! `[y, m, 1]`. Day `0` is rejected.

use std::fmt;

use crate::error::CalendarError;

/// Full-length field array, as produced by
/// [`CalendarSystem::marker_to_array`](crate::CalendarSystem::marker_to_array).
pub type FieldArray = [i32; 7];

/// Number of components in a full field array.
pub const FIELD_COUNT: usize = 7;

/// Names of the components of a field array, in array order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Millisecond => "millisecond",
        })
    }
}

/// Ranges enforced for the month and time-of-day components.
const BOUNDS: [(Field, usize, i32, i32); 5] = [
    (Field::Month, 1, 0, 11),
    (Field::Hour, 3, 0, 23),
    (Field::Minute, 4, 0, 59),
    (Field::Second, 5, 0, 59),
    (Field::Millisecond, 6, 0, 999),
];

/// Pads `fields` to the full 7-component form and checks the month and
/// time-of-day components.
///
/// The day is left unchecked since its upper bound depends on the calendar.
///
/// # Example
///
/// ```
/// use kalendarilo_sistemo::fields;
///
/// assert_eq!(Ok([1402, 0, 1, 0, 0, 0, 0]), fields::expand(&[1402]));
/// assert!(fields::expand(&[1402, 12]).is_err());
/// ```
pub fn expand(fields: &[i32]) -> Result<FieldArray, CalendarError> {
    if fields.is_empty() || fields.len() > FIELD_COUNT {
        return Err(CalendarError::InvalidLength { len: fields.len() });
    }
    let mut full = [0, 0, 1, 0, 0, 0, 0];
    full[..fields.len()].copy_from_slice(fields);
    for (field, idx, min, max) in BOUNDS {
        let value = full[idx];
        if !(min..=max).contains(&value) {
            return Err(CalendarError::InvalidField {
                field,
                value,
                min,
                max,
            });
        }
    }
    Ok(full)
}

/// Splits a day component into the day to anchor on and the number of days
/// to shift afterwards.
///
/// Positive days must not exceed `days_in_month`; they anchor on themselves
/// with no shift. Negative days anchor on the 1st and shift backwards.
pub fn resolve_day(day: i32, days_in_month: i32) -> Result<(i32, i64), CalendarError> {
    match day {
        d if d < 0 => Ok((1, d as i64)),
        d if (1..=days_in_month).contains(&d) => Ok((d, 0)),
        d => Err(CalendarError::InvalidField {
            field: Field::Day,
            value: d,
            min: 1,
            max: days_in_month,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_defaults() {
        for (input, expected) in [
            (&[2023][..], [2023, 0, 1, 0, 0, 0, 0]),
            (&[2023, 4], [2023, 4, 1, 0, 0, 0, 0]),
            (&[2023, 4, 17, 13], [2023, 4, 17, 13, 0, 0, 0]),
            (&[2023, 4, 17, 13, 5, 9, 250], [2023, 4, 17, 13, 5, 9, 250]),
        ] {
            assert_eq!(Ok(expected), expand(input), "{input:?}");
        }
    }

    #[test]
    fn expand_keeps_day_unchecked() {
        assert_eq!(Ok([1402, 5, -3, 0, 0, 0, 0]), expand(&[1402, 5, -3]));
    }

    #[test]
    fn expand_rejects_length() {
        assert_eq!(Err(CalendarError::InvalidLength { len: 0 }), expand(&[]));
        assert_eq!(
            Err(CalendarError::InvalidLength { len: 8 }),
            expand(&[2000, 0, 1, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn expand_rejects_components() {
        for (input, field, value) in [
            (&[2023, 12][..], Field::Month, 12),
            (&[2023, -1][..], Field::Month, -1),
            (&[2023, 0, 1, 24][..], Field::Hour, 24),
            (&[2023, 0, 1, 0, 60][..], Field::Minute, 60),
            (&[2023, 0, 1, 0, 0, -1][..], Field::Second, -1),
            (&[2023, 0, 1, 0, 0, 0, 1000][..], Field::Millisecond, 1000),
        ] {
            match expand(input) {
                Err(CalendarError::InvalidField { field: f, value: v, .. }) => {
                    assert_eq!((field, value), (f, v), "{input:?}")
                }
                other => panic!("{input:?}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn resolve_days() {
        assert_eq!(Ok((1, -3)), resolve_day(-3, 31));
        assert_eq!(Ok((31, 0)), resolve_day(31, 31));
        assert_eq!(
            Err(CalendarError::InvalidField {
                field: Field::Day,
                value: 0,
                min: 1,
                max: 30,
            }),
            resolve_day(0, 30)
        );
        assert!(resolve_day(30, 29).is_err());
    }
}
