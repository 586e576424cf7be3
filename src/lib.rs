//! Pluggable calendar systems over UTC date markers.
//!
//! A [`DateMarker`] is an absolute instant in UTC. A [`CalendarSystem`]
//! decomposes it into calendar-specific fields (year, zero-based month, day,
//! time of day) and builds it back from them. Currently two calendars are
//! provided: the proleptic Gregorian calendar, which is the default, and the
//! Jalali (Persian solar hijri) calendar.
//!
//! # Examples
//!
//! Looking up a calendar by name:
//!
//! ```
//! use kalendarilo_sistemo::{CalendarRegistry, DateMarker};
//!
//! let registry = CalendarRegistry::default();
//! let jalali = registry.create("jalali");
//!
//! let marker = DateMarker::UNIX_EPOCH;
//! assert_eq!([1348, 9, 11, 0, 0, 0, 0], jalali.marker_to_array(marker));
//! assert_eq!(4, jalali.marker_day_of_week(marker)); // Thursday
//! ```
//!
//! Going to the 1st of Shahrivar 1402:
//!
//! ```
//! use kalendarilo_sistemo::CalendarRegistry;
//!
//! let registry = CalendarRegistry::default();
//! let jalali = registry.create("jalali");
//! let gregorian = registry.create("gregory");
//!
//! let marker = jalali.array_to_marker(&[1402, 5, 1]).unwrap();
//! assert_eq!([2023, 7, 23, 0, 0, 0, 0], gregorian.marker_to_array(marker));
//! ```
//!
//! Unknown names fall back to the Gregorian calendar:
//!
//! ```
//! use kalendarilo_sistemo::CalendarRegistry;
//!
//! let registry = CalendarRegistry::default();
//! assert_eq!("gregory", registry.create("julian").name());
//! ```

pub mod date;
pub mod error;
pub mod fields;
pub mod gregorian;
pub mod jalali;
pub mod marker;
pub mod registry;
pub mod system;

pub use date::{Date, YearType};
pub use error::CalendarError;
pub use fields::{Field, FieldArray};
pub use gregorian::GregorianCalendar;
pub use jalali::{JalaliCalendar, JalaliConfig};
pub use marker::DateMarker;
pub use registry::CalendarRegistry;
pub use system::CalendarSystem;
