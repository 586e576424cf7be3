//! Name-to-factory registry of calendar systems.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::gregorian::{self, GregorianCalendar};
use crate::jalali::{self, JalaliCalendar};
use crate::system::CalendarSystem;

type Factory = Box<dyn Fn() -> Box<dyn CalendarSystem> + Send + Sync>;

/// Maps calendar-system names to constructors.
///
/// The registry is an ordinary value owned by the host; registration needs
/// `&mut self`, lookups only `&self`.
///
/// # Example
///
/// ```
/// use kalendarilo_sistemo::CalendarRegistry;
///
/// let registry = CalendarRegistry::default();
///
/// assert_eq!("jalali", registry.create("jalali").name());
/// assert_eq!("gregory", registry.create("no-such-calendar").name());
/// ```
pub struct CalendarRegistry {
    factories: HashMap<String, Factory>,
}

impl CalendarRegistry {
    /// Creates an empty registry. [`create`](Self::create) still yields the
    /// Gregorian calendar.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry holding `"gregory"` and `"jalali"`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(gregorian::NAME, || Box::new(GregorianCalendar));
        registry.register(jalali::NAME, || Box::new(JalaliCalendar::new()));
        registry
    }

    /// Registers `factory` under `name`, replacing any earlier registration.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn CalendarSystem> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            debug!(%name, "replaced calendar system registration");
        }
    }

    /// Creates a new instance of the calendar system registered as `name`.
    ///
    /// Unknown names get the Gregorian calendar; this is not an error.
    pub fn create(&self, name: &str) -> Box<dyn CalendarSystem> {
        match self.factories.get(name) {
            Some(factory) => factory(),
            None => {
                debug!(%name, "unknown calendar system, falling back to Gregorian");
                Box::new(GregorianCalendar)
            }
        }
    }

    /// Returns `true` if a factory is registered as `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered calendar systems.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for CalendarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;
    use crate::fields::FieldArray;
    use crate::marker::DateMarker;

    /// Gregorian fields shifted by a fixed number of years.
    #[derive(Debug)]
    struct Shifted(i32);

    impl CalendarSystem for Shifted {
        fn name(&self) -> &str {
            "shifted"
        }
        fn array_to_marker(&self, fields: &[i32]) -> Result<DateMarker, CalendarError> {
            let mut fields = fields.to_vec();
            if let Some(year) = fields.first_mut() {
                *year -= self.0;
            }
            GregorianCalendar.array_to_marker(&fields)
        }
        fn marker_to_array(&self, marker: DateMarker) -> FieldArray {
            let mut arr = GregorianCalendar.marker_to_array(marker);
            arr[0] += self.0;
            arr
        }
    }

    #[test]
    fn builtins() {
        let registry = CalendarRegistry::default();
        assert_eq!(vec!["gregory", "jalali"], registry.names());
        assert_eq!(2, registry.len());
        assert_eq!("gregory", registry.create("gregory").name());
        assert_eq!("jalali", registry.create("jalali").name());
    }

    #[test]
    fn empty_registry_falls_back() {
        let registry = CalendarRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("gregory"));
        assert_eq!("gregory", registry.create("gregory").name());
    }

    #[test]
    fn register_custom() {
        let mut registry = CalendarRegistry::new();
        registry.register("shifted", || Box::new(Shifted(10_000)));
        assert!(registry.contains("shifted"));

        let cal = registry.create("shifted");
        assert_eq!(11_970, cal.marker_year(DateMarker::UNIX_EPOCH));
        assert_eq!(Ok(DateMarker::UNIX_EPOCH), cal.array_to_marker(&[11_970]));
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = CalendarRegistry::default();
        registry.register("jalali", || Box::new(Shifted(1)));
        assert_eq!(2, registry.len());
        assert_eq!("shifted", registry.create("jalali").name());
    }

    #[test]
    fn debug_lists_names() {
        assert_eq!(
            r#"CalendarRegistry { names: ["gregory", "jalali"] }"#,
            format!("{:?}", CalendarRegistry::default())
        );
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarRegistry>();
    }
}
