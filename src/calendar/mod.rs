//! Rule-based holiday calendars.
//!
//! Each supported country is described by a table of [`rules::HolidayRule`]s
//! which [`provider::CountryCalendar`] compiles into a date lookup once per run.

pub mod countries;
pub mod easter;
pub mod provider;
pub mod rules;

pub use countries::Country;
pub use easter::easter_sunday;
pub use provider::{CalendarSet, CountryCalendar};
pub use rules::{DateRule, HolidayRule, Observance};
