use chrono::NaiveDate;
use std::borrow::Cow;

/// Per-country holiday lookup.
pub trait HolidayCalendar: Send + Sync {
    /// Holiday name observed on `date`, or `None` for an ordinary day.
    fn holiday_name(&self, date: NaiveDate) -> Option<Cow<'_, str>>;
}
