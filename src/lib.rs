pub mod calendar;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::calendar::{CalendarSet, Country, CountryCalendar};
pub use crate::config::{JobConfig, TomlConfig};
pub use crate::core::aggregator::{aggregate, RangeAggregator};
pub use crate::core::engine::{HolidayEngine, RunSummary};
pub use crate::core::resolver::{HolidayResolver, ResolutionConfig};
pub use crate::core::writer::HolidayCsvWriter;
pub use crate::domain::model::{CountryCode, OutputRow, ResolvedDay};
pub use crate::domain::ports::HolidayCalendar;
pub use crate::utils::error::{HolidayError, Result};
