use crate::calendar::easter::easter_sunday;
use crate::domain::model::CountryCode;
use chrono::{Datelike, Duration, NaiveDate};

pub const GOOD_FRIDAY: &str = "Good Friday";
pub const EASTER_SUNDAY: &str = "Easter Sunday";

/// Settings that steer holiday resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionConfig {
    /// Fill in Good Friday and Easter Sunday for `override_country`.
    pub easter_override: bool,
    pub override_country: CountryCode,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            easter_override: true,
            override_country: CountryCode::new("US"),
        }
    }
}

/// Applies the Easter override and field sanitization on top of a
/// calendar's own answer.
#[derive(Debug, Clone, Default)]
pub struct HolidayResolver {
    config: ResolutionConfig,
}

impl HolidayResolver {
    pub fn new(config: ResolutionConfig) -> Self {
        Self { config }
    }

    /// Effective holiday name for `country` on `date`, given the calendar's
    /// `base` entry. Calendar entries always win over synthesized ones.
    pub fn resolve(
        &self,
        country: &CountryCode,
        date: NaiveDate,
        base: Option<&str>,
    ) -> Option<String> {
        let base = base.filter(|name| !name.is_empty());

        let name = match base {
            Some(name) => Some(name),
            None if self.overrides(country) => synthesized(date),
            None => None,
        };

        name.map(sanitize)
    }

    fn overrides(&self, country: &CountryCode) -> bool {
        self.config.easter_override && country.matches(&self.config.override_country)
    }
}

fn synthesized(date: NaiveDate) -> Option<&'static str> {
    let easter = easter_sunday(date.year())?;

    if Some(date) == easter.checked_sub_signed(Duration::days(2)) {
        Some(GOOD_FRIDAY)
    } else if date == easter {
        Some(EASTER_SUNDAY)
    } else {
        None
    }
}

/// Commas would split the field, so they become pipes.
pub fn sanitize(name: &str) -> String {
    name.replace(',', "|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn us() -> CountryCode {
        CountryCode::new("US")
    }

    #[test]
    fn test_synthesizes_good_friday_and_easter_sunday() {
        let resolver = HolidayResolver::default();

        assert_eq!(
            resolver.resolve(&us(), date(2021, 4, 2), None).as_deref(),
            Some(GOOD_FRIDAY)
        );
        assert_eq!(
            resolver.resolve(&us(), date(2021, 4, 4), None).as_deref(),
            Some(EASTER_SUNDAY)
        );
        assert_eq!(resolver.resolve(&us(), date(2021, 4, 3), None), None);
        assert_eq!(resolver.resolve(&us(), date(2021, 4, 5), None), None);
    }

    #[test]
    fn test_override_country_matches_ignoring_case() {
        let resolver = HolidayResolver::default();
        assert_eq!(
            resolver
                .resolve(&CountryCode::new("us"), date(2024, 3, 29), None)
                .as_deref(),
            Some(GOOD_FRIDAY)
        );
        assert_eq!(
            resolver.resolve(&CountryCode::new("AU"), date(2024, 3, 31), None),
            None
        );
    }

    #[test]
    fn test_base_entry_wins_over_synthesis() {
        let resolver = HolidayResolver::default();
        assert_eq!(
            resolver
                .resolve(&us(), date(2021, 4, 4), Some("Founders Day"))
                .as_deref(),
            Some("Founders Day")
        );
        assert_eq!(
            resolver
                .resolve(&us(), date(2021, 4, 2), Some("Arbor Day"))
                .as_deref(),
            Some("Arbor Day")
        );
    }

    #[test]
    fn test_empty_base_counts_as_absent() {
        let resolver = HolidayResolver::default();
        assert_eq!(
            resolver.resolve(&us(), date(2021, 4, 4), Some("")).as_deref(),
            Some(EASTER_SUNDAY)
        );
        assert_eq!(resolver.resolve(&us(), date(2021, 4, 3), Some("")), None);
    }

    #[test]
    fn test_disabled_override_never_synthesizes() {
        let resolver = HolidayResolver::new(ResolutionConfig {
            easter_override: false,
            ..ResolutionConfig::default()
        });
        assert_eq!(resolver.resolve(&us(), date(2021, 4, 2), None), None);
        assert_eq!(resolver.resolve(&us(), date(2021, 4, 4), None), None);
        assert_eq!(
            resolver
                .resolve(&us(), date(2021, 1, 1), Some("New Year's Day"))
                .as_deref(),
            Some("New Year's Day")
        );
    }

    #[test]
    fn test_custom_override_country() {
        let resolver = HolidayResolver::new(ResolutionConfig {
            easter_override: true,
            override_country: CountryCode::new("CA"),
        });
        assert_eq!(
            resolver
                .resolve(&CountryCode::new("ca"), date(2021, 4, 4), None)
                .as_deref(),
            Some(EASTER_SUNDAY)
        );
        assert_eq!(resolver.resolve(&us(), date(2021, 4, 4), None), None);
    }

    #[test]
    fn test_commas_become_pipes() {
        let resolver = HolidayResolver::default();
        assert_eq!(
            resolver
                .resolve(&CountryCode::new("AU"), date(2011, 4, 25), Some("Easter Monday, Anzac Day"))
                .as_deref(),
            Some("Easter Monday| Anzac Day")
        );
        assert_eq!(sanitize("a,b,c"), "a|b|c");
    }

    proptest! {
        #[test]
        fn disabled_override_yields_nothing_without_base(offset in 0i64..110_000) {
            let resolver = HolidayResolver::new(ResolutionConfig {
                easter_override: false,
                ..ResolutionConfig::default()
            });
            let day = date(1900, 1, 1) + Duration::days(offset);

            prop_assert_eq!(resolver.resolve(&us(), day, None), None);
            prop_assert_eq!(resolver.resolve(&CountryCode::new("us"), day, Some("")), None);
        }
    }
}
