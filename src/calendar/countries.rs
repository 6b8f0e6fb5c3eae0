use crate::calendar::rules::{HolidayRule, Observance};
use chrono::Weekday::{Mon, Thu};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    UnitedStates,
    Australia,
    UnitedKingdom,
    Canada,
}

impl Country {
    pub const ALL: [Country; 4] = [
        Country::UnitedStates,
        Country::Australia,
        Country::UnitedKingdom,
        Country::Canada,
    ];

    /// Resolves an ISO code, three-letter code or English name, ignoring
    /// case, spaces and underscores.
    pub fn from_code(code: &str) -> Option<Country> {
        let normalized: String = code
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "US" | "USA" | "UNITEDSTATES" => Some(Country::UnitedStates),
            "AU" | "AUS" | "AUSTRALIA" => Some(Country::Australia),
            "GB" | "UK" | "GBR" | "UNITEDKINGDOM" => Some(Country::UnitedKingdom),
            "CA" | "CAN" | "CANADA" => Some(Country::Canada),
            _ => None,
        }
    }

    pub fn iso_code(self) -> &'static str {
        match self {
            Country::UnitedStates => "US",
            Country::Australia => "AU",
            Country::UnitedKingdom => "GB",
            Country::Canada => "CA",
        }
    }

    /// Rules in reporting order: when two fall on one date their names
    /// are joined in this order.
    pub fn rules(self) -> Vec<HolidayRule> {
        match self {
            Country::UnitedStates => united_states(),
            Country::Australia => australia(),
            Country::UnitedKingdom => united_kingdom(),
            Country::Canada => canada(),
        }
    }
}

/// US federal holidays.
fn united_states() -> Vec<HolidayRule> {
    use Observance::NearestWeekday;

    vec![
        HolidayRule::fixed("New Year's Day", 1, 1).observed(NearestWeekday),
        HolidayRule::nth_weekday("Martin Luther King Jr. Day", 1, Mon, 3).since(1986),
        HolidayRule::fixed("Washington's Birthday", 2, 22).until(1970),
        HolidayRule::nth_weekday("Washington's Birthday", 2, Mon, 3).since(1971),
        HolidayRule::fixed("Memorial Day", 5, 30).until(1970),
        HolidayRule::last_weekday("Memorial Day", 5, Mon).since(1971),
        HolidayRule::fixed("Juneteenth National Independence Day", 6, 19)
            .observed(NearestWeekday)
            .since(2021),
        HolidayRule::fixed("Independence Day", 7, 4).observed(NearestWeekday),
        HolidayRule::nth_weekday("Labor Day", 9, Mon, 1),
        HolidayRule::fixed("Columbus Day", 10, 12).until(1970),
        HolidayRule::nth_weekday("Columbus Day", 10, Mon, 2).since(1971),
        HolidayRule::nth_weekday("Veterans Day", 10, Mon, 4).since(1971).until(1977),
        HolidayRule::fixed("Veterans Day", 11, 11)
            .observed(NearestWeekday)
            .except(&[1971, 1972, 1973, 1974, 1975, 1976, 1977]),
        HolidayRule::nth_weekday("Thanksgiving", 11, Thu, 4),
        HolidayRule::fixed("Christmas Day", 12, 25).observed(NearestWeekday),
    ]
}

/// National holidays observed in every Australian state.
fn australia() -> Vec<HolidayRule> {
    use Observance::{FollowingMonday, RollTwoDays};

    vec![
        HolidayRule::fixed("New Year's Day", 1, 1).observed(FollowingMonday),
        HolidayRule::fixed("Australia Day", 1, 26).observed(FollowingMonday),
        HolidayRule::easter("Good Friday", -2),
        HolidayRule::easter("Easter Monday", 1),
        HolidayRule::fixed("Anzac Day", 4, 25),
        HolidayRule::nth_weekday("Queen's Birthday", 6, Mon, 2).until(2022),
        HolidayRule::nth_weekday("King's Birthday", 6, Mon, 2).since(2023),
        HolidayRule::fixed("Christmas Day", 12, 25).observed(RollTwoDays),
        HolidayRule::fixed("Boxing Day", 12, 26).observed(RollTwoDays),
    ]
}

/// Bank holidays in England, including the one-off royal occasions.
fn united_kingdom() -> Vec<HolidayRule> {
    use Observance::{FollowingMonday, RollTwoDays};

    vec![
        HolidayRule::fixed("New Year's Day", 1, 1)
            .observed(FollowingMonday)
            .since(1974),
        HolidayRule::easter("Good Friday", -2),
        HolidayRule::easter("Easter Monday", 1),
        HolidayRule::nth_weekday("May Day", 5, Mon, 1)
            .since(1978)
            .except(&[1995, 2020]),
        HolidayRule::single("May Day", 1995, 5, 8),
        HolidayRule::single("May Day", 2020, 5, 8),
        HolidayRule::last_weekday("Spring Bank Holiday", 5, Mon)
            .since(1971)
            .except(&[2002, 2012, 2022]),
        HolidayRule::single("Spring Bank Holiday", 2002, 6, 4),
        HolidayRule::single("Spring Bank Holiday", 2012, 6, 4),
        HolidayRule::single("Spring Bank Holiday", 2022, 6, 2),
        HolidayRule::last_weekday("Late Summer Bank Holiday", 8, Mon).since(1971),
        HolidayRule::fixed("Christmas Day", 12, 25).observed(RollTwoDays),
        HolidayRule::fixed("Boxing Day", 12, 26).observed(RollTwoDays),
        HolidayRule::single("Millennium Celebrations", 1999, 12, 31),
        HolidayRule::single("Golden Jubilee of Elizabeth II", 2002, 6, 3),
        HolidayRule::single("Wedding of William and Catherine", 2011, 4, 29),
        HolidayRule::single("Diamond Jubilee of Elizabeth II", 2012, 6, 5),
        HolidayRule::single("Platinum Jubilee of Elizabeth II", 2022, 6, 3),
        HolidayRule::single("State Funeral of Queen Elizabeth II", 2022, 9, 19),
        HolidayRule::single("Coronation of Charles III", 2023, 5, 8),
    ]
}

/// Canadian federal statutory holidays.
fn canada() -> Vec<HolidayRule> {
    use crate::calendar::rules::DateRule;
    use Observance::{FollowingMonday, RollTwoDays};

    vec![
        HolidayRule::fixed("New Year's Day", 1, 1).observed(FollowingMonday),
        HolidayRule::easter("Good Friday", -2),
        HolidayRule::new(
            "Victoria Day",
            DateRule::WeekdayOnOrBefore {
                month: 5,
                day: 24,
                weekday: Mon,
            },
        ),
        HolidayRule::fixed("Canada Day", 7, 1).observed(FollowingMonday),
        HolidayRule::nth_weekday("Labour Day", 9, Mon, 1),
        HolidayRule::fixed("National Day for Truth and Reconciliation", 9, 30)
            .observed(FollowingMonday)
            .since(2021),
        HolidayRule::nth_weekday("Thanksgiving", 10, Mon, 2),
        HolidayRule::fixed("Christmas Day", 12, 25).observed(RollTwoDays),
        HolidayRule::fixed("Boxing Day", 12, 26).observed(RollTwoDays),
    ]
}
