use crate::calendar::easter::easter_sunday;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// How a holiday is moved when it falls on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    None,
    /// Saturday to the preceding Friday, Sunday to the following Monday.
    NearestWeekday,
    /// Saturday or Sunday to the following Monday.
    FollowingMonday,
    /// Saturday or Sunday two days later. Used for the Christmas/Boxing Day pair.
    RollTwoDays,
}

impl Observance {
    /// Substitute date for `date`, if one applies.
    pub fn observed_date(self, date: NaiveDate) -> Option<NaiveDate> {
        let shift = match (self, date.weekday()) {
            (Observance::None, _) => return None,
            (Observance::NearestWeekday, Weekday::Sat) => -1,
            (Observance::NearestWeekday, Weekday::Sun) => 1,
            (Observance::FollowingMonday, Weekday::Sat) => 2,
            (Observance::FollowingMonday, Weekday::Sun) => 1,
            (Observance::RollTwoDays, Weekday::Sat | Weekday::Sun) => 2,
            _ => return None,
        };
        date.checked_add_signed(Duration::days(shift))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    Fixed { month: u32, day: u32 },
    /// `nth` is 1-based.
    NthWeekday { month: u32, weekday: Weekday, nth: u8 },
    LastWeekday { month: u32, weekday: Weekday },
    /// Last `weekday` on or before `month`/`day`.
    WeekdayOnOrBefore { month: u32, day: u32, weekday: Weekday },
    /// Days relative to Western Easter Sunday.
    EasterOffset(i64),
    Single { year: i32, month: u32, day: u32 },
}

impl DateRule {
    pub fn date_in(self, year: i32) -> Option<NaiveDate> {
        match self {
            DateRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            DateRule::NthWeekday {
                month,
                weekday,
                nth,
            } => NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth),
            DateRule::LastWeekday { month, weekday } => {
                let last = last_day_of_month(year, month)?;
                let back = days_back_to(last.weekday(), weekday);
                last.checked_sub_signed(Duration::days(back))
            }
            DateRule::WeekdayOnOrBefore {
                month,
                day,
                weekday,
            } => {
                let anchor = NaiveDate::from_ymd_opt(year, month, day)?;
                let back = days_back_to(anchor.weekday(), weekday);
                anchor.checked_sub_signed(Duration::days(back))
            }
            DateRule::EasterOffset(offset) => {
                easter_sunday(year)?.checked_add_signed(Duration::days(offset))
            }
            DateRule::Single {
                year: only,
                month,
                day,
            } => {
                if only == year {
                    NaiveDate::from_ymd_opt(year, month, day)
                } else {
                    None
                }
            }
        }
    }
}

fn days_back_to(from: Weekday, to: Weekday) -> i64 {
    let from = from.num_days_from_monday() as i64;
    let to = to.num_days_from_monday() as i64;
    (from - to).rem_euclid(7)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// A named holiday with its date rule and the years it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRule {
    pub name: &'static str,
    pub date: DateRule,
    pub observance: Observance,
    pub since: Option<i32>,
    pub until: Option<i32>,
    pub except: &'static [i32],
}

impl HolidayRule {
    pub fn new(name: &'static str, date: DateRule) -> Self {
        Self {
            name,
            date,
            observance: Observance::None,
            since: None,
            until: None,
            except: &[],
        }
    }

    pub fn fixed(name: &'static str, month: u32, day: u32) -> Self {
        Self::new(name, DateRule::Fixed { month, day })
    }

    pub fn nth_weekday(name: &'static str, month: u32, weekday: Weekday, nth: u8) -> Self {
        Self::new(
            name,
            DateRule::NthWeekday {
                month,
                weekday,
                nth,
            },
        )
    }

    pub fn last_weekday(name: &'static str, month: u32, weekday: Weekday) -> Self {
        Self::new(name, DateRule::LastWeekday { month, weekday })
    }

    pub fn easter(name: &'static str, offset: i64) -> Self {
        Self::new(name, DateRule::EasterOffset(offset))
    }

    pub fn single(name: &'static str, year: i32, month: u32, day: u32) -> Self {
        Self::new(name, DateRule::Single { year, month, day })
    }

    pub fn observed(mut self, observance: Observance) -> Self {
        self.observance = observance;
        self
    }

    pub fn since(mut self, year: i32) -> Self {
        self.since = Some(year);
        self
    }

    pub fn until(mut self, year: i32) -> Self {
        self.until = Some(year);
        self
    }

    pub fn except(mut self, years: &'static [i32]) -> Self {
        self.except = years;
        self
    }

    pub fn applies_in(&self, year: i32) -> bool {
        self.since.map_or(true, |since| year >= since)
            && self.until.map_or(true, |until| year <= until)
            && !self.except.contains(&year)
    }

    /// Dates generated by this rule for `year`, observed substitutes included.
    ///
    /// A substitute may land in a neighbouring year (New Year's Day observed
    /// on December 31).
    pub fn occurrences(&self, year: i32) -> Vec<(NaiveDate, String)> {
        if !self.applies_in(year) {
            return Vec::new();
        }
        let Some(date) = self.date.date_in(year) else {
            return Vec::new();
        };

        let mut found = vec![(date, self.name.to_string())];
        if let Some(observed) = self.observance.observed_date(date) {
            found.push((observed, format!("{} (Observed)", self.name)));
        }
        found
    }
}
