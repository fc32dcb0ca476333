//! Day-of-year and week-number calculation.
//!
//! The day of the year is read off a table of the days that have elapsed
//! before each month begins, plus the day of the month, plus one more day
//! when the year is a leap year. The week number is then derived from the
//! day of the year and a week-start code:
//!
//! ```text
//! week = (yearday - start + 10) / 7
//! ```
//!
//! where a start code of 0 is read as 7.

use crate::cal::date::{CalendarDate, Error, Month, Weekday, Year};


/// A **week start** code, naming the weekday that weeks are counted from.
///
/// Codes are used arithmetically, so any value is accepted. A code of 0
/// is an alias for 7.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Hash)]
pub struct WeekStart(pub u32);

impl WeekStart {

    /// Returns the code that actually takes part in the calculation.
    ///
    /// ```
    /// use dayweek::WeekStart;
    ///
    /// assert_eq!(WeekStart(0).effective(), 7);
    /// assert_eq!(WeekStart(1).effective(), 1);
    /// assert_eq!(WeekStart(40).effective(), 40);
    /// ```
    pub fn effective(self) -> u32 {
        if self.0 == 0 { 7 } else { self.0 }
    }

    /// Reads a weekday number that counts from Sunday as 0, turning it into
    /// the week start of that weekday. Only 0 to 6 are accepted.
    ///
    /// ```
    /// use dayweek::WeekStart;
    ///
    /// assert_eq!(WeekStart::from_zero(0), Ok(WeekStart(7)));
    /// assert_eq!(WeekStart::from_zero(1), Ok(WeekStart(1)));
    /// assert!(WeekStart::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: u32) -> Result<Self, Error> {
        Weekday::from_zero(weekday).map(Self::from)
    }
}

impl From<Weekday> for WeekStart {
    fn from(weekday: Weekday) -> Self {
        Self(weekday.days_from_monday_as_one())
    }
}


/// Which months of a leap year get the extra day added to their day of
/// the year.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum LeapDayRule {

    /// Every month of a leap year is shifted by one day, January and
    /// February included. This is the default.
    EveryMonth,

    /// Only March to December are shifted, which gives the usual ordinal
    /// day of the year.
    AfterFebruary,
}

impl Default for LeapDayRule {
    fn default() -> Self {
        LeapDayRule::EveryMonth
    }
}

impl LeapDayRule {
    fn offset(self, year: Year, month: Month) -> u32 {
        let applies = match self {
            LeapDayRule::EveryMonth     => true,
            LeapDayRule::AfterFebruary  => month.is_after_february(),
        };

        if applies && year.is_leap_year() { 1 } else { 0 }
    }
}


/// The result of a day-and-week calculation.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
pub struct DayWeek {

    /// The position of the date within its year, with the 1st of January
    /// as day 1.
    pub day_of_year: i64,

    /// The week number derived from the day of the year. There is no
    /// guarantee that this lies between 1 and 53: early January can be
    /// week 0, and large week-start codes give negative weeks.
    pub week_number: i64,
}


/// Computes the day of the year and the week number of the given date,
/// counting weeks from the given week-start code, and adding the leap day
/// to every month of a leap year.
///
/// Returns an error if `month` is outside of `1 ..= 12`. The day is not
/// checked against the length of the month.
///
/// ### Examples
///
/// ```
/// use dayweek::compute;
///
/// let result = compute(2020, 3, 1, 0).unwrap();
/// assert_eq!(result.day_of_year, 61);
/// assert_eq!(result.week_number, 9);
///
/// assert!(compute(2020, 13, 1, 0).is_err());
/// ```
pub fn compute(year: u32, month: u32, day: u32, week_start: u32) -> Result<DayWeek, Error> {
    compute_with(LeapDayRule::default(), year, month, day, week_start)
}

/// Computes the day of the year and the week number of the given date,
/// applying the leap day according to the given rule.
///
/// ### Examples
///
/// ```
/// use dayweek::{compute_with, LeapDayRule};
///
/// let every = compute_with(LeapDayRule::EveryMonth, 2020, 1, 1, 0).unwrap();
/// assert_eq!(every.day_of_year, 2);
///
/// let after = compute_with(LeapDayRule::AfterFebruary, 2020, 1, 1, 0).unwrap();
/// assert_eq!(after.day_of_year, 1);
/// ```
pub fn compute_with(rule: LeapDayRule, year: u32, month: u32, day: u32, week_start: u32) -> Result<DayWeek, Error> {
    CalendarDate::ymd(year, month, day).day_week_with(rule, WeekStart(week_start))
}


impl CalendarDate {

    /// Computes the day of the year and week number of this date.
    ///
    /// This is the same calculation as the `compute` function.
    ///
    /// ```
    /// use dayweek::{CalendarDate, WeekStart};
    ///
    /// let result = CalendarDate::ymd(2021, 3, 1).day_week(WeekStart(0)).unwrap();
    /// assert_eq!(result.day_of_year, 60);
    /// assert_eq!(result.week_number, 9);
    /// ```
    pub fn day_week(&self, week_start: WeekStart) -> Result<DayWeek, Error> {
        self.day_week_with(LeapDayRule::default(), week_start)
    }

    /// Computes the day of the year and week number of this date, applying
    /// the leap day according to the given rule.
    pub fn day_week_with(&self, rule: LeapDayRule, week_start: WeekStart) -> Result<DayWeek, Error> {
        let month = match self.month() {
            Ok(month) => month,
            Err(e) => {
                #[cfg(feature = "log")]
                log::warn!(month = self.month, year = self.year; "Rejected month out of range");
                return Err(e);
            }
        };

        let year = self.year();
        let day_of_year = i64::from(month.days_before_start())
                        + i64::from(self.day)
                        + i64::from(rule.offset(year, month));

        let week_number = (day_of_year - i64::from(week_start.effective()) + 10) / 7;

        #[cfg(feature = "log")]
        log::trace!(
            day_of_year = day_of_year, week_number = week_number;
            "Computed {:?} under {:?}", self, rule
        );

        Ok(DayWeek { day_of_year, week_number })
    }
}
