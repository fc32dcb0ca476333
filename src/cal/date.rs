//! Years, months, weekdays, and calendar dates.

use std::error::Error as ErrorTrait;
use std::fmt;

use self::Month::*;
use self::Weekday::*;


/// A single year in the proleptic Gregorian calendar.
///
/// This is just a wrapper around `u32` that performs year-related tests.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Year(pub u32);

impl Year {

    /// Returns whether this year is a leap year: divisible by four, except
    /// for the century years that are not divisible by four hundred.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dayweek::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// assert_eq!(Year(2020).is_leap_year(), true);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }
}

/// A **calendar date** is a year, month, and day triple, as handed over by
/// the caller.
///
/// None of the fields are checked when the value is built. The month gets
/// checked when a calculation needs it; the day never does.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct CalendarDate {

    /// The year, in absolute terms.
    pub year: u32,

    /// The month of the year, from 1 to 12.
    pub month: u32,

    /// The day of the month, from 1 to 31.
    pub day: u32,
}

impl CalendarDate {

    /// Creates a new calendar date from the given year, month, and day
    /// fields, without checking any of them.
    ///
    /// ```rust
    /// use dayweek::CalendarDate;
    ///
    /// let date = CalendarDate::ymd(1969, 7, 20);
    /// assert_eq!(date.year, 1969);
    /// assert_eq!(date.month, 7);
    /// assert_eq!(date.day, 20);
    /// ```
    pub fn ymd(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the year of this date.
    pub fn year(&self) -> Year {
        Year(self.year)
    }

    /// Returns the month of this date, or an error if the month field is
    /// outside of `1 ..= 12`.
    ///
    /// ```rust
    /// use dayweek::{CalendarDate, Month};
    ///
    /// assert_eq!(CalendarDate::ymd(2015, 6, 26).month(), Ok(Month::June));
    /// assert!(CalendarDate::ymd(2015, 13, 1).month().is_err());
    /// ```
    pub fn month(&self) -> Result<Month, Error> {
        Month::from_one(self.month)
    }
}


/// An error that can occur when a calculation is handed a field it cannot
/// work with.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Error {

    /// A field was outside of the range the calculation accepts.
    InvalidArgument {

        /// The name of the offending field, such as `"month"`.
        name: &'static str,

        /// The value that was passed in.
        value: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidArgument { name, value } => {
                write!(f, "invalid argument: {} {} is out of range", name, value)
            }
        }
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is 1-indexed, so January becomes 1 when you use `as u32`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    ///
    /// ```rust
    /// use dayweek::Month;
    ///
    /// assert_eq!(Month::February.days_in_month(true), 29);
    /// assert_eq!(Month::February.days_in_month(false), 28);
    /// assert_eq!(Month::September.days_in_month(false), 30);
    /// ```
    pub fn days_in_month(self, leap_year: bool) -> u32 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    ///
    /// ```rust
    /// use dayweek::Month;
    ///
    /// assert_eq!(Month::January.days_before_start(), 0);
    /// assert_eq!(Month::March.days_before_start(), 59);
    /// assert_eq!(Month::December.days_before_start(), 334);
    /// ```
    pub fn days_before_start(self) -> u32 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns whether this month comes after February, which is where the
    /// leap day sits.
    pub fn is_after_february(self) -> bool {
        self > February
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use dayweek::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// assert!(Month::from_one(13).is_err());
    /// ```
    pub fn from_one(month: u32) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::InvalidArgument { name: "month", value: i64::from(month) }),
        })
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0 when counting from zero, but Day 7 when counting from
// one. Week-start codes use the second numbering, which is why a code of
// 0 gets read as Sunday too.

impl Weekday {

    /// Returns the ISO-8601 number of this weekday, with Monday as 1 and
    /// Sunday as 7.
    pub fn days_from_monday_as_one(self) -> u32 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use dayweek::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: u32) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::InvalidArgument { name: "weekday", value: i64::from(weekday) }),
        })
    }

    /// Return the weekday based on a number, with Monday as Day 1 and
    /// Sunday as Day 7.
    ///
    /// ```rust
    /// use dayweek::Weekday;
    /// assert_eq!(Weekday::from_one(7), Ok(Weekday::Sunday));
    /// assert!(Weekday::from_one(0).is_err());
    /// ```
    pub fn from_one(weekday: u32) -> Result<Self, Error> {
        Ok(match weekday {
            7 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::InvalidArgument { name: "weekday", value: i64::from(weekday) }),
        })
    }
}
