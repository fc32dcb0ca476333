#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Day-of-year and week-number calculation for dates in the proleptic
//! Gregorian calendar.
//!
//! # Examples
//!
//! ```
//! use dayweek::{compute, CalendarDate, WeekStart, Weekday};
//!
//! let result = compute(2021, 3, 1, 0).unwrap();
//! assert_eq!(result.day_of_year, 60);
//! assert_eq!(result.week_number, 9);
//!
//! let date = CalendarDate::ymd(2021, 1, 1);
//! let result = date.day_week(WeekStart::from(Weekday::Monday)).unwrap();
//! assert_eq!(result.week_number, 1);
//! ```

mod cal;

pub use crate::cal::date::{CalendarDate, Error, Month, Weekday, Year};
pub use crate::cal::week::{compute, compute_with, DayWeek, LeapDayRule, WeekStart};

#[cfg(feature = "parse")]
pub use crate::cal::parse::ParseError;
