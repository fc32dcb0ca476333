use std::convert::TryFrom;
use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use crate::cal::date::{CalendarDate, Error as DateError};


/// Parses an ISO-8601 calendar date, such as `2015-06-26` or `20150626`.
///
/// Months outside `1 ..= 12` are already refused by the ISO-8601 parser.
/// Years before year 0 are refused, as are week dates and ordinal dates,
/// which don’t name a month and day.
///
/// ```rust
/// use dayweek::CalendarDate;
///
/// let date: CalendarDate = "2021-03-01".parse().unwrap();
/// assert_eq!(date, CalendarDate::ymd(2021, 3, 1));
///
/// assert!("2021-W09-1".parse::<CalendarDate>().is_err());
/// ```
impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::date(input) {
            Ok(fields)  => fields_to_date(fields),
            Err(e)      => Err(ParseError::Parse(e)),
        }
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<CalendarDate, ParseError> {
    if let iso8601::Date::YMD { year, month, day } = fields {
        let year = u32::try_from(year)
            .map_err(|_| DateError::InvalidArgument { name: "year", value: i64::from(year) })?;

        Ok(CalendarDate::ymd(year, month, day))
    }
    else {
        Err(ParseError::NotCalendarDate)
    }
}


/// An error that can occur when parsing a calendar date from a string.
#[derive(PartialEq, Debug, Clone)]
pub enum ParseError {

    /// The string parsed, but its year is negative.
    Date(DateError),

    /// The string was a week date or an ordinal date.
    NotCalendarDate,

    /// The string was not an ISO-8601 date at all.
    Parse(String),
}

impl From<DateError> for ParseError {
    fn from(error: DateError) -> Self {
        ParseError::Date(error)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Date(ref error)   => write!(f, "parsing resulted in an invalid date: {}", error),
            ParseError::NotCalendarDate   => write!(f, "expected a year-month-day date"),
            ParseError::Parse(ref string) => write!(f, "parse error: {}", string),
        }
    }
}

impl ErrorTrait for ParseError {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            ParseError::Date(ref error)  => Some(error),
            _                            => None,
        }
    }
}
