use std::fmt;

use crate::cal::date::CalendarDate;
use crate::cal::week::DayWeek;


impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.year <= 9999 {
            write!(f, "CalendarDate({:04}-{:02}-{:02})", self.year, self.month, self.day)
        }
        else {
            write!(f, "CalendarDate({:+05}-{:02}-{:02})", self.year, self.month, self.day)
        }
    }
}

impl fmt::Debug for DayWeek {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DayWeek(day {}, week {})", self.day_of_year, self.week_number)
    }
}
