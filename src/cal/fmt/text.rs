use std::fmt;

use crate::cal::week::DayWeek;


/// Renders as `day 060, week 09`. Weeks below zero keep their sign.
impl fmt::Display for DayWeek {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.week_number < 0 {
            write!(f, "day {:03}, week {:+03}", self.day_of_year, self.week_number)
        }
        else {
            write!(f, "day {:03}, week {:02}", self.day_of_year, self.week_number)
        }
    }
}


#[cfg(test)]
mod test {
    use crate::cal::week::{compute, DayWeek};

    #[test]
    fn padded() {
        let result = compute(2021, 3, 1, 0).unwrap();
        assert_eq!(result.to_string(), "day 060, week 09");
    }

    #[test]
    fn week_zero() {
        let result = compute(2021, 1, 1, 0).unwrap();
        assert_eq!(result.to_string(), "day 001, week 00");
    }

    #[test]
    fn late_in_the_year() {
        let result = DayWeek { day_of_year: 366, week_number: 53 };
        assert_eq!(result.to_string(), "day 366, week 53");
    }

    #[test]
    fn negative_week() {
        let result = DayWeek { day_of_year: 1, week_number: -12 };
        assert_eq!(result.to_string(), "day 001, week -12");
    }

    #[test]
    fn small_negative_week() {
        let result = DayWeek { day_of_year: 1, week_number: -3 };
        assert_eq!(result.to_string(), "day 001, week -03");
    }
}
