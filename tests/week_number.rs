extern crate dayweek;
use dayweek::{compute, CalendarDate, WeekStart, Weekday};


#[test]
fn new_year_with_default_start() {
    let result = compute(2021, 1, 1, 0).unwrap();
    assert_eq!(result.day_of_year, 1);
    assert_eq!(result.week_number, 0);
}

#[test]
fn new_year_with_monday_start() {
    assert_eq!(compute(2021, 1, 1, 1).unwrap().week_number, 1);
}

#[test]
fn march_first() {
    assert_eq!(compute(2021, 3, 1, 0).unwrap().week_number, 9);
    assert_eq!(compute(2020, 3, 1, 0).unwrap().week_number, 9);
}

#[test]
fn zero_is_seven() {
    for day in 1 ..= 31 {
        assert_eq!(compute(2019, 8, day, 0), compute(2019, 8, day, 7));
    }
}

#[test]
fn named_weekdays() {
    let date = CalendarDate::ymd(2021, 1, 1);
    let monday = date.day_week(WeekStart::from(Weekday::Monday)).unwrap();
    let sunday = date.day_week(WeekStart::from(Weekday::Sunday)).unwrap();

    assert_eq!(monday.week_number, 1);
    assert_eq!(sunday, date.day_week(WeekStart(0)).unwrap());
}

#[test]
fn week_increases_every_seven_days() {
    for start in 0 .. 8 {
        for day in 1 ..= 24 {
            let this = compute(2022, 5, day, start).unwrap();
            let next = compute(2022, 5, day + 7, start).unwrap();
            assert_eq!(this.week_number + 1, next.week_number);
        }
    }
}

#[test]
fn large_start_codes_go_negative() {
    assert_eq!(compute(2021, 1, 1, 30).unwrap().week_number, -2);
}

#[test]
fn idempotent() {
    let first  = compute(2024, 7, 14, 3).unwrap();
    let second = compute(2024, 7, 14, 3).unwrap();
    assert_eq!(first, second);

    let _ = compute(1999, 12, 31, 5).unwrap();
    assert_eq!(compute(2024, 7, 14, 3).unwrap(), first);
}

#[test]
fn independent_across_threads() {
    let handles: Vec<_> = (1 ..= 12)
        .map(|month| std::thread::spawn(move || compute(2020, month, 10, 1).unwrap()))
        .collect();

    for (month, handle) in (1 ..= 12).zip(handles) {
        assert_eq!(handle.join().unwrap(), compute(2020, month, 10, 1).unwrap());
    }
}
