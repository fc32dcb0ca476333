extern crate dayweek;
use dayweek::compute;

extern crate rustc_serialize;
use rustc_serialize::json::Json;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;


fn field(json: &Json, index: usize) -> i64 {
    json.as_array().unwrap()[index].as_i64().unwrap()
}

#[test]
fn matches_reference_table() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/reference.json");
    let mut contents = String::new();
    let _ = File::open(&path).unwrap().read_to_string(&mut contents).unwrap();

    let examples = Json::from_str(&contents).unwrap();
    let examples = examples.as_array().unwrap();
    assert!(!examples.is_empty());

    for example in examples {
        let example = example.as_array().unwrap();
        let (input, expected) = (&example[0], &example[1]);

        let result = compute(
            field(input, 0) as u32, field(input, 1) as u32,
            field(input, 2) as u32, field(input, 3) as u32,
        ).unwrap();

        assert_eq!(result.day_of_year, field(expected, 0), "day of year for {}", input);
        assert_eq!(result.week_number, field(expected, 1), "week number for {}", input);
    }
}
