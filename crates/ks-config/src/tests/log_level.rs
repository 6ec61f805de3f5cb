use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_mixed_case_name_when_parsed_then_level_matches() {
    assert_that!(*LogLevel::parse_lenient("WaRn"), eq(LevelFilter::Warn));
    assert_that!(*LogLevel::parse_lenient(" debug "), eq(LevelFilter::Debug));
    assert_that!(*LogLevel::parse_lenient("off"), eq(LevelFilter::Off));
}

#[test]
fn given_unknown_name_when_parsed_then_defaults_to_info() {
    let level = LogLevel::from_str("verbose").unwrap();

    assert_that!(LevelFilter::from(level), eq(LevelFilter::Info));
}
