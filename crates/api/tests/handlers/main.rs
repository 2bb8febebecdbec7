#[path = "../test_utils.rs"]
mod test_utils;

mod schedule_test;
