//! Integration tests that run the batquery binary against fake battery
//! directories.

mod arg_tests;
mod util;
