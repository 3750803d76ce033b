//! Integration test harness for the cclight CLI.

mod helpers;

mod cli_test;
mod highlight_test;
