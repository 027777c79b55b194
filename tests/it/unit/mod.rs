//! Unit tests for snapsheet.

mod config_tests;
mod gesture_tests;
