//! Integration tests for snapsheet.
//!
//! These tests drive a full controller through pointer, keyboard, backdrop
//! and prop triggers and check the committed state and observer calls.

mod controlled_prop_tests;
mod keyboard_nav_tests;
