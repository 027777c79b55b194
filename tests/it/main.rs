//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Builders, recording surfaces and gesture drivers
//! - integration: Multi-trigger workflow tests against a full controller
//! - unit: Single-component unit tests

mod helpers;
mod integration;
mod unit;
