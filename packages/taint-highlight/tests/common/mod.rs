//! Common test utilities for taint-highlight
//!
//! Shared fixtures for integration and property tests.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
