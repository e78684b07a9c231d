//! Shared test utilities for the type chart tests.
//!
//! This module contains the fixture types and the helpers that check them
//! against the engine. It is designed to be imported by test binaries.

pub mod fixtures;
pub mod helpers;
