//! Integration test utilities for the emoji gallery
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a stand-in generation backend.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
