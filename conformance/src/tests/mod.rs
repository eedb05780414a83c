//! Shared fixtures for the style guide and OOPS! checks.

pub mod fixtures;
