//! Shared utilities for the physics crates

pub mod error;
