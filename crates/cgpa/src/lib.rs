//! Application logic for the `cgpa` binary.

pub mod app;
pub mod config;
pub mod errors;
