//! Command-line interface module.
//!
//! Provides argument parsing and command execution.

pub mod args;
pub mod commands;
