//! Command-line front end: argument parsing and output formatting

pub mod args;
pub mod output;
