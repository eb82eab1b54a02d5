//! Command implementations behind the `mgraph` binary.

pub mod commands;
