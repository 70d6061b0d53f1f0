//! label-sync CLI library exports.
//!
//! The binary is a thin wrapper; everything it runs lives here so it can be
//! tested without spawning a process.

pub mod commands;
pub mod config;
pub mod errors;
pub mod progress;
pub mod prompt;
