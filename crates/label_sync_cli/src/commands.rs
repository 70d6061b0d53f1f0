//! Command modules for the label-sync CLI.
//!
//! - `sync_cmd`: converge the labels of a repository to the label file

pub mod sync_cmd;
