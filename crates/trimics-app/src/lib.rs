//! The `trimics` command: read a calendar file, keep the events that are
//! still current, write the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod run;
