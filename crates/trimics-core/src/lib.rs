//! Shared building blocks for the trimics workspace: errors, constants and
//! layered settings.

pub mod config;
pub mod constants;
pub mod cutoff;
pub mod error;
