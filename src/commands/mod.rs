//! CLI commands

pub mod config;
pub mod run;
pub mod trace;
pub mod utils;
