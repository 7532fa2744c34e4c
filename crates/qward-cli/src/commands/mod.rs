//! CLI command implementations.

pub mod backends;
pub mod common;
pub mod run;
pub mod sweep;
pub mod version;
