//! Shared utilities: logging setup and terminal restoration.

pub mod logger;
pub mod term;
