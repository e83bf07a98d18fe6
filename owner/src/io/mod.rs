//! I/O helpers for owner commands.

pub mod config;
