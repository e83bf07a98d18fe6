//! Pure record and store logic.
//!
//! Core modules perform no I/O. They operate on in-memory values and are
//! exercised directly by unit tests.

pub mod error;
pub mod person;
pub mod store;
