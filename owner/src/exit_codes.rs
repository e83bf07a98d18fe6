//! Stable exit codes for owner CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, field-bag input, or other errors.
pub const INVALID: i32 = 1;
