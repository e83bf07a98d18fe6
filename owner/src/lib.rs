//! Encapsulated default-owner record.
//!
//! A shared "default owner" is kept behind accessors that copy on the way out
//! and on the way in, so no caller ever holds a value aliasing the shared slot.
//!
//! - **[`core`]**: The immutable [`Person`](core::person::Person) record and the
//!   injectable [`OwnerStore`](core::store::OwnerStore). No I/O.
//! - **[`io`]**: Configuration loading.
//!
//! [`default_owner`] exposes one process-wide store; [`spaceship`] shows a
//! caller holding on to an owner while the default changes underneath it.

pub mod core;
pub mod default_owner;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod spaceship;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::error::OwnerError;
pub use crate::core::person::{Person, PersonData};
pub use crate::core::store::OwnerStore;
pub use crate::default_owner::{default_owner, set_default_owner};
