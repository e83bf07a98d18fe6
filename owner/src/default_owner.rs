//! Process-wide default owner.
//!
//! Thin wrappers over a single lazily created [`OwnerStore`]. Code that can
//! take a store explicitly should prefer that; these exist for callers that
//! only need the shared default.

use std::sync::LazyLock;

use crate::core::person::{Person, PersonData};
use crate::core::store::OwnerStore;

static DEFAULT_OWNER: LazyLock<OwnerStore> = LazyLock::new(OwnerStore::new);

/// Copy of the current process-wide default owner.
pub fn default_owner() -> Person {
    DEFAULT_OWNER.get()
}

/// Replace the process-wide default owner.
pub fn set_default_owner(data: &PersonData) {
    DEFAULT_OWNER.set(data);
}
