//! Holder for the current default owner.
//!
//! Reads and writes both copy: [`OwnerStore::get`] hands out a fresh
//! [`Person`] and [`OwnerStore::set`] builds its own record from the caller's
//! field-bag. No caller can hold a value that aliases the stored record.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use super::person::{Person, PersonData};

pub const DEFAULT_FIRST_NAME: &str = "Kaio";
pub const DEFAULT_LAST_NAME: &str = "Silveira";

/// The record every fresh store starts with.
pub fn initial_owner() -> Person {
    Person::new(&PersonData::new(DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME))
}

#[derive(Debug)]
pub struct OwnerStore {
    current: RwLock<Person>,
}

impl Default for OwnerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnerStore {
    pub fn new() -> Self {
        Self::with_owner(initial_owner())
    }

    pub fn with_owner(owner: Person) -> Self {
        Self {
            current: RwLock::new(owner),
        }
    }

    /// Return a copy of the current owner.
    pub fn get(&self) -> Person {
        // A poisoned lock still guards a whole `Person`: writers only swap values.
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.clone()
    }

    /// Replace the current owner with a record built from `data`.
    ///
    /// The new record is constructed before the write lock is taken, so readers
    /// see either the old or the new owner.
    pub fn set(&self, data: &PersonData) {
        let next = Person::new(data);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        debug!(from = %*current, to = %next, "replacing default owner");
        *current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{data, person};

    #[test]
    fn new_store_starts_with_initial_owner() {
        let store = OwnerStore::new();
        let owner = store.get();
        assert_eq!(owner.first_name(), "Kaio");
        assert_eq!(owner.last_name(), "Silveira");
    }

    #[test]
    fn set_replaces_owner() {
        let store = OwnerStore::new();
        store.set(&data("Enzo", "Silveira"));
        let owner = store.get();
        assert_eq!(owner.first_name(), "Enzo");
        assert_eq!(owner.last_name(), "Silveira");
    }

    /// Changing what a caller did with an earlier read must not reach the store.
    #[test]
    fn get_returns_defensive_copy() {
        let store = OwnerStore::new();
        let mut held = vec![store.get()];
        held[0] = person("Enzo", "Silveira");
        assert_eq!(store.get(), person("Kaio", "Silveira"));
    }

    #[test]
    fn consecutive_gets_are_equal_but_independent() {
        let store = OwnerStore::new();
        let first = store.get();
        let second = store.get();
        assert_eq!(first, second);
        assert_ne!(first.first_name().as_ptr(), second.first_name().as_ptr());
    }

    #[test]
    fn set_copies_field_bag_in() {
        let store = OwnerStore::new();
        let mut bag = data("Enzo", "Silveira");
        store.set(&bag);
        bag.first_name = "Changed".to_string();
        assert_eq!(store.get().first_name(), "Enzo");
    }

    #[test]
    fn repeated_identical_set_is_idempotent() {
        let store = OwnerStore::new();
        let bag = data("Enzo", "Silveira");
        store.set(&bag);
        assert_eq!(store.get(), Person::new(&bag));
        store.set(&bag);
        assert_eq!(store.get(), Person::new(&bag));
    }

    #[test]
    fn earlier_reads_survive_later_sets() {
        let store = OwnerStore::new();
        store.set(&data("Gabriella", "Caetano"));
        let before = store.get();
        store.set(&data("Morpheus", ""));
        assert_eq!(before, person("Gabriella", "Caetano"));
        assert_eq!(store.get(), person("Morpheus", ""));
    }

    #[test]
    fn with_owner_uses_given_record() {
        let store = OwnerStore::with_owner(person("Trinity", ""));
        assert_eq!(store.get().first_name(), "Trinity");
    }

    #[test]
    fn concurrent_readers_see_whole_records() {
        let store = OwnerStore::new();
        let a = person("Kaio", "Silveira");
        let b = person("Enzo", "Caetano");
        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..200 {
                    if i % 2 == 0 {
                        store.set(&b.to_data());
                    } else {
                        store.set(&a.to_data());
                    }
                }
            });
            for _ in 0..200 {
                let seen = store.get();
                assert!(seen == a || seen == b, "torn read: {seen}");
            }
        });
    }
}
