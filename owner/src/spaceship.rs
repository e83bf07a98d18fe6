//! Caller-side scenario: a spaceship keeps the owner it was given.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::person::{Person, PersonData};
use crate::core::store::OwnerStore;

pub const DEFAULT_SHIP_NAME: &str = "Nebuchadnezzar";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spaceship {
    pub name: String,
    pub owner: Person,
}

impl Spaceship {
    pub fn new(name: impl Into<String>, owner: Person) -> Self {
        Self {
            name: name.into(),
            owner,
        }
    }
}

/// Owner changes applied after the spaceship is assigned its owner.
pub fn default_updates() -> Vec<PersonData> {
    vec![
        PersonData::new("Gabriella", "Caetano"),
        PersonData::new("Morpheus", ""),
    ]
}

/// Assign the store's current owner to a new spaceship, then apply `updates`.
///
/// The returned spaceship still carries the owner read before any update.
pub fn run_scenario(store: &OwnerStore, name: &str, updates: &[PersonData]) -> Spaceship {
    let ship = Spaceship::new(name, store.get());
    info!(ship = %ship.name, owner = %ship.owner, "spaceship assigned owner");
    for update in updates {
        store.set(update);
        debug!(owner = %store.get(), "default owner updated");
    }
    ship
}
