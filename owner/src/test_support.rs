//! Test-only helpers for constructing owner records.

use crate::core::person::{Person, PersonData};

/// Field-bag with the given names.
pub fn data(first_name: &str, last_name: &str) -> PersonData {
    PersonData::new(first_name, last_name)
}

/// Record with the given names.
pub fn person(first_name: &str, last_name: &str) -> Person {
    Person::new(&data(first_name, last_name))
}

/// Write `contents` to `owner.toml` inside a fresh temp dir.
pub fn config_dir(contents: &str) -> std::io::Result<tempfile::TempDir> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("owner.toml"), contents)?;
    Ok(dir)
}
