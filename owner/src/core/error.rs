//! Error kinds surfaced by the record and store APIs.

/// Failures raised while turning caller input into a [`Person`](super::person::Person).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OwnerError {
    /// The field-bag was not an object with string `firstName` / `lastName` keys.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
