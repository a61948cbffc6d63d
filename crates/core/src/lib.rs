// Person domain
//
// This crate holds the person record, its loosely-typed identifier and the
// in-memory ordered store the HTTP layer reads and mutates.
//
// Key design decisions:
// - The collection keeps insertion order and allows duplicate ids (first match wins)
// - Every store operation holds the lock for its whole find-and-mutate step
// - Removal is by resolved position, never by value

pub mod error;
pub mod person;
pub mod store;

pub use error::{Result, StoreError};
pub use person::{Person, PersonId, UpdatePerson};
pub use store::PersonStore;
