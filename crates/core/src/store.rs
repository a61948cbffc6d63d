// In-memory person store
// Decision: Use parking_lot for thread-safe access
// Decision: Linear scan over an ordered Vec; duplicate ids are legal so an id
// index would have to track lists of positions that shift on every removal
//
// All data is stored in memory and lost on restart.

use parking_lot::RwLock;

use crate::error::{Result, StoreError};
use crate::person::{Person, UpdatePerson};

/// Ordered, insertion-preserving collection of persons.
///
/// Lookups resolve to the first record whose id loosely matches the request.
/// Each mutating call holds the write lock for the full lookup and write, so
/// a failed update or removal never leaves the collection partially changed.
#[derive(Debug, Default)]
pub struct PersonStore {
    persons: RwLock<Vec<Person>>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store initialised with the given seed records, in order.
    pub fn with_seed(seed: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(seed),
        }
    }

    /// Snapshot of the whole collection in insertion order.
    pub fn list(&self) -> Vec<Person> {
        self.persons.read().clone()
    }

    pub fn len(&self) -> usize {
        self.persons.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.read().is_empty()
    }

    /// First record whose id matches, or `NotFound`.
    pub fn find_by_id(&self, id: &str) -> Result<Person> {
        let persons = self.persons.read();
        position_of(&persons, id)
            .map(|index| persons[index].clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Append a record to the end of the collection and return the updated
    /// collection. No id collision check is made.
    pub fn append(&self, person: Person) -> Vec<Person> {
        let mut persons = self.persons.write();
        tracing::debug!(id = %person.id, position = persons.len(), "Appending person");
        persons.push(person);
        persons.clone()
    }

    /// Overwrite `nome` and `cidade` of the first matching record.
    ///
    /// Returns `NotFound` without touching the collection when no record matches.
    pub fn update_fields(&self, id: &str, update: UpdatePerson) -> Result<Person> {
        let mut persons = self.persons.write();
        let index =
            position_of(&persons, id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let person = &mut persons[index];
        person.nome = update.nome;
        person.cidade = update.cidade;
        Ok(person.clone())
    }

    /// Remove the first matching record and return it. The relative order of
    /// the remaining records is preserved.
    pub fn remove_by_id(&self, id: &str) -> Result<Person> {
        let mut persons = self.persons.write();
        let index =
            position_of(&persons, id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(persons.remove(index))
    }
}

fn position_of(persons: &[Person], id: &str) -> Option<usize> {
    persons.iter().position(|person| person.id.matches(id))
}
