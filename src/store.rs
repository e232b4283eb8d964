use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::structs::person::Person;

/// In-memory person table keyed by nickname. Lives as long as the process.
///
/// Cloning shares the same table.
#[derive(Clone, Debug, Default)]
pub struct PersonStore {
    inner: Arc<Mutex<HashMap<String, Person>>>,
}

impl PersonStore {
    pub fn new() -> PersonStore {
        PersonStore::default()
    }

    /// Inserts `person` unless its nickname is already taken.
    ///
    /// The lookup and the insert happen under a single lock acquisition, so
    /// among racing callers with the same nickname exactly one gets `true`.
    pub fn try_insert(&self, person: Person) -> bool {
        let mut inner = self.lock();
        if inner.contains_key(&person.nickname) {
            return false;
        }
        inner.insert(person.nickname.clone(), person);
        true
    }

    pub fn get(&self, nickname: &str) -> Option<Person> {
        self.lock().get(nickname).cloned()
    }

    pub fn contains(&self, nickname: &str) -> bool {
        self.lock().contains_key(nickname)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic can't leave the map half-written, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Person>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
