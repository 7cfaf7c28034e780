use common::model::lead::{CombinedLead, SalesNavLead, SchoolLead};
use std::collections::HashMap;

/// Anything addressable by a lead `uid`.
pub trait Keyed {
    fn uid(&self) -> &str;
}

impl Keyed for SchoolLead {
    fn uid(&self) -> &str {
        &self.uid
    }
}

impl Keyed for SalesNavLead {
    fn uid(&self) -> &str {
        &self.uid
    }
}

impl Keyed for CombinedLead {
    fn uid(&self) -> &str {
        &self.uid
    }
}

/// Records keyed by `uid`, iterated in first-insertion order.
///
/// Inserting a `uid` that is already present replaces the stored record but keeps
/// its original position, the same way a JS `Map` or Python `dict` behaves.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record. Returns `true` when an existing record was replaced.
    pub fn insert(&mut self, record: T) -> bool {
        match self.index.get(record.uid()) {
            Some(&pos) => {
                self.records[pos] = record;
                true
            }
            None => {
                self.index.insert(record.uid().to_string(), self.records.len());
                self.records.push(record);
                false
            }
        }
    }

    pub fn get(&self, uid: &str) -> Option<&T> {
        self.index.get(uid).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, uid: &str) -> Option<&mut T> {
        match self.index.get(uid) {
            Some(&pos) => Some(&mut self.records[pos]),
            None => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Keyed> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}
